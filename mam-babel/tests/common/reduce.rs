//! Tests for reducing verse trees with a handler registry.

use super::{handler_entries, handlers};
use mam_babel::common::reduce::{reduce, Reducer};
use mam_babel::error::BabelError;
use mam_babel::ir::fragment::{Element, Fragment};
use mam_babel::ir::source::SourceNode;
use mam_babel::registry::{HandlerAction, HandlerKey, HandlerRegistry};

fn kq(ketiv: &str, qere: &str) -> SourceNode {
    SourceNode::new("kq")
        .with_child(SourceNode::text_leaf("k", ketiv))
        .with_child(SourceNode::text_leaf("q", qere))
}

#[test]
fn test_words_merge_into_one_run() {
    let verse = SourceNode::new("verse").with_children([
        SourceNode::text_leaf("w", "אב"),
        SourceNode::text_leaf("w", "ג"),
        SourceNode::new("space"),
        SourceNode::text_leaf("w", "ד"),
    ]);
    assert_eq!(
        reduce(&verse, &handlers()).unwrap(),
        vec![Fragment::text("אבג ד")]
    );
}

#[test]
fn test_function_handler_sees_each_child() {
    let verse = SourceNode::new("verse").with_child(kq("דה", "וז"));
    let out = reduce(&verse, &handlers()).unwrap();
    assert_eq!(
        out,
        vec![Fragment::span(
            "mam-kq",
            vec![
                Fragment::span("mam-kq-k", vec![Fragment::text("דה")]),
                Fragment::text(" "),
                Fragment::span("mam-kq-q", vec![Fragment::text("וז")]),
            ],
        )]
    );
}

#[test]
fn test_function_handler_errors_propagate() {
    let broken = SourceNode::new("kq").with_child(SourceNode::text_leaf("k", "א"));
    let verse = SourceNode::new("verse").with_child(broken);
    assert!(matches!(
        reduce(&verse, &handlers()),
        Err(BabelError::MalformedNode { tag, .. }) if tag == "kq"
    ));
}

#[test]
fn test_dropped_node_leaves_neighbours_adjacent() {
    let verse = SourceNode::new("verse").with_children([
        SourceNode::text_leaf("w", "ה"),
        SourceNode::text_leaf("note", "editorial"),
        SourceNode::text_leaf("w", "ו"),
    ]);
    assert_eq!(
        reduce(&verse, &handlers()).unwrap(),
        vec![Fragment::text("הו")]
    );
}

#[test]
fn test_markers_are_not_fused() {
    let verse = SourceNode::new("verse").with_children([SourceNode::new("pe"), SourceNode::new("pe")]);
    let marker = Element::new("span").with_attr("class", "mam-spi-pe");
    assert_eq!(
        reduce(&verse, &handlers()).unwrap(),
        vec![Fragment::from(marker.clone()), Fragment::from(marker)]
    );
}

#[test]
fn test_class_distinguishes_handlers() {
    let mut entries = handler_entries();
    entries.push((
        HandlerKey::new("w", Some("big")),
        HandlerAction::Wrap {
            tag: "big".to_string(),
            class: None,
        }
        .into(),
    ));
    let registry = HandlerRegistry::from_entries(entries);
    let verse = SourceNode::new("verse").with_children([
        SourceNode::text_leaf("w", "א").with_attr("class", "big"),
        SourceNode::text_leaf("w", "ב"),
    ]);
    assert_eq!(
        reduce(&verse, &registry).unwrap(),
        vec![
            Fragment::from(Element::new("big").with_contents(vec![Fragment::text("א")])),
            Fragment::text("ב"),
        ]
    );
}

#[test]
fn test_unregistered_class_is_a_schema_gap() {
    let verse = SourceNode::new("verse")
        .with_child(SourceNode::text_leaf("w", "א").with_attr("class", "small"));
    match reduce(&verse, &handlers()) {
        Err(BabelError::SchemaGap { tag, class }) => {
            assert_eq!(tag, "w");
            assert_eq!(class.as_deref(), Some("small"));
        }
        other => panic!("expected schema gap, got {other:?}"),
    }
}

#[test]
fn test_custom_merge_step() {
    fn keep(fragments: Vec<Fragment>) -> Vec<Fragment> {
        fragments
    }
    let registry = handlers();
    let verse = SourceNode::new("verse").with_children([
        SourceNode::text_leaf("w", "א"),
        SourceNode::text_leaf("w", "ב"),
    ]);
    let out = Reducer::new(&registry).with_merge(keep).reduce(&verse).unwrap();
    assert_eq!(out, vec![Fragment::text("א"), Fragment::text("ב")]);
}
