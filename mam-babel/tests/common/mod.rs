//! Shared fixtures: a small MAM-XML book group and the handlers that reduce it.

mod reduce;

use mam_babel::error::BabelError;
use mam_babel::ir::fragment::Fragment;
use mam_babel::ir::source::SourceNode;
use mam_babel::registry::{Handler, HandlerAction, HandlerFn, HandlerKey, HandlerRegistry};

pub const BOOK_GROUP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<book39s>
  <book osisID="Gen">
    <chapter osisID="Gen.1">
      <verse osisID="Gen.1.1"><w text="אב"/><w text="ג"/><space/><kq><k text="דה"/><q text="וז"/></kq><pe/></verse>
      <verse osisID="Gen.1.2"><w text="ה"/><note text="editorial"/><w text="ו"/></verse>
    </chapter>
  </book>
  <book osisID="Exod">
    <chapter osisID="Exod.1">
      <verse osisID="Exod.1.1"><w text="ז"/></verse>
    </chapter>
  </book>
</book39s>
"#;

/// Ketiv/qere: the written and the read form side by side.
fn ketiv_qere(
    node: &SourceNode,
    _merged: Vec<Fragment>,
    per_child: &[Vec<Fragment>],
) -> Result<Vec<Fragment>, BabelError> {
    match per_child {
        [ketiv, qere] => Ok(vec![Fragment::span(
            "mam-kq",
            vec![
                Fragment::span("mam-kq-k", ketiv.clone()),
                Fragment::text(" "),
                Fragment::span("mam-kq-q", qere.clone()),
            ],
        )]),
        _ => Err(BabelError::MalformedNode {
            tag: node.tag.clone(),
            reason: format!("expected 2 children, found {}", per_child.len()),
        }),
    }
}

/// The fixture rules, for tests that extend them before building a registry.
pub fn handler_entries() -> Vec<(HandlerKey, Handler)> {
    let actions = [
        (HandlerKey::new("verse", None), HandlerAction::Pass),
        (HandlerKey::new("w", None), HandlerAction::Pass),
        (HandlerKey::new("k", None), HandlerAction::Pass),
        (HandlerKey::new("q", None), HandlerAction::Pass),
        (HandlerKey::new("note", None), HandlerAction::Drop),
        (
            HandlerKey::new("space", None),
            HandlerAction::Literal {
                text: " ".to_string(),
            },
        ),
        (
            HandlerKey::new("pe", None),
            HandlerAction::Marker {
                tag: "span".to_string(),
                class: Some("mam-spi-pe".to_string()),
            },
        ),
    ];
    let mut entries: Vec<(HandlerKey, Handler)> = actions
        .into_iter()
        .map(|(key, action)| (key, action.into()))
        .collect();
    entries.push((HandlerKey::new("kq", None), (ketiv_qere as HandlerFn).into()));
    entries
}

pub fn handlers() -> HandlerRegistry {
    HandlerRegistry::from_entries(handler_entries())
}
