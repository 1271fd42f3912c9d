//! Import tests for MAM-XML (MAM-XML → reduced verses)

use crate::common::{handlers, BOOK_GROUP_XML};
use mam_babel::book_group::read_book_group;
use mam_babel::error::BabelError;
use mam_babel::formats::mam_xml::parse_verses;
use mam_babel::ir::fragment::{fragments_from_json, Element, Fragment};
use mam_babel::ir::verse::VerseKey;

#[test]
fn test_verses_are_found_in_document_order() {
    let verses = parse_verses(BOOK_GROUP_XML).unwrap();
    let ids: Vec<_> = verses
        .iter()
        .map(|v| v.attribute("osisID").unwrap())
        .collect();
    assert_eq!(ids, vec!["Gen.1.1", "Gen.1.2", "Exod.1.1"]);
}

#[test]
fn test_book_group_is_grouped_by_book() {
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap();
    let books: Vec<_> = group.books.iter().map(|b| b.book.as_str()).collect();
    assert_eq!(books, vec!["Gen", "Exod"]);
    assert_eq!(group.verse_count(), 3);

    let genesis = group.get("Gen").unwrap();
    assert_eq!(genesis.verses[0].key, VerseKey::new("Gen", 1, 1, "sef"));
    assert_eq!(
        genesis.verses[0].dual,
        vec![
            Fragment::text("אבג "),
            Fragment::span(
                "mam-kq",
                vec![
                    Fragment::span("mam-kq-k", vec![Fragment::text("דה")]),
                    Fragment::text(" "),
                    Fragment::span("mam-kq-q", vec![Fragment::text("וז")]),
                ],
            ),
            Fragment::from(Element::new("span").with_attr("class", "mam-spi-pe")),
        ]
    );
    assert_eq!(genesis.verses[1].dual, vec![Fragment::text("הו")]);
    assert!(genesis.verses[1].alef.is_none());
}

#[test]
fn test_vtrad_is_carried_on_every_key() {
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "bhs").unwrap();
    assert!(group
        .books
        .iter()
        .flat_map(|b| &b.verses)
        .all(|v| v.key.vtrad == "bhs"));
}

#[test]
fn test_verse_without_osis_id() {
    let xml = r#"<book><verse><w text="א"/></verse></book>"#;
    assert!(matches!(
        read_book_group(xml, &handlers(), "sef"),
        Err(BabelError::MissingAttribute { attribute, .. }) if attribute == "osisID"
    ));
}

#[test]
fn test_malformed_osis_id() {
    let xml = r#"<book><verse osisID="Gen.1"><w text="א"/></verse></book>"#;
    assert!(matches!(
        read_book_group(xml, &handlers(), "sef"),
        Err(BabelError::Parse(_))
    ));
}

#[test]
fn test_malformed_xml() {
    assert!(matches!(
        read_book_group("<book><verse>", &handlers(), "sef"),
        Err(BabelError::Parse(_))
    ));
}

#[test]
fn test_text_leaf_with_children_is_malformed() {
    let xml = r#"<book><verse osisID="Gen.1.1"><w text="א"><w text="ב"/></w></verse></book>"#;
    assert!(matches!(
        read_book_group(xml, &handlers(), "sef"),
        Err(BabelError::MalformedNode { tag, .. }) if tag == "w"
    ));
}

#[test]
fn test_reduced_fragments_survive_a_json_dump() {
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap();
    let dual = &group.books[0].verses[0].dual;
    let json = serde_json::to_string(dual).unwrap();
    assert_eq!(&fragments_from_json(&json).unwrap(), dual);
}

#[test]
fn test_unknown_fragment_shape_is_rejected() {
    let json = r#"[{"tag": "span", "colour": "red"}]"#;
    assert!(matches!(
        fragments_from_json(json),
        Err(BabelError::UnexpectedFragment(_))
    ));
}
