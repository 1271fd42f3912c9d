//! Export tests for the Unicode-names format (reduced verses → names listing)

use crate::common::{handlers, BOOK_GROUP_XML};
use insta::assert_snapshot;
use mam_babel::book_group::read_book_group;
use mam_babel::error::BabelError;
use mam_babel::format::{Format, FormatRegistry, RenderOptions};
use mam_babel::formats::UnicodeNamesFormat;
use mam_babel::ir::fragment::Fragment;
use mam_babel::ir::verse::{BookGroup, VerseKey};

fn book_group() -> BookGroup {
    read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap()
}

#[test]
fn test_genesis_listing() {
    let group = book_group();
    let out = UnicodeNamesFormat
        .serialize(group.get("Gen").unwrap(), "Genesis", &RenderOptions::default())
        .unwrap();
    assert_snapshot!(out.trim_end(), @r"
unicode_names Genesis
Gen 1:1 in vtrad sef
α,v,g
SPACE
START span class=mam-kq
    START span class=mam-kq-k
        d,h
    STOP span class=mam-kq-k
    SPACE
    START span class=mam-kq-q
        w,z
    STOP span class=mam-kq-q
STOP span class=mam-kq
START span class=mam-spi-pe

Gen 1:2 in vtrad sef
h,w
");
}

#[test]
fn test_every_verse_ends_with_a_blank_line() {
    let group = book_group();
    let out = UnicodeNamesFormat
        .serialize(group.get("Exod").unwrap(), "Exodus", &RenderOptions::default())
        .unwrap();
    assert_eq!(out, "unicode_names Exodus\nExod 1:1 in vtrad sef\nz\n\n");
}

#[test]
fn test_alternates_are_labelled_blocks() {
    let mut group = book_group();
    let genesis = &mut group.books[0];
    let key = VerseKey::new("Gen", 1, 2, "sef");
    genesis.attach_alternates(
        vec![(key.clone(), vec![Fragment::text("ה")])],
        vec![(key, vec![Fragment::text("ו")])],
    );
    let options = RenderOptions {
        include_alternates: true,
        indent: "  ".to_string(),
        ..RenderOptions::default()
    };
    let out = UnicodeNamesFormat
        .serialize(&group.books[0], "Genesis", &options)
        .unwrap();
    assert!(out.ends_with(
        "Gen 1:2 in vtrad sef\ncant_dual\n  h,w\ncant_alef\n  h\ncant_bet\n  w\n\n"
    ));
    // Gen 1:1 has no alternates and stays unlabelled, with the narrower indent.
    assert!(out.contains("Gen 1:1 in vtrad sef\nα,v,g\nSPACE\nSTART span class=mam-kq\n  START"));
}

#[test]
fn test_alternates_ignored_unless_requested() {
    let mut group = book_group();
    let key = VerseKey::new("Gen", 1, 2, "sef");
    group.books[0].attach_alternates(
        vec![(key.clone(), vec![Fragment::text("ה")])],
        vec![(key, vec![Fragment::text("ו")])],
    );
    let out = UnicodeNamesFormat
        .serialize(&group.books[0], "Genesis", &RenderOptions::default())
        .unwrap();
    assert!(!out.contains("cant_"));
}

#[test]
fn test_single_alternate_is_inconsistent() {
    let mut group = book_group();
    let key = VerseKey::new("Gen", 1, 2, "sef");
    group.books[0].attach_alternates(vec![(key, vec![Fragment::text("ה")])], Vec::new());
    let options = RenderOptions {
        include_alternates: true,
        ..RenderOptions::default()
    };
    assert!(matches!(
        UnicodeNamesFormat.serialize(&group.books[0], "Genesis", &options),
        Err(BabelError::InconsistentVariants { verse, .. }) if verse == "Gen 1:2 in vtrad sef"
    ));
}

#[test]
fn test_registry_lookup() {
    let registry = FormatRegistry::default();
    let group = book_group();
    let out = registry
        .serialize(
            group.get("Exod").unwrap(),
            "Exodus",
            "unicode-names",
            &RenderOptions::default(),
        )
        .unwrap();
    assert!(out.starts_with("unicode_names Exodus\n"));
}
