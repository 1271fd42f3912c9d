//! Export tests for the CSV format, through the publishing pipeline

use crate::common::{handlers, BOOK_GROUP_XML};
use mam_babel::book_group::read_book_group;
use mam_babel::format::RenderOptions;
use mam_babel::publish::{publish, PublishArtifact, PublishSpec};
use std::fs;
use tempfile::tempdir;

fn header() -> Vec<(String, String)> {
    vec![
        ("Index Title".to_string(), "{book}".to_string()),
        ("Version Title".to_string(), "Miqra according to the Masorah".to_string()),
        ("Language".to_string(), "he".to_string()),
    ]
}

#[test]
fn test_book_files_are_written_per_format() {
    let dir = tempdir().unwrap();
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap();
    let options = RenderOptions {
        csv_header: header(),
        ..RenderOptions::default()
    };
    let artifacts = publish(
        PublishSpec::new(&group, &["csv", "unicode-names"])
            .with_output_root(dir.path())
            .with_path_qual("-test")
            .with_options(options),
    )
    .unwrap();

    assert_eq!(
        artifacts,
        vec![
            PublishArtifact::File(dir.path().join("csv-test/Genesis.csv")),
            PublishArtifact::File(dir.path().join("unicode-names-test/Genesis.txt")),
            PublishArtifact::File(dir.path().join("csv-test/Exodus.csv")),
            PublishArtifact::File(dir.path().join("unicode-names-test/Exodus.txt")),
        ]
    );

    let genesis = fs::read_to_string(dir.path().join("csv-test/Genesis.csv")).unwrap();
    assert_eq!(
        genesis,
        "Index Title,Genesis\r\n\
         Version Title,Miqra according to the Masorah\r\n\
         Language,he\r\n\
         Genesis 1:1,אבג דה וז\r\n\
         Genesis 1:2,הו\r\n"
    );
}

#[test]
fn test_header_can_be_excluded() {
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap();
    let options = RenderOptions {
        csv_header: header(),
        exclude_csv_header: true,
        ..RenderOptions::default()
    };
    let artifacts = publish(PublishSpec::new(&group, &["csv"]).with_options(options)).unwrap();
    match &artifacts[1] {
        PublishArtifact::InMemory { title, content, .. } => {
            assert_eq!(title, "Exodus");
            assert_eq!(content, "Exodus 1:1,ז\r\n");
        }
        other => panic!("expected in-memory artifact, got {other:?}"),
    }
}

#[test]
fn test_rerun_replaces_previous_output() {
    let dir = tempdir().unwrap();
    let group = read_book_group(BOOK_GROUP_XML, &handlers(), "sef").unwrap();
    let path = dir.path().join("csv/Exodus.csv");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "stale").unwrap();

    publish(PublishSpec::new(&group, &["csv"]).with_output_root(dir.path())).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Exodus 1:1,ז\r\n");
}
