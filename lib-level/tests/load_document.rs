use std::io::Write;

use lib_level::json_load::{DecodeError, document_from_str, load_document};
use lib_level::{ImageDef, LoadLevelError, PlatformDef};
use tempfile::NamedTempFile;

static LEVEL: &str = r#"{
    "composite": {
        "sImage9patchs": [
            { "x": 0, "y": 0, "width": 10, "height": 5, "imageName": "platform" },
            { "x": 20, "y": 10, "width": 10, "height": 5, "itemIdentifier": "Enemy" }
        ],
        "sImages": [
            { "x": 3, "y": 4, "imageName": "standing-right", "layerName": "Default" }
        ]
    },
    "sceneName": "Level1"
}"#;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LEVEL.as_bytes()).unwrap();

    let document = load_document(file.path()).unwrap();
    let platforms = document.platforms().unwrap();
    let images = document.images().unwrap();

    assert_eq!(
        platforms,
        vec![
            PlatformDef {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 5.0,
                item_identifier: None,
                identifier: None,
            },
            PlatformDef {
                x: 20.0,
                y: 10.0,
                width: 10.0,
                height: 5.0,
                item_identifier: Some("Enemy".to_string()),
                identifier: None,
            },
        ]
    );
    assert_eq!(
        images,
        vec![ImageDef {
            x: 3.0,
            y: 4.0,
            image_name: "standing-right".to_string(),
        }]
    );
}

#[test]
fn test_both_identifier_keys() {
    let document = document_from_str(
        r#"{ "composite": { "sImage9patchs": [
            { "x": 20, "y": 10, "width": 10, "height": 5,
              "itemIdentifier": "Enemy", "identifier": "Enemy" }
        ] } }"#,
    )
    .unwrap();

    let platforms = document.platforms().unwrap();
    assert_eq!(platforms.len(), 1);
    assert_eq!(platforms[0].tag(), Some("Enemy"));
}

#[test]
fn test_record_by_record() {
    let document = document_from_str(
        r#"{ "composite": { "sImages": [
            { "x": 0, "y": 0, "imageName": "standing-right" },
            { "x": 3, "imageName": "powerup" }
        ] } }"#,
    )
    .unwrap();

    let mut records = document.image_records().unwrap();
    assert_eq!(records.next().unwrap().unwrap().image_name, "standing-right");
    assert!(matches!(
        records.next(),
        Some(Err(DecodeError::Record { index: 1, .. }))
    ));
    assert!(records.next().is_none());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let res = load_document(&path);
    assert!(matches!(res, Err(LoadLevelError::Open { .. })));
}

#[test]
fn test_malformed_json() {
    let res = document_from_str("{ \"composite\": [");
    assert!(matches!(res, Err(LoadLevelError::Parsing(_))));
}

#[test]
fn test_missing_composite() {
    let document = document_from_str("{}").unwrap();
    assert!(matches!(
        document.platforms(),
        Err(DecodeError::CompositeAbsent)
    ));
    assert!(matches!(document.images(), Err(DecodeError::CompositeAbsent)));
}

#[test]
fn test_sections_are_independent() {
    let document = document_from_str(
        r#"{ "composite": { "sImage9patchs": [], "sImages": [ { "x": 1 } ] } }"#,
    )
    .unwrap();

    assert!(document.platforms().unwrap().is_empty());
    assert!(matches!(
        document.images(),
        Err(DecodeError::Record { index: 0, .. })
    ));
}

#[test]
fn test_missing_image_section() {
    let document = document_from_str(r#"{ "composite": { "sImage9patchs": [] } }"#).unwrap();
    assert!(matches!(
        document.images(),
        Err(DecodeError::SectionAbsent { section: "sImages" })
    ));
}
