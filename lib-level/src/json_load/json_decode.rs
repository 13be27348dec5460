//! This module contains logic for decoding the typed records out of
//! the raw sections of a [crate::LevelDocument].

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::level::COMPOSITE_KEY;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Composite ({COMPOSITE_KEY:?}) not found")]
    CompositeAbsent,
    #[error("Section {section:?} not found")]
    SectionAbsent { section: &'static str },
    #[error("Expected section {section:?} to be an array")]
    SectionNotArray { section: &'static str },
    #[error("Section {section:?}, record {index}: failed to decode")]
    Record {
        section: &'static str,
        index: usize,
        #[source]
        reason: serde_json::Error,
    },
}

/// Iterate over the records of a section, decoding them one at a time.
/// Records after a bad one can still be pulled, callers that follow
/// the editor's order stop at the first error.
pub fn section_records<'a, T: DeserializeOwned>(
    section: &'static str,
    value: Option<&'a Value>,
) -> Result<impl Iterator<Item = Result<T, DecodeError>>, DecodeError> {
    let Some(value) = value else {
        return Err(DecodeError::SectionAbsent { section });
    };
    let Some(records) = value.as_array() else {
        return Err(DecodeError::SectionNotArray { section });
    };

    Ok(records.iter().enumerate().map(move |(index, record)| {
        T::deserialize(record).map_err(|reason| DecodeError::Record {
            section,
            index,
            reason,
        })
    }))
}

/// Decode every record of a section. The first bad record fails
/// the whole section.
pub fn decode_section<T: DeserializeOwned>(
    section: &'static str,
    value: Option<&Value>,
) -> Result<Vec<T>, DecodeError> {
    section_records(section, value)?.collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DecodeError, decode_section, section_records};
    use crate::{ImageDef, PlatformDef};

    #[test]
    fn absent_section() {
        let res = decode_section::<ImageDef>("sImages", None);
        assert!(matches!(
            res,
            Err(DecodeError::SectionAbsent { section: "sImages" })
        ));
    }

    #[test]
    fn section_not_array() {
        let value = json!({ "x": 1 });
        let res = decode_section::<ImageDef>("sImages", Some(&value));
        assert!(matches!(res, Err(DecodeError::SectionNotArray { .. })));
    }

    #[test]
    fn bad_record_index() {
        let value = json!([
            { "x": 0, "y": 0, "width": 10, "height": 5 },
            { "x": 0, "y": 0, "width": 10 },
        ]);
        let res = decode_section::<PlatformDef>("sImage9patchs", Some(&value));
        match res {
            Err(DecodeError::Record { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected record error, got {other:?}"),
        }
    }

    #[test]
    fn integers_and_floats() {
        let value = json!([{ "x": 3, "y": 4.5, "imageName": "powerup" }]);
        let images = decode_section::<ImageDef>("sImages", Some(&value)).unwrap();
        assert_eq!(
            images,
            vec![ImageDef {
                x: 3.0,
                y: 4.5,
                image_name: "powerup".to_string(),
            }]
        );
    }

    #[test]
    fn identifier_keys() {
        let value = json!([
            { "x": 0, "y": 0, "width": 1, "height": 1, "itemIdentifier": "Enemy" },
            { "x": 0, "y": 0, "width": 1, "height": 1, "identifier": "Enemy" },
            { "x": 0, "y": 0, "width": 1, "height": 1 },
            { "x": 0, "y": 0, "width": 1, "height": 1, "itemIdentifier": "Enemy", "identifier": "Crate" },
        ]);
        let platforms = decode_section::<PlatformDef>("sImage9patchs", Some(&value)).unwrap();
        let tags = platforms.iter().map(|p| p.tag()).collect::<Vec<_>>();
        assert_eq!(tags, [Some("Enemy"), Some("Enemy"), None, Some("Enemy")]);
    }

    #[test]
    fn records_after_bad_one() {
        let value = json!([
            { "x": 1, "y": 2, "imageName": "powerup" },
            { "x": 1, "imageName": "powerup" },
            { "x": 5, "y": 6, "imageName": "powerup" },
        ]);
        let records = section_records::<ImageDef>("sImages", Some(&value))
            .unwrap()
            .collect::<Vec<_>>();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].as_ref().unwrap().x, 1.0);
        assert!(matches!(records[1], Err(DecodeError::Record { index: 1, .. })));
        assert_eq!(records[2].as_ref().unwrap().y, 6.0);
    }

    #[test]
    fn string_coordinate_rejected() {
        let value = json!([{ "x": "3", "y": 4, "imageName": "powerup" }]);
        let res = decode_section::<ImageDef>("sImages", Some(&value));
        assert!(matches!(res, Err(DecodeError::Record { index: 0, .. })));
    }
}
