mod json_decode;

pub use json_decode::*;

use crate::LoadLevelError;
use crate::level::LevelDocument;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open and parse a level document. Sections are decoded later,
/// through [LevelDocument::platforms] and [LevelDocument::images].
pub fn load_document(path: impl AsRef<Path>) -> Result<LevelDocument, LoadLevelError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|reason| LoadLevelError::Open {
        path: path.to_path_buf(),
        reason,
    })?;
    let document =
        serde_json::from_reader(BufReader::new(file)).map_err(LoadLevelError::Parsing)?;

    Ok(document)
}

/// Parse a level document from memory.
pub fn document_from_str(data: &str) -> Result<LevelDocument, LoadLevelError> {
    serde_json::from_str(data).map_err(LoadLevelError::Parsing)
}
