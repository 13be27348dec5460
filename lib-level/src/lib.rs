pub mod json_load;
mod level;

pub use level::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadLevelError {
    #[error("Failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        reason: std::io::Error,
    },
    #[error("Failed to parse the level document")]
    Parsing(#[source] serde_json::Error),
}
