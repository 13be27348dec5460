//! GigaGal's level loading. A level is authored in the level editor and
//! saved as a JSON scene; [load_level] turns it into a [Level] the game
//! runtime can play.
//!
//! The coordinate system is the editor's:
//! * `X` points right
//! * `Y` points up

pub mod entities;
mod level;
pub mod level_loader;

use std::path::Path;

pub use level::*;
pub use level_loader::{LevelLoader, LoaderCfg};

/// Load a level with the default editor conventions. Never fails, see
/// [LevelLoader::load].
pub fn load_level(path: impl AsRef<Path>, viewport: Viewport) -> Level {
    LevelLoader::default().load(path, viewport)
}
