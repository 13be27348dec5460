use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

/// The level editor conventions the loader relies on. Offsets are
/// added to a record's lower-left corner to get the entity position.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderCfg {
    /// Platform identifier marking an enemy spawner.
    pub enemy_tag: String,
    pub player_sprite: String,
    pub exit_portal_sprite: String,
    pub powerup_sprite: String,
    /// Where GigaGal's eyes are relative to her sprite corner.
    pub player_eye_offset: Vec2,
    pub exit_portal_center: Vec2,
    pub powerup_center: Vec2,
}

impl LoaderCfg {
    /// Read the config from a JSON file. Absent fields keep their
    /// default values.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("decoding {path:?}"))
    }
}

impl Default for LoaderCfg {
    fn default() -> Self {
        LoaderCfg {
            enemy_tag: "Enemy".to_string(),
            player_sprite: "standing-right".to_string(),
            exit_portal_sprite: "exit-portal-1".to_string(),
            powerup_sprite: "powerup".to_string(),
            player_eye_offset: vec2(16.0, 24.0),
            exit_portal_center: vec2(31.0, 31.0),
            powerup_center: vec2(7.0, 5.0),
        }
    }
}
