//! This module contains the plain-data records a level document is
//! decoded into. There are several conventions for that module.
//!
//! ## Simplicity
//! The records mirror what the level editor writes and nothing more.
//! Turning them into game objects is the game's job.
//!
//! ## Required vs optional
//! A record field the game cannot do without is a plain field, so a
//! missing value fails decoding. Optional editor fields are `Option<T>`
//! with `#[serde(default)]`.
//!
//! ## Editor names
//! Rust-side names are snake_case. Editor keys that differ are mapped
//! with `serde(rename)`. Fields the game does not use are ignored.

use serde::Deserialize;
use serde_json::Value;

use crate::json_load::{DecodeError, decode_section, section_records};

/// Key of the composite holding all the level's sections.
pub static COMPOSITE_KEY: &str = "composite";
/// Key of the nine-patch section. Every nine-patch is a platform.
pub static PLATFORMS_KEY: &str = "sImage9patchs";
/// Key of the image section. Images are the player, portal, powerups
/// and decorations.
pub static IMAGES_KEY: &str = "sImages";

/// The root of the level document as it comes from the editor. The
/// sections stay undecoded until asked for, so one broken section does
/// not prevent reading the other.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct LevelDocument {
    #[serde(default)]
    pub composite: Option<Composite>,
}

/// The top-level scene node.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Composite {
    #[serde(default, rename = "sImage9patchs")]
    pub platforms: Option<Value>,
    #[serde(default, rename = "sImages")]
    pub images: Option<Value>,
}

/// A platform rectangle. `y` is the lower edge.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Editor item identifier. Enemy spawners are tagged through it.
    #[serde(default, rename = "itemIdentifier")]
    pub item_identifier: Option<String>,
    /// Hand-written levels use this key instead.
    #[serde(default)]
    pub identifier: Option<String>,
}

impl PlatformDef {
    /// The platform's tag. `itemIdentifier` wins over `identifier`.
    pub fn tag(&self) -> Option<&str> {
        self.item_identifier
            .as_deref()
            .or(self.identifier.as_deref())
    }
}

/// An image placed in the scene. `(x, y)` is its lower-left corner.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ImageDef {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "imageName")]
    pub image_name: String,
}

impl LevelDocument {
    /// Decode the whole platform section.
    pub fn platforms(&self) -> Result<Vec<PlatformDef>, DecodeError> {
        let composite = self.composite()?;
        decode_section(PLATFORMS_KEY, composite.platforms.as_ref())
    }

    /// Decode the platform section record by record.
    pub fn platform_records(
        &self,
    ) -> Result<impl Iterator<Item = Result<PlatformDef, DecodeError>>, DecodeError> {
        let composite = self.composite()?;
        section_records(PLATFORMS_KEY, composite.platforms.as_ref())
    }

    /// Decode the whole image section.
    pub fn images(&self) -> Result<Vec<ImageDef>, DecodeError> {
        let composite = self.composite()?;
        decode_section(IMAGES_KEY, composite.images.as_ref())
    }

    /// Decode the image section record by record.
    pub fn image_records(
        &self,
    ) -> Result<impl Iterator<Item = Result<ImageDef, DecodeError>>, DecodeError> {
        let composite = self.composite()?;
        section_records(IMAGES_KEY, composite.images.as_ref())
    }

    fn composite(&self) -> Result<&Composite, DecodeError> {
        self.composite.as_ref().ok_or(DecodeError::CompositeAbsent)
    }
}
