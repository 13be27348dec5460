use glam::vec2;
use lib_level::json_load::DecodeError;
use lib_level::{ImageDef, LevelDocument};
use log::info;

use super::LoaderCfg;
use crate::entities::{ExitPortal, GigaGal, Powerup};
use crate::level::LevelId;

/// Everything the image section places in a level.
#[derive(Debug, Default, PartialEq)]
pub struct EntitySection {
    pub gigagal: Option<GigaGal>,
    pub exit_portal: Option<ExitPortal>,
    pub powerups: Vec<Powerup>,
}

/// Place entities record by record. On a bad record the entities
/// placed so far are still returned, next to the error.
pub fn extract_entities(
    document: &LevelDocument,
    level: LevelId,
    cfg: &LoaderCfg,
) -> (EntitySection, Result<(), DecodeError>) {
    match document.image_records() {
        Ok(records) => build_entities(records, level, cfg),
        Err(e) => (EntitySection::default(), Err(e)),
    }
}

fn build_entities(
    records: impl IntoIterator<Item = Result<ImageDef, DecodeError>>,
    level: LevelId,
    cfg: &LoaderCfg,
) -> (EntitySection, Result<(), DecodeError>) {
    let mut section = EntitySection::default();

    for record in records {
        let def = match record {
            Ok(def) => def,
            Err(e) => return (section, Err(e)),
        };
        let lower_left_corner = vec2(def.x, def.y);
        let name = def.image_name.as_str();

        if name == cfg.player_sprite {
            let position = lower_left_corner + cfg.player_eye_offset;
            info!("Loaded GigaGal at {position}");
            section.gigagal = Some(GigaGal::new(position, level));
        } else if name == cfg.exit_portal_sprite {
            let position = lower_left_corner + cfg.exit_portal_center;
            info!("Loaded the exit portal at {position}");
            section.exit_portal = Some(ExitPortal::new(position));
        } else if name == cfg.powerup_sprite {
            let position = lower_left_corner + cfg.powerup_center;
            info!("Loaded a powerup at {position}");
            section.powerups.push(Powerup::new(position));
        } else {
            info!("Skipping image {name:?}");
        }
    }

    (section, Ok(()))
}
