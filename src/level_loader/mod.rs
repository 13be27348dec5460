//! Building a [Level] out of a level document.
//!
//! Loading never fails. Any problem is logged and the level is returned
//! as far as it got. The platform section is merged first, then the
//! image section. Records are read in document order and reading stops
//! at the first bad one; whatever was built before it stays in the level.

mod cfg;
mod entities;
mod platforms;

pub use cfg::*;
pub use entities::*;
pub use platforms::*;

use std::path::Path;

use anyhow::Context;
use lib_level::json_load::load_document;
use log::error;

use crate::entities::{Enemy, PlatformId};
use crate::level::{Level, Viewport};

pub static LEVEL_ERROR_MESSAGE: &str = "There was a problem loading the level.";

#[derive(Debug, Default, Clone)]
pub struct LevelLoader {
    cfg: LoaderCfg,
}

impl LevelLoader {
    pub fn new(cfg: LoaderCfg) -> Self {
        LevelLoader { cfg }
    }

    pub fn load(&self, path: impl AsRef<Path>, viewport: Viewport) -> Level {
        let path = path.as_ref();
        let mut level = Level::new(viewport);

        if let Err(e) = self.load_into(path, &mut level) {
            error!("{e:#}");
            error!("{LEVEL_ERROR_MESSAGE}");
        }

        level
    }

    fn load_into(&self, path: &Path, level: &mut Level) -> anyhow::Result<()> {
        let document = load_document(path).with_context(|| format!("loading {path:?}"))?;

        let (platforms, res) = extract_platforms(&document, &self.cfg);
        merge_platforms(level, platforms);
        res.context("loading platforms")?;

        let (entities, res) = extract_entities(&document, level.id(), &self.cfg);
        merge_entities(level, entities);
        res.context("loading entities")?;

        Ok(())
    }
}

fn merge_platforms(level: &mut Level, section: PlatformSection) {
    let PlatformId(first) = level.extend_platforms(section.platforms);
    level.enemies_mut().extend(
        section
            .enemy_spawns
            .into_iter()
            .map(|idx| Enemy::new(PlatformId(first + idx))),
    );
}

fn merge_entities(level: &mut Level, section: EntitySection) {
    if let Some(gigagal) = section.gigagal {
        level.set_gigagal(gigagal);
    }
    if let Some(exit_portal) = section.exit_portal {
        level.set_exit_portal(exit_portal);
    }
    level.powerups_mut().extend(section.powerups);
}
