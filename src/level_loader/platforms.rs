use std::cmp::Ordering;

use lib_level::json_load::DecodeError;
use lib_level::{LevelDocument, PlatformDef};
use log::info;

use super::LoaderCfg;
use crate::entities::Platform;

/// The decoded platform section, ready to be merged into a level.
#[derive(Debug, Default, PartialEq)]
pub struct PlatformSection {
    /// Sorted by `top`, highest first.
    pub platforms: Vec<Platform>,
    /// Indices into `platforms` of every enemy spawner, in document order.
    pub enemy_spawns: Vec<usize>,
}

/// Build platforms record by record. On a bad record the platforms
/// built so far are still returned, next to the error.
pub fn extract_platforms(
    document: &LevelDocument,
    cfg: &LoaderCfg,
) -> (PlatformSection, Result<(), DecodeError>) {
    match document.platform_records() {
        Ok(records) => build_platforms(records, cfg),
        Err(e) => (PlatformSection::default(), Err(e)),
    }
}

fn build_platforms(
    records: impl IntoIterator<Item = Result<PlatformDef, DecodeError>>,
    cfg: &LoaderCfg,
) -> (PlatformSection, Result<(), DecodeError>) {
    let mut platforms = Vec::new();
    let mut spawners = Vec::new();
    let mut res = Ok(());

    for (idx, record) in records.into_iter().enumerate() {
        let def = match record {
            Ok(def) => def,
            Err(e) => {
                res = Err(e);
                break;
            }
        };

        let top = def.y + def.height;
        info!(
            "Loaded a platform at x = {} y = {} w = {} h = {}",
            def.x, top, def.width, def.height
        );
        platforms.push((idx, Platform::new(def.x, top, def.width, def.height)));

        if def.tag() == Some(cfg.enemy_tag.as_str()) {
            spawners.push(idx);
        }
    }

    // Stable, so platforms with the same top keep the document order.
    platforms.sort_by(|(_, a), (_, b)| b.top.partial_cmp(&a.top).unwrap_or(Ordering::Equal));

    let mut sorted_idx = vec![0; platforms.len()];
    for (pos, (idx, _)) in platforms.iter().enumerate() {
        sorted_idx[*idx] = pos;
    }

    let section = PlatformSection {
        platforms: platforms.into_iter().map(|(_, platform)| platform).collect(),
        enemy_spawns: spawners.into_iter().map(|idx| sorted_idx[idx]).collect(),
    };
    (section, res)
}
