use std::sync::atomic::{AtomicU32, Ordering};

use crate::entities::*;

static NEXT_LEVEL_ID: AtomicU32 = AtomicU32::new(0);

/// A non-owning handle to a [Level]. Unique per level created in
/// this process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelId(u32);

/// The camera description the level is played through. The loader
/// does not look inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            world_width: 160.0,
            world_height: 160.0,
        }
    }
}

/// A loaded level. After loading, platforms are sorted by `top`,
/// highest first.
#[derive(Debug)]
pub struct Level {
    id: LevelId,
    viewport: Viewport,
    platforms: Vec<Platform>,
    enemies: Vec<Enemy>,
    powerups: Vec<Powerup>,
    gigagal: Option<GigaGal>,
    exit_portal: Option<ExitPortal>,
}

impl Level {
    pub fn new(viewport: Viewport) -> Self {
        Level {
            id: LevelId(NEXT_LEVEL_ID.fetch_add(1, Ordering::Relaxed)),
            viewport,
            platforms: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            gigagal: None,
            exit_portal: None,
        }
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(id.0)
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    pub fn powerups_mut(&mut self) -> &mut Vec<Powerup> {
        &mut self.powerups
    }

    pub fn gigagal(&self) -> Option<&GigaGal> {
        self.gigagal.as_ref()
    }

    pub fn gigagal_mut(&mut self) -> Option<&mut GigaGal> {
        self.gigagal.as_mut()
    }

    pub fn set_gigagal(&mut self, gigagal: GigaGal) {
        self.gigagal = Some(gigagal);
    }

    pub fn exit_portal(&self) -> Option<&ExitPortal> {
        self.exit_portal.as_ref()
    }

    pub fn set_exit_portal(&mut self, exit_portal: ExitPortal) {
        self.exit_portal = Some(exit_portal);
    }

    /// The platform an enemy patrols.
    pub fn enemy_platform(&self, enemy: &Enemy) -> Option<&Platform> {
        self.platform(enemy.platform)
    }

    /// Append platforms, returning the id the first one got.
    pub(crate) fn extend_platforms(&mut self, platforms: Vec<Platform>) -> PlatformId {
        let first = PlatformId(self.platforms.len());
        self.platforms.extend(platforms);
        first
    }
}
