use glam::Vec2;

use crate::level::LevelId;

/// Index of a platform in [crate::Level::platforms].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlatformId(pub usize);

/// A static, axis-aligned platform. `top` is the upper edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Platform {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, top: f32, width: f32, height: f32) -> Self {
        Platform {
            x,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top - self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// An enemy patrolling a platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    pub platform: PlatformId,
}

impl Enemy {
    pub fn new(platform: PlatformId) -> Self {
        Enemy { platform }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Powerup {
    pub position: Vec2,
}

impl Powerup {
    pub fn new(position: Vec2) -> Self {
        Powerup { position }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExitPortal {
    pub position: Vec2,
}

impl ExitPortal {
    pub fn new(position: Vec2) -> Self {
        ExitPortal { position }
    }
}

/// The player. `position` is her eye point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GigaGal {
    pub spawn_location: Vec2,
    pub position: Vec2,
    /// The level she was spawned into.
    pub level: LevelId,
}

impl GigaGal {
    pub fn new(spawn_location: Vec2, level: LevelId) -> Self {
        GigaGal {
            spawn_location,
            position: spawn_location,
            level,
        }
    }

    /// Put her back at the spawn location.
    pub fn respawn(&mut self) {
        self.position = self.spawn_location;
    }
}
