//! Scrolling world entities: platforms, obstacles and coins

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// A walkable metro segment
///
/// Platforms are never destroyed; once one scrolls off the left edge it is
/// moved to the end of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub active: bool,
}

impl Platform {
    pub fn new(x: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, PLATFORM_Y),
            width,
            active: true,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Open interval test: standing exactly on an edge is not support
    pub fn contains_x(&self, x: f32) -> bool {
        x > self.left() && x < self.right()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the platform, must be jumped over
    Ground,
    /// Hangs at jump height
    Flying,
}

impl ObstacleKind {
    /// Distance from the platform surface up to the obstacle top
    pub fn rise(self) -> f32 {
        match self {
            ObstacleKind::Ground => GROUND_OBSTACLE_RISE,
            ObstacleKind::Flying => FLYING_OBSTACLE_RISE,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            ObstacleKind::Ground => GROUND_OBSTACLE_HEIGHT,
            ObstacleKind::Flying => FLYING_OBSTACLE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    pub active: bool,
}

impl Obstacle {
    /// Create an obstacle of `kind` with its left edge at `x`
    pub fn new(kind: ObstacleKind, x: f32) -> Self {
        Self {
            pos: Vec2::new(x, PLATFORM_Y - kind.rise()),
            size: Vec2::new(OBSTACLE_WIDTH, kind.height()),
            kind,
            active: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: f32,
    /// One-way: never reset once set
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: COIN_SIZE,
            collected: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size < 0.0
    }
}
