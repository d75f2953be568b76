//! Axis-aligned collision helpers
//!
//! Everything in the runner is a box: the player hitbox, obstacles, coins and
//! the walkable span of each platform. Edges that merely touch do not overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::Platform;

/// Axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test (shared edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Index of the active platform whose open horizontal span contains `x`
pub fn platform_under(x: f32, platforms: &[Platform]) -> Option<usize> {
    platforms.iter().position(|p| p.active && p.contains_x(x))
}

/// Whether `x` lies over a gap (no active platform spans it)
pub fn over_gap(x: f32, platforms: &[Platform]) -> bool {
    platform_under(x, platforms).is_none()
}
