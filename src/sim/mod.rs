//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-stepped only, timers scaled by the frame delta
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or storage dependencies beyond the gateway traits

pub mod autopilot;
pub mod character;
pub mod collision;
pub mod entities;
pub mod player;
pub mod state;
pub mod tick;
pub mod world;

pub use character::{Ability, Character};
pub use collision::Aabb;
pub use entities::{Coin, Obstacle, ObstacleKind, Platform};
pub use player::{JumpKind, Player};
pub use state::{GameEvent, GameOverCause, GamePhase, GameState};
pub use tick::{FrameInput, tick};
pub use world::World;
