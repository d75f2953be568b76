//! Metro Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, world, run phases)
//! - `input`: Debounced input gateway
//! - `persistence`: Best score / total coins record
//! - `audio`: Mute flag and sound cue sink
//! - `snapshot`: Read-only frame view handed to renderers
//! - `settings`: Runtime configuration

pub mod audio;
pub mod input;
pub mod persistence;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use persistence::{FileStore, MemoryStore, Record, ScoreStore};
pub use settings::Settings;

/// Game configuration constants
///
/// Screen space: origin top-left, y grows downward. Distances are in pixels,
/// speeds in pixels per frame, timers in seconds.
pub mod consts {
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Top surface of every platform
    pub const PLATFORM_Y: f32 = 500.0;
    /// Drawn thickness of a platform (render only)
    pub const PLATFORM_THICKNESS: f32 = 100.0;
    pub const PLATFORM_COUNT: usize = 8;
    pub const PLATFORM_WIDTH: f32 = 350.0;
    /// The first platform is longer for a safe start
    pub const START_PLATFORM_WIDTH: f32 = 600.0;
    /// Edge-to-edge gap between consecutive platforms
    pub const PLATFORM_GAP: f32 = 80.0;
    /// How far past the left edge a platform must scroll before it is recycled
    pub const RECYCLE_MARGIN: f32 = 50.0;

    /// World scroll speed at run start
    pub const BASE_SPEED: f32 = 3.0;
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const SPEED_WINDOW_SECS: f32 = 10.0;

    pub const OBSTACLE_INTERVAL_SECS: f32 = 2.0;
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_SPAWN_OFFSET: f32 = 50.0;
    /// Ground obstacles sit on the platform
    pub const GROUND_OBSTACLE_RISE: f32 = 60.0;
    pub const GROUND_OBSTACLE_HEIGHT: f32 = 60.0;
    /// Flying obstacles hang at jump height
    pub const FLYING_OBSTACLE_RISE: f32 = 180.0;
    pub const FLYING_OBSTACLE_HEIGHT: f32 = 30.0;

    pub const COIN_INTERVAL_SECS: f32 = 1.5;
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_SPAWN_OFFSET: f32 = 30.0;
    /// Coins spawn between `COIN_MIN_RISE` and `COIN_MIN_RISE + COIN_RISE_BAND` above the platform
    pub const COIN_MIN_RISE: f32 = 150.0;
    pub const COIN_RISE_BAND: f32 = 100.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 200.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 40.0;

    /// Launch velocity (negative = up), applied per frame
    pub const JUMP_VELOCITY: f32 = -12.0;
    pub const GRAVITY: f32 = 0.5;
    /// Downward nudge when walking off a platform edge
    pub const FALL_START_VELOCITY: f32 = 1.0;
    /// Player counts as standing when within this distance above ground level
    pub const SUPPORT_TOLERANCE: f32 = 5.0;
    /// Run ends once the player top is this far below the platform surface
    pub const FALL_MARGIN: f32 = 50.0;

    /// Shared by every character, starts at activation
    pub const ABILITY_COOLDOWN_SECS: f32 = 8.0;
    pub const CHARACTER_COUNT: usize = 4;
}
