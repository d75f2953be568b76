//! Read-only frame view for renderers
//!
//! A renderer gets everything it draws from here and never touches the
//! simulation state directly.

use glam::Vec2;
use serde::Serialize;

use crate::persistence::Record;
use crate::sim::{Character, Coin, GameOverCause, GamePhase, GameState, Obstacle, Platform};

/// Player pose and ability status
#[derive(Debug, Clone, Serialize)]
pub struct PlayerPose {
    pub pos: Vec2,
    pub size: Vec2,
    pub character: Character,
    pub airborne: bool,
    pub ducking: bool,
    pub ability_name: &'static str,
    pub ability_active: bool,
    /// Seconds of ability left (0 when inactive)
    pub ability_timer: f32,
    /// Seconds until the ability is ready again
    pub ability_cooldown: f32,
    pub invincible: bool,
}

/// HUD values
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    /// Coins collected this run
    pub coins: u32,
    pub best_score: u32,
    pub total_coins: u32,
    pub speed: f32,
    pub elapsed: f32,
    pub muted: bool,
    pub game_over_cause: Option<GameOverCause>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    /// Highlighted character on the selection screen
    pub selected: Character,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub player: PlayerPose,
    pub hud: Hud,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState, record: Record, muted: bool) -> Self {
        let player = &state.player;
        let world = &state.world;

        Self {
            phase: state.phase,
            selected: state.selected_character(),
            platforms: world
                .platforms
                .iter()
                .filter(|p| p.active)
                .copied()
                .collect(),
            obstacles: world
                .obstacles
                .iter()
                .filter(|o| o.active)
                .copied()
                .collect(),
            coins: world
                .coins
                .iter()
                .filter(|c| !c.collected)
                .copied()
                .collect(),
            player: PlayerPose {
                pos: player.pos,
                size: player.size,
                character: player.character,
                airborne: player.is_jumping,
                ducking: player.is_ducking,
                ability_name: player.character.ability().name,
                ability_active: player.ability_active,
                ability_timer: player.ability_timer,
                ability_cooldown: player.ability_cooldown,
                invincible: player.is_invincible(),
            },
            hud: Hud {
                coins: world.coins_collected,
                best_score: record.best_score,
                total_coins: record.total_coins,
                speed: world.effective_speed(player),
                elapsed: world.elapsed,
                muted,
                game_over_cause: state.last_cause,
            },
        }
    }
}
