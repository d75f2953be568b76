//! Demo mode - picks inputs for an unattended run
//!
//! Jumps over ground obstacles and platform gaps, and fires the ability as
//! soon as it is ready. Reads the state only.

use super::collision::platform_under;
use super::entities::ObstacleKind;
use super::state::{GamePhase, GameState};
use super::tick::FrameInput;

/// Frames of travel before an obstacle reaches the player at which to take off
const OBSTACLE_LEAD_FRAMES: f32 = 8.0;
/// Frames of travel before the platform edge passes the player's center
const EDGE_LEAD_FRAMES: f32 = 4.0;

/// Choose this frame's input
pub fn plan(state: &GameState) -> FrameInput {
    if state.phase != GamePhase::Playing {
        return FrameInput::default();
    }

    let player = &state.player;
    let world = &state.world;
    let speed = world.effective_speed(player);
    let front = player.pos.x + player.size.x;

    let obstacle_ahead = world.obstacles.iter().any(|o| {
        let distance = o.pos.x - front;
        o.active
            && o.kind == ObstacleKind::Ground
            && distance >= 0.0
            && distance <= speed * OBSTACLE_LEAD_FRAMES
    });

    let edge_ahead = platform_under(player.center_x(), &world.platforms)
        .map(|i| world.platforms[i].right() - player.center_x() <= speed * EDGE_LEAD_FRAMES)
        .unwrap_or(false);

    FrameInput {
        jump: !player.is_jumping && (obstacle_ahead || edge_ahead),
        ability: player.ability_ready(),
        ..Default::default()
    }
}
