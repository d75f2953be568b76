//! Per-frame run controller
//!
//! Order within a frame: input is consumed (at most one action per control),
//! then the player is integrated, then the world, then collision and fall
//! checks run against the post-integration positions.

use super::player::{JumpKind, Player};
use super::state::{GameEvent, GameOverCause, GamePhase, GameState};
use crate::audio::AudioSink;
use crate::consts::CHARACTER_COUNT;
use crate::persistence::ScoreStore;

/// Debounced input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Any key went down this frame
    pub any_key: bool,
    pub navigate_left: bool,
    pub navigate_right: bool,
    pub confirm: bool,
    pub jump: bool,
    pub ability: bool,
    /// Level-triggered: duck while held
    pub duck: bool,
    pub toggle_mute: bool,
    pub quit: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    store: &mut dyn ScoreStore,
    audio: &mut dyn AudioSink,
) {
    state.events.clear();
    state.frame += 1;

    // Global controls, independent of phase
    if input.quit {
        state.quit = true;
        state.events.push(GameEvent::Quit);
        log::info!("Quit requested");
        return;
    }
    if input.toggle_mute {
        let muted = audio.toggle_mute();
        state.events.push(GameEvent::MuteToggled { muted });
    }

    let dt = dt.max(0.0);
    match state.phase {
        GamePhase::Menu => {
            if input.any_key {
                state.phase = GamePhase::CharacterSelect;
            }
        }
        GamePhase::CharacterSelect => {
            if input.navigate_left {
                state.selected = (state.selected + CHARACTER_COUNT - 1) % CHARACTER_COUNT;
            }
            if input.navigate_right {
                state.selected = (state.selected + 1) % CHARACTER_COUNT;
            }
            if input.confirm {
                start_run(state);
            }
        }
        GamePhase::Playing => {
            update_playing(state, input, dt, store);
        }
        GamePhase::GameOver => {
            if input.confirm {
                state.phase = GamePhase::CharacterSelect;
            }
        }
    }
}

/// Reset player and world for the selected character and start playing
fn start_run(state: &mut GameState) {
    let character = state.selected_character();
    state.player = Player::new(character);
    state.world.reset();
    state.last_cause = None;
    state.phase = GamePhase::Playing;
    state.events.push(GameEvent::RunStarted { character });
    log::info!(
        "Run started as {} ({})",
        character.name(),
        character.ability().name
    );
}

fn update_playing(state: &mut GameState, input: &FrameInput, dt: f32, store: &mut dyn ScoreStore) {
    let player = &mut state.player;

    if input.jump {
        match player.jump() {
            Some(JumpKind::Ground) => state.events.push(GameEvent::Jumped),
            Some(JumpKind::Air) => state.events.push(GameEvent::DoubleJumped),
            None => {}
        }
    }
    if input.ability && player.activate_ability() {
        state.events.push(GameEvent::AbilityActivated {
            character: player.character,
        });
    }
    if input.duck {
        player.duck();
    } else {
        player.stop_duck();
    }

    let was_active = player.ability_active;
    state.world.settle_player(player, dt);
    if was_active && !player.ability_active {
        state.events.push(GameEvent::AbilityEnded {
            character: player.character,
        });
    }

    state.world.update(dt, &state.player, &mut state.events);

    // Collision wins when both predicates hold in the same frame
    let cause = if state.world.obstacle_hit(&state.player).is_some() {
        Some(GameOverCause::Collision)
    } else if state.world.has_fallen(&state.player) {
        Some(GameOverCause::Fall)
    } else {
        None
    };
    if let Some(cause) = cause {
        end_run(state, cause, store);
    }
}

/// Enter GameOver and hand the run's coins to the persistence gateway
fn end_run(state: &mut GameState, cause: GameOverCause, store: &mut dyn ScoreStore) {
    let coins = state.world.coins_collected;
    state.phase = GamePhase::GameOver;
    state.last_cause = Some(cause);
    state.events.push(GameEvent::GameOver { cause, coins });

    match store.submit_best(coins) {
        Ok(true) => {
            log::info!("New best score: {}", coins);
            state.events.push(GameEvent::NewBest { score: coins });
        }
        Ok(false) => {}
        Err(e) => log::warn!("Failed to save best score: {}", e),
    }
    if let Err(e) = store.add_coins(coins) {
        log::warn!("Failed to save coin total: {}", e);
    }

    log::info!(
        "Game over ({:?}) as {}: {} coins, best {}",
        cause,
        state.player.character.name(),
        coins,
        store.record().best_score
    );
}
