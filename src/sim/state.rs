//! Run phases and top-level game state

use serde::{Deserialize, Serialize};

use super::character::Character;
use super::player::Player;
use super::world::World;

/// Top-level screen / run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, any key continues
    Menu,
    /// Choosing one of the four characters
    CharacterSelect,
    /// Active run
    Playing,
    /// Run ended, confirm returns to selection
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Hit an obstacle without a shield
    Collision,
    /// Dropped through a gap
    Fall,
}

/// Something that happened during a frame (drained by the driver for audio/HUD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    RunStarted { character: Character },
    Jumped,
    DoubleJumped,
    AbilityActivated { character: Character },
    AbilityEnded { character: Character },
    CoinCollected { value: u32 },
    SpeedIncreased { speed: f32 },
    GameOver { cause: GameOverCause, coins: u32 },
    NewBest { score: u32 },
    MuteToggled { muted: bool },
    Quit,
}

/// Complete game state owned by the run controller
pub struct GameState {
    pub phase: GamePhase,
    /// Selection cursor, always in 0..CHARACTER_COUNT
    pub selected: usize,
    pub player: Player,
    pub world: World,
    /// Cause of the most recent game over
    pub last_cause: Option<GameOverCause>,
    /// Events raised during the last tick
    pub events: Vec<GameEvent>,
    /// Frames ticked since startup
    pub frame: u64,
    /// Set by the quit action; the driver stops at the next frame boundary
    pub quit: bool,
}

impl GameState {
    /// New session on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            selected: 0,
            player: Player::new(Character::default()),
            world: World::new(seed),
            last_cause: None,
            events: Vec::new(),
            frame: 0,
            quit: false,
        }
    }

    pub fn selected_character(&self) -> Character {
        Character::from_index(self.selected)
    }

    /// Coins collected in the current (or just finished) run
    pub fn run_coins(&self) -> u32 {
        self.world.coins_collected
    }
}
