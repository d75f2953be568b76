//! Playable characters and their timed abilities
//!
//! Every character shares the same body and physics. The only per-character
//! variance is the ability row looked up here.

use serde::{Deserialize, Serialize};

use crate::consts::CHARACTER_COUNT;

/// Static description of a character ability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ability {
    pub name: &'static str,
    /// Seconds the ability stays active after activation
    pub duration: f32,
    /// Allows one extra jump while airborne
    pub air_jump: bool,
    /// Obstacle collisions are ignored
    pub invincible: bool,
    /// Value of each collected coin
    pub coin_multiplier: u32,
    /// Scales the world scroll speed
    pub speed_multiplier: f32,
}

const ABILITIES: [Ability; CHARACTER_COUNT] = [
    Ability {
        name: "Shield",
        duration: 5.0,
        air_jump: false,
        invincible: true,
        coin_multiplier: 1,
        speed_multiplier: 1.0,
    },
    Ability {
        name: "Double Jump",
        duration: 8.0,
        air_jump: true,
        invincible: false,
        coin_multiplier: 1,
        speed_multiplier: 1.0,
    },
    Ability {
        name: "Magnet",
        duration: 6.0,
        air_jump: false,
        invincible: false,
        coin_multiplier: 2,
        speed_multiplier: 1.0,
    },
    Ability {
        name: "Dash",
        duration: 5.0,
        air_jump: false,
        invincible: false,
        coin_multiplier: 1,
        speed_multiplier: 1.8,
    },
];

/// Selectable runner, indexed 0..4 on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Character {
    #[default]
    BigJoe,
    Ali,
    Hamda,
    Speedy,
}

impl Character {
    pub const ALL: [Character; CHARACTER_COUNT] = [
        Character::BigJoe,
        Character::Ali,
        Character::Hamda,
        Character::Speedy,
    ];

    /// Character at a selection index (wraps)
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % CHARACTER_COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Character::BigJoe => "Big Joe",
            Character::Ali => "Ali",
            Character::Hamda => "Hamda",
            Character::Speedy => "Speedy",
        }
    }

    pub fn ability(self) -> &'static Ability {
        &ABILITIES[self.index()]
    }
}
