//! Player physics and the ability state machine
//!
//! Grounded/airborne, ducking/standing and ability active/cooling down are
//! independent flags. Vertical motion is integrated once per frame; ability
//! timers advance with the frame delta.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::character::Character;
use super::collision::Aabb;
use crate::consts::*;

/// Which jump a `jump()` call performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Air,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    /// Vertical velocity in pixels per frame (negative = up)
    pub vel_y: f32,
    pub size: Vec2,
    /// Airborne, either from a jump or from walking off an edge
    pub is_jumping: bool,
    pub is_ducking: bool,
    pub character: Character,
    pub ability_active: bool,
    /// Seconds of ability left, never negative
    pub ability_timer: f32,
    /// Seconds until the ability can be used again, never negative
    pub ability_cooldown: f32,
    /// Air jump available (only while an air-jump ability is active)
    pub double_jump_armed: bool,
    /// Air jump spent during the current airborne phase
    pub double_jump_used: bool,
}

impl Player {
    /// Fresh player standing on the platform plane
    pub fn new(character: Character) -> Self {
        let mut player = Self {
            pos: Vec2::new(PLAYER_X, 0.0),
            vel_y: 0.0,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            is_jumping: false,
            is_ducking: false,
            character,
            ability_active: false,
            ability_timer: 0.0,
            ability_cooldown: 0.0,
            double_jump_armed: false,
            double_jump_used: false,
        };
        player.pos.y = player.ground_level();
        player
    }

    /// Hitbox top when standing on a platform with the current height
    pub fn ground_level(&self) -> f32 {
        PLATFORM_Y - self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Jump from the ground, or air-jump once while an air-jump ability is active.
    /// There is no buffering: a press that cannot jump is dropped.
    pub fn jump(&mut self) -> Option<JumpKind> {
        if !self.is_jumping {
            self.vel_y = JUMP_VELOCITY;
            self.is_jumping = true;
            self.double_jump_used = false;
            Some(JumpKind::Ground)
        } else if self.double_jump_armed && self.ability_active && !self.double_jump_used {
            self.vel_y = JUMP_VELOCITY;
            self.double_jump_used = true;
            log::debug!("Double jump");
            Some(JumpKind::Air)
        } else {
            None
        }
    }

    pub fn ability_ready(&self) -> bool {
        self.ability_cooldown <= 0.0
    }

    /// Start the character's ability. Returns false while cooling down.
    ///
    /// The cooldown starts immediately, running alongside the active duration.
    pub fn activate_ability(&mut self) -> bool {
        if !self.ability_ready() {
            return false;
        }
        let ability = self.character.ability();
        self.ability_active = true;
        self.ability_timer = ability.duration;
        if ability.air_jump {
            self.double_jump_armed = true;
        }
        self.ability_cooldown = ABILITY_COOLDOWN_SECS;
        log::debug!("{} activated ({}s)", ability.name, ability.duration);
        true
    }

    /// Crouch to the reduced hitbox, keeping the feet planted
    pub fn duck(&mut self) {
        if !self.is_jumping && !self.is_ducking {
            self.is_ducking = true;
            self.size.y = PLAYER_DUCK_HEIGHT;
            self.pos.y += PLAYER_HEIGHT - PLAYER_DUCK_HEIGHT;
        }
    }

    pub fn stop_duck(&mut self) {
        if !self.is_jumping && self.is_ducking {
            self.is_ducking = false;
            self.size.y = PLAYER_HEIGHT;
            self.pos.y -= PLAYER_HEIGHT - PLAYER_DUCK_HEIGHT;
        }
    }

    /// Advance ability and cooldown timers, clamped at zero
    pub fn tick_ability(&mut self, dt: f32) {
        if self.ability_active {
            self.ability_timer = (self.ability_timer - dt).max(0.0);
            if self.ability_timer <= 0.0 {
                self.ability_active = false;
                self.double_jump_armed = false;
                log::debug!("{} expired", self.character.ability().name);
            }
        }
        self.ability_cooldown = (self.ability_cooldown - dt).max(0.0);
    }

    /// Advance one frame with a platform underneath at `ground_level`
    pub fn update(&mut self, ground_level: f32, dt: f32) {
        self.tick_ability(dt);

        self.pos.y += self.vel_y;
        if self.is_jumping {
            self.vel_y += GRAVITY;
            if self.pos.y >= ground_level {
                self.land(ground_level);
            }
        } else if self.pos.y != ground_level {
            self.pos.y = ground_level;
            self.vel_y = 0.0;
        }
    }

    /// Advance one frame with nothing underneath: gravity only, no landing
    pub fn update_unsupported(&mut self, dt: f32) {
        self.tick_ability(dt);
        self.pos.y += self.vel_y;
        self.vel_y += GRAVITY;
    }

    /// Drop off an edge without having jumped
    pub fn start_fall(&mut self) {
        self.is_jumping = true;
        self.vel_y = FALL_START_VELOCITY;
    }

    fn land(&mut self, ground_level: f32) {
        self.pos.y = ground_level;
        self.vel_y = 0.0;
        self.is_jumping = false;
        self.double_jump_used = false;
    }

    /// Obstacle collisions are ignored
    pub fn is_invincible(&self) -> bool {
        self.ability_active && self.character.ability().invincible
    }

    /// Collected coins count double
    pub fn has_coin_bonus(&self) -> bool {
        self.coin_multiplier() > 1
    }

    pub fn coin_multiplier(&self) -> u32 {
        if self.ability_active {
            self.character.ability().coin_multiplier
        } else {
            1
        }
    }

    /// World scroll multiplier from the dash ability (1.0 otherwise)
    pub fn speed_multiplier(&self) -> f32 {
        if self.ability_active {
            self.character.ability().speed_multiplier
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 0.25;

    /// Step on flat ground until the jump resolves
    fn land_on_flat(player: &mut Player) {
        let ground = player.ground_level();
        for _ in 0..200 {
            player.update(ground, 1.0 / 60.0);
            if !player.is_jumping {
                break;
            }
        }
    }

    #[test]
    fn test_new_player_stands_on_platform() {
        let player = Player::new(Character::BigJoe);
        assert_eq!(player.pos.y, PLATFORM_Y - PLAYER_HEIGHT);
        assert_eq!(player.aabb().max().y, PLATFORM_Y);
        assert!(player.ability_ready());
    }

    #[test]
    fn test_ground_jump_and_land() {
        let mut player = Player::new(Character::BigJoe);
        let ground = player.ground_level();
        assert_eq!(player.jump(), Some(JumpKind::Ground));
        assert_eq!(player.vel_y, JUMP_VELOCITY);

        // Second press without an air-jump ability is dropped
        assert_eq!(player.jump(), None);

        player.update(ground, DT);
        assert!(player.pos.y < ground);
        assert_eq!(player.vel_y, JUMP_VELOCITY + GRAVITY);

        land_on_flat(&mut player);
        assert!(!player.is_jumping);
        assert_eq!(player.pos.y, ground);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_double_jump_requires_active_ability() {
        let mut player = Player::new(Character::Ali);
        player.jump();
        assert_eq!(player.jump(), None);

        land_on_flat(&mut player);
        assert!(player.activate_ability());
        assert!(player.double_jump_armed);

        assert_eq!(player.jump(), Some(JumpKind::Ground));
        assert_eq!(player.jump(), Some(JumpKind::Air));
        assert!(player.double_jump_used);
        // At most once per airborne phase
        assert_eq!(player.jump(), None);

        // Landing re-enables it for the next airborne phase
        land_on_flat(&mut player);
        assert_eq!(player.jump(), Some(JumpKind::Ground));
        assert_eq!(player.jump(), Some(JumpKind::Air));
    }

    #[test]
    fn test_double_jump_only_for_air_jump_character() {
        for character in [Character::BigJoe, Character::Hamda, Character::Speedy] {
            let mut player = Player::new(character);
            assert!(player.activate_ability());
            player.jump();
            assert_eq!(player.jump(), None, "{:?} must not air-jump", character);
        }
    }

    #[test]
    fn test_air_jump_revoked_on_expiry() {
        let mut player = Player::new(Character::Ali);
        player.activate_ability();
        for _ in 0..32 {
            player.tick_ability(DT);
        }
        assert!(!player.ability_active);
        assert!(!player.double_jump_armed);
        player.jump();
        assert_eq!(player.jump(), None);
    }

    #[test]
    fn test_ability_durations_are_exact() {
        for character in Character::ALL {
            let mut player = Player::new(character);
            assert!(player.activate_ability());
            let steps = (character.ability().duration / DT) as usize;
            for _ in 0..steps - 1 {
                player.tick_ability(DT);
            }
            assert!(player.ability_active, "{:?} expired early", character);
            player.tick_ability(DT);
            assert!(
                !player.ability_active,
                "{:?} outlived its duration",
                character
            );
            assert_eq!(player.ability_timer, 0.0);
        }
    }

    #[test]
    fn test_cooldown_runs_alongside_ability() {
        let mut player = Player::new(Character::BigJoe);
        assert!(player.activate_ability());
        assert_eq!(player.ability_cooldown, ABILITY_COOLDOWN_SECS);

        // Shield ends at 5s, cooldown still 3s to go
        for _ in 0..20 {
            player.tick_ability(DT);
        }
        assert!(!player.ability_active);
        assert_eq!(player.ability_cooldown, 3.0);
        assert!(!player.activate_ability());

        for _ in 0..12 {
            player.tick_ability(DT);
        }
        assert_eq!(player.ability_cooldown, 0.0);
        assert!(player.activate_ability());
    }

    #[test]
    fn test_timers_clamp_at_zero() {
        let mut player = Player::new(Character::Hamda);
        player.activate_ability();
        player.tick_ability(100.0);
        assert_eq!(player.ability_timer, 0.0);
        assert_eq!(player.ability_cooldown, 0.0);
        player.tick_ability(1.0);
        assert_eq!(player.ability_cooldown, 0.0);
    }

    #[test]
    fn test_derived_modifiers() {
        let mut joe = Player::new(Character::BigJoe);
        assert!(!joe.is_invincible());
        joe.activate_ability();
        assert!(joe.is_invincible());
        assert!(!joe.has_coin_bonus());
        assert_eq!(joe.speed_multiplier(), 1.0);

        let mut hamda = Player::new(Character::Hamda);
        hamda.activate_ability();
        assert!(hamda.has_coin_bonus());
        assert_eq!(hamda.coin_multiplier(), 2);
        assert!(!hamda.is_invincible());

        let mut speedy = Player::new(Character::Speedy);
        assert_eq!(speedy.speed_multiplier(), 1.0);
        speedy.activate_ability();
        assert_eq!(speedy.speed_multiplier(), 1.8);
        assert_eq!(speedy.coin_multiplier(), 1);
    }

    #[test]
    fn test_duck_only_while_grounded() {
        let mut player = Player::new(Character::BigJoe);
        player.duck();
        assert!(player.is_ducking);
        assert_eq!(player.size.y, PLAYER_DUCK_HEIGHT);
        // Feet stay on the platform
        assert_eq!(player.aabb().max().y, PLATFORM_Y);
        assert_eq!(player.pos.y, player.ground_level());

        player.stop_duck();
        assert!(!player.is_ducking);
        assert_eq!(player.size.y, PLAYER_HEIGHT);
        assert_eq!(player.pos.y, player.ground_level());

        player.jump();
        player.duck();
        assert!(!player.is_ducking);
    }

    #[test]
    fn test_grounded_player_snaps_to_ground() {
        let mut player = Player::new(Character::BigJoe);
        let ground = player.ground_level();
        player.pos.y = ground - 10.0;
        player.update(ground, DT);
        assert_eq!(player.pos.y, ground);
        assert_eq!(player.vel_y, 0.0);
    }

    #[test]
    fn test_unsupported_never_lands() {
        let mut player = Player::new(Character::BigJoe);
        let ground = player.ground_level();
        player.start_fall();
        for _ in 0..10 {
            player.update_unsupported(DT);
        }
        assert!(player.is_jumping);
        assert!(player.pos.y > ground);
    }

    proptest! {
        #[test]
        fn prop_one_activation_per_cooldown_cycle(
            character in 0usize..4,
            steps in prop::collection::vec((0.0f32..0.5, any::<bool>()), 1..400),
        ) {
            let mut player = Player::new(Character::from_index(character));
            let mut elapsed = 0.0f32;
            let mut last_accept: Option<f32> = None;
            for (dt, press) in steps {
                if press {
                    let cooling = player.ability_cooldown > 0.0;
                    let accepted = player.activate_ability();
                    prop_assert_eq!(accepted, !cooling);
                    if accepted {
                        if let Some(prev) = last_accept {
                            prop_assert!(elapsed - prev >= ABILITY_COOLDOWN_SECS - 1e-2);
                        }
                        last_accept = Some(elapsed);
                    }
                }
                player.tick_ability(dt);
                elapsed += dt;
                prop_assert!(player.ability_timer >= 0.0);
                prop_assert!(player.ability_cooldown >= 0.0);
            }
        }
    }
}
