//! World simulation: platform ring, spawners, speed ramp and pickups
//!
//! The world reads the player to scale speed and test overlaps. The only place
//! it writes the player is `settle_player`, the landing/falling step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{over_gap, platform_under};
use super::entities::{Coin, Obstacle, ObstacleKind, Platform};
use super::player::Player;
use super::state::GameEvent;
use crate::consts::*;

pub struct World {
    /// Fixed-size ring of platforms, in spawn order
    pub platforms: Vec<Platform>,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Uncollected coins (spawn order)
    pub coins: Vec<Coin>,
    /// Scroll speed before ability modifiers, non-decreasing within a run
    pub base_speed: f32,
    /// Coins collected this run, non-decreasing within a run
    pub coins_collected: u32,
    /// Seconds since the run started
    pub elapsed: f32,
    speed_timer: f32,
    obstacle_timer: f32,
    coin_timer: f32,
    rng: Pcg32,
}

impl World {
    /// Create a world with a fresh platform ring and a seeded spawner RNG
    pub fn new(seed: u64) -> Self {
        Self {
            platforms: initial_ring(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            base_speed: BASE_SPEED,
            coins_collected: 0,
            elapsed: 0.0,
            speed_timer: 0.0,
            obstacle_timer: 0.0,
            coin_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start a new run. The RNG keeps its stream so consecutive runs differ.
    pub fn reset(&mut self) {
        self.platforms = initial_ring();
        self.obstacles.clear();
        self.coins.clear();
        self.base_speed = BASE_SPEED;
        self.coins_collected = 0;
        self.elapsed = 0.0;
        self.speed_timer = 0.0;
        self.obstacle_timer = 0.0;
        self.coin_timer = 0.0;
    }

    /// Speed every scrolling entity moves this frame
    pub fn effective_speed(&self, player: &Player) -> f32 {
        self.base_speed * player.speed_multiplier()
    }

    /// Player is over an active platform and at (or below) standing height
    pub fn is_supported(&self, player: &Player) -> bool {
        player.pos.y >= player.ground_level() - SUPPORT_TOLERANCE
            && platform_under(player.center_x(), &self.platforms).is_some()
    }

    /// Player is over a gap and has dropped well past the platform plane
    pub fn has_fallen(&self, player: &Player) -> bool {
        over_gap(player.center_x(), &self.platforms) && player.pos.y > PLATFORM_Y + FALL_MARGIN
    }

    /// First obstacle overlapping the player, unless the player is invincible
    pub fn obstacle_hit(&self, player: &Player) -> Option<&Obstacle> {
        if player.is_invincible() {
            return None;
        }
        let hitbox = player.aabb();
        self.obstacles
            .iter()
            .find(|o| o.active && o.aabb().overlaps(&hitbox))
    }

    /// Advance the player one frame against the current platforms
    pub fn settle_player(&self, player: &mut Player, dt: f32) {
        let ground = player.ground_level();
        if self.is_supported(player) {
            player.update(ground, dt);
            return;
        }
        if !player.is_jumping && player.pos.y >= ground {
            log::debug!("Walked off a platform at x={:.1}", player.center_x());
            player.start_fall();
        }
        player.update_unsupported(dt);
    }

    /// Advance speed ramp, platforms, obstacles and coins by one frame
    pub fn update(&mut self, dt: f32, player: &Player, events: &mut Vec<GameEvent>) {
        self.elapsed += dt;
        self.speed_timer += dt;
        if self.speed_timer >= SPEED_WINDOW_SECS {
            self.speed_timer -= SPEED_WINDOW_SECS;
            self.base_speed += SPEED_INCREMENT;
            log::info!("Speed increased to {:.1}", self.base_speed);
            events.push(GameEvent::SpeedIncreased {
                speed: self.base_speed,
            });
        }

        let speed = self.effective_speed(player);
        self.scroll_platforms(speed);
        self.update_obstacles(dt, speed);
        self.update_coins(dt, speed, player, events);
    }

    /// Shift the ring left and move every platform that left the screen to the tail
    pub(crate) fn scroll_platforms(&mut self, speed: f32) {
        for platform in &mut self.platforms {
            platform.pos.x -= speed;
        }
        for i in 0..self.platforms.len() {
            if self.platforms[i].right() < -RECYCLE_MARGIN {
                let tail = self
                    .platforms
                    .iter()
                    .map(Platform::right)
                    .fold(f32::MIN, f32::max);
                self.platforms[i].pos.x = tail + PLATFORM_GAP;
                log::trace!(
                    "Recycled platform {} to x={:.1}",
                    i,
                    self.platforms[i].pos.x
                );
            }
        }
    }

    fn update_obstacles(&mut self, dt: f32, speed: f32) {
        self.obstacle_timer += dt;
        if self.obstacle_timer > OBSTACLE_INTERVAL_SECS {
            let kind = if self.rng.random_bool(0.5) {
                ObstacleKind::Flying
            } else {
                ObstacleKind::Ground
            };
            self.obstacles.push(Obstacle::new(kind, SCREEN_WIDTH + OBSTACLE_SPAWN_OFFSET));
            self.obstacle_timer = 0.0;
            log::trace!("Spawned {:?} obstacle", kind);
        }

        for obstacle in &mut self.obstacles {
            obstacle.pos.x -= speed;
            if obstacle.is_offscreen() {
                obstacle.active = false;
            }
        }
        self.obstacles.retain(|o| o.active);
    }

    fn update_coins(&mut self, dt: f32, speed: f32, player: &Player, events: &mut Vec<GameEvent>) {
        self.coin_timer += dt;
        if self.coin_timer > COIN_INTERVAL_SECS {
            let rise = COIN_MIN_RISE + self.rng.random_range(0.0..COIN_RISE_BAND);
            self.coins.push(Coin::new(Vec2::new(
                SCREEN_WIDTH + COIN_SPAWN_OFFSET,
                PLATFORM_Y - rise,
            )));
            self.coin_timer = 0.0;
        }

        let hitbox = player.aabb();
        let value = player.coin_multiplier();
        for coin in &mut self.coins {
            coin.pos.x -= speed;
            if !coin.collected && coin.aabb().overlaps(&hitbox) {
                coin.collected = true;
                self.coins_collected += value;
                events.push(GameEvent::CoinCollected { value });
            }
        }
        self.coins.retain(|c| !c.collected && !c.is_offscreen());
    }
}

/// Long starting platform followed by standard segments, `PLATFORM_GAP` apart
fn initial_ring() -> Vec<Platform> {
    let mut platforms = Vec::with_capacity(PLATFORM_COUNT);
    platforms.push(Platform::new(0.0, START_PLATFORM_WIDTH));
    for _ in 1..PLATFORM_COUNT {
        let x = platforms.last().map_or(0.0, |p| p.right() + PLATFORM_GAP);
        platforms.push(Platform::new(x, PLATFORM_WIDTH));
    }
    platforms
}
