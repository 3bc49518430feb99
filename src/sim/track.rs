//! Procedural track generation
//!
//! Owns the three entity pools and drives spawning on independent,
//! difficulty-scaled timers. All randomness comes from a per-run seeded
//! PCG stream so identical seeds replay identical tracks.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::LANE_COUNT;
use crate::render::Surface;
use crate::resources::SpriteSet;
use crate::tuning::Tuning;

use super::coin::Coin;
use super::lane::lane_center;
use super::list::GameList;
use super::obstacle::{Obstacle, ObstacleKind};
use super::powerup::{PowerUp, PowerUpKind};

/// Spawn heights, all above the visible area.
const OBSTACLE_SPAWN_Y: f32 = -200.0;
const BARRIER_PAIR_SPAWN_Y: f32 = -150.0;
/// Vertical stagger between the two barriers of a pair
const BARRIER_PAIR_OFFSET: f32 = 80.0;
const TRAIN_SPAWN_Y: f32 = -220.0;
const TRAIN_ROW_COIN_COUNT: u32 = 4;
const TRAIN_ROW_COIN_SPACING: f32 = 110.0;
const COIN_ROW_SPAWN_Y: f32 = -60.0;
const POWER_UP_SPAWN_Y: f32 = -50.0;

pub struct TrackManager {
    obstacles: GameList<Obstacle>,
    coins: GameList<Coin>,
    power_ups: GameList<PowerUp>,
    speed: f32,
    obstacle_timer: f32,
    coin_timer: f32,
    power_up_timer: f32,
    difficulty_timer: f32,
    rng: Pcg32,
    tuning: Tuning,
    sprites: SpriteSet,
}

impl TrackManager {
    pub fn new(seed: u64, tuning: Tuning, sprites: SpriteSet) -> Self {
        Self {
            obstacles: GameList::new(),
            coins: GameList::new(),
            power_ups: GameList::new(),
            speed: tuning.speed.base,
            obstacle_timer: 0.0,
            coin_timer: 0.0,
            power_up_timer: 0.0,
            difficulty_timer: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            sprites,
        }
    }

    /// Advance all pools, fire any spawn timers that hit their interval,
    /// and step the difficulty curve.
    pub fn update(&mut self, dt: f32) {
        self.obstacles.update_all(dt, self.speed);
        self.power_ups.update_all(dt, self.speed);
        self.coins.update_all(dt, self.speed);

        self.obstacle_timer += dt;
        if self.obstacle_timer >= self.obstacle_interval() {
            self.spawn_obstacle();
            self.obstacle_timer = 0.0;
        }

        self.coin_timer += dt;
        if self.coin_timer >= self.coin_interval() {
            self.spawn_coin();
            self.coin_timer = 0.0;
        }

        self.power_up_timer += dt;
        if self.power_up_timer >= self.power_up_interval() {
            self.spawn_power_up();
            self.power_up_timer = 0.0;
        }

        self.difficulty_timer += dt;
        if self.difficulty_timer > self.tuning.speed.step_interval {
            let bumped = (self.speed + self.tuning.speed.step).min(self.tuning.speed.max);
            if bumped > self.speed {
                log::debug!("scroll speed raised to {bumped}");
            }
            self.speed = bumped;
            self.difficulty_timer = 0.0;
        }
    }

    pub fn draw(&self, target: &mut dyn Surface) {
        self.coins.draw_all(target);
        self.obstacles.draw_all(target);
        self.power_ups.draw_all(target);
    }

    /// Seconds between obstacle spawns at the current speed.
    pub fn obstacle_interval(&self) -> f32 {
        let s = &self.tuning.spawn;
        (s.obstacle_base_interval - (self.speed - self.tuning.speed.base) / s.obstacle_interval_scale)
            .max(s.obstacle_min_interval)
    }

    pub fn coin_interval(&self) -> f32 {
        let s = &self.tuning.spawn;
        (s.coin_base_interval - (self.speed - self.tuning.speed.base) / s.coin_interval_scale)
            .max(s.coin_min_interval)
    }

    pub fn power_up_interval(&self) -> f32 {
        let s = &self.tuning.spawn;
        (s.power_up_base_interval - (self.speed - self.tuning.speed.base) / s.power_up_interval_scale)
            .max(s.power_up_min_interval)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn obstacles(&self) -> &GameList<Obstacle> {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut GameList<Obstacle> {
        &mut self.obstacles
    }

    pub fn coins(&self) -> &GameList<Coin> {
        &self.coins
    }

    pub fn coins_mut(&mut self) -> &mut GameList<Coin> {
        &mut self.coins
    }

    pub fn power_ups(&self) -> &GameList<PowerUp> {
        &self.power_ups
    }

    pub fn power_ups_mut(&mut self) -> &mut GameList<PowerUp> {
        &mut self.power_ups
    }

    /// One of three patterns, uniformly at random.
    fn spawn_obstacle(&mut self) {
        match self.rng.random_range(0..3u32) {
            0 => self.spawn_single_obstacle(),
            1 => self.spawn_barrier_pair(),
            _ => self.spawn_train_with_coins(),
        }
    }

    fn spawn_single_obstacle(&mut self) {
        let lane = self.random_lane(None);
        let kind = ObstacleKind::ALL[self.rng.random_range(0..ObstacleKind::ALL.len())];
        self.push_obstacle(kind, lane, OBSTACLE_SPAWN_Y);
    }

    /// Two staggered barriers; the second lane is the "opposite" of the
    /// first, which guarantees at least one clear lane.
    fn spawn_barrier_pair(&mut self) {
        let blocked = self.random_lane(None);
        let second = (blocked + 2) % LANE_COUNT;
        self.push_obstacle(ObstacleKind::Barrier, blocked, BARRIER_PAIR_SPAWN_Y);
        self.push_obstacle(
            ObstacleKind::Barrier,
            second,
            BARRIER_PAIR_SPAWN_Y - BARRIER_PAIR_OFFSET,
        );
    }

    /// A train plus a coin trail rewarding the dodge into another lane.
    fn spawn_train_with_coins(&mut self) {
        let train_lane = self.random_lane(None);
        self.push_obstacle(ObstacleKind::Train, train_lane, TRAIN_SPAWN_Y);
        let safe_lane = self.random_lane(Some(train_lane));
        self.spawn_coin_row(safe_lane, TRAIN_ROW_COIN_COUNT, TRAIN_ROW_COIN_SPACING);
    }

    fn push_obstacle(&mut self, kind: ObstacleKind, lane: usize, y: f32) {
        let pos = Vec2::new(lane_center(lane as i32), y);
        self.obstacles.add(Obstacle::new(
            kind,
            pos,
            self.tuning.clearances,
            self.sprites.obstacle(kind),
        ));
    }

    fn spawn_coin(&mut self) {
        let lane = self.random_lane(None);
        self.spawn_coin_row(
            lane,
            self.tuning.spawn.coin_row_count,
            self.tuning.spawn.coin_row_spacing,
        );
    }

    fn spawn_coin_row(&mut self, lane: usize, count: u32, spacing: f32) {
        let x = lane_center(lane as i32);
        for i in 0..count {
            let pos = Vec2::new(x, COIN_ROW_SPAWN_Y - i as f32 * spacing);
            self.coins.add(Coin::new(pos, self.sprites.coin));
        }
    }

    fn spawn_power_up(&mut self) {
        let lane = self.random_lane(None);
        let kind = PowerUpKind::ALL[self.rng.random_range(0..PowerUpKind::ALL.len())];
        let pos = Vec2::new(lane_center(lane as i32), POWER_UP_SPAWN_Y);
        self.power_ups.add(PowerUp::new(
            kind,
            pos,
            self.tuning.effects,
            self.sprites.power_up(kind),
        ));
    }

    fn random_lane(&mut self, exclude: Option<usize>) -> usize {
        loop {
            let lane = self.rng.random_range(0..LANE_COUNT);
            if Some(lane) != exclude {
                return lane;
            }
        }
    }
}
