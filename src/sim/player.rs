//! Player state machine
//!
//! Running is the rest state; Jumping and Sliding are mutually exclusive.
//! Horizontal motion eases toward the current lane center; vertical motion
//! only exists while Jumping, where velocity is the single authority.

use glam::Vec2;

use crate::consts::{GROUND_Y, PLAYER_HEIGHT, PLAYER_SLIDE_HEIGHT, PLAYER_WIDTH};
use crate::render::{Quad, Surface};
use crate::resources::TextureId;
use crate::tuning::PlayerTuning;

use super::entity::Bounds;
use super::lane::lane_center;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Running,
    Jumping,
    Sliding,
}

#[derive(Debug, Clone)]
pub struct Player {
    lane: usize,
    current_x: f32,
    /// Bottom of the collision box; GROUND_Y except while airborne
    y: f32,
    state: PlayerState,
    vertical_velocity: f32,
    slide_timer: f32,
    invincible: bool,
    invincible_timer: f32,
    magnet_timer: f32,
    double_coin_timer: f32,
    tuning: PlayerTuning,
    texture: Option<TextureId>,
}

impl Player {
    /// Starts running in the center lane.
    pub fn new(tuning: PlayerTuning, texture: Option<TextureId>) -> Self {
        Self {
            lane: 1,
            current_x: lane_center(1),
            y: GROUND_Y,
            state: PlayerState::Running,
            vertical_velocity: 0.0,
            slide_timer: 0.0,
            invincible: false,
            invincible_timer: 0.0,
            magnet_timer: 0.0,
            double_coin_timer: 0.0,
            tuning,
            texture,
        }
    }

    pub fn update(&mut self, dt: f32) {
        // effect timers; invincibility only clears when its timer expires
        if self.invincible_timer > 0.0 {
            self.invincible_timer -= dt;
            if self.invincible_timer <= 0.0 {
                self.invincible = false;
            }
        }
        if self.magnet_timer > 0.0 {
            self.magnet_timer -= dt;
        }
        if self.double_coin_timer > 0.0 {
            self.double_coin_timer -= dt;
        }

        // ease toward the lane center
        let target_x = lane_center(self.lane as i32);
        self.current_x += (target_x - self.current_x) * self.tuning.lane_switch_rate * dt;

        // vertical integration while airborne
        if self.state == PlayerState::Jumping {
            self.vertical_velocity += self.tuning.gravity * dt;
            self.y += self.vertical_velocity * dt;
            if self.y >= GROUND_Y {
                self.y = GROUND_Y;
                self.state = PlayerState::Running;
                self.vertical_velocity = 0.0;
            }
        } else {
            self.y = GROUND_Y;
        }

        if self.state == PlayerState::Sliding {
            self.slide_timer -= dt;
            if self.slide_timer <= 0.0 {
                self.state = PlayerState::Running;
            }
        }
    }

    pub fn draw(&self, target: &mut dyn Surface) {
        target.draw(Quad {
            texture: self.texture,
            bounds: self.bounds(),
            rotation_deg: 0.0,
        });
    }

    pub fn move_left(&mut self) {
        self.lane = self.lane.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.lane = (self.lane + 1).min(crate::consts::LANE_COUNT - 1);
    }

    /// Launch from Running or Sliding; a slide box snaps back to full
    /// height the moment the jump starts.
    pub fn jump(&mut self) {
        if matches!(self.state, PlayerState::Running | PlayerState::Sliding) {
            self.state = PlayerState::Jumping;
            self.vertical_velocity = self.tuning.jump_force;
        }
    }

    /// From Running: start the slide. Mid-jump: fast-fall impulse, no
    /// state change. Already sliding: no-op.
    pub fn slide(&mut self) {
        match self.state {
            PlayerState::Running => {
                self.state = PlayerState::Sliding;
                self.slide_timer = self.tuning.slide_duration;
            }
            PlayerState::Jumping => {
                self.vertical_velocity += self.tuning.fast_fall_impulse;
            }
            PlayerState::Sliding => {}
        }
    }

    pub fn bounds(&self) -> Bounds {
        let height = if self.state == PlayerState::Sliding {
            PLAYER_SLIDE_HEIGHT
        } else {
            PLAYER_HEIGHT
        };
        Bounds::anchored(Vec2::new(self.current_x, self.y), Vec2::new(PLAYER_WIDTH, height))
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayerState::Running
    }

    pub fn is_jumping(&self) -> bool {
        self.state == PlayerState::Jumping
    }

    pub fn is_sliding(&self) -> bool {
        self.state == PlayerState::Sliding
    }

    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Refreshes the timer; effects never stack.
    pub fn activate_magnet(&mut self, duration: f32) {
        self.magnet_timer = duration;
    }

    pub fn is_magnet_active(&self) -> bool {
        self.magnet_timer > 0.0
    }

    pub fn activate_double_coin(&mut self, duration: f32) {
        self.double_coin_timer = duration;
    }

    pub fn is_double_coin_active(&self) -> bool {
        self.double_coin_timer > 0.0
    }

    /// Invincibility shares one timer across shield and jetpack; the
    /// latest activation wins.
    pub fn activate_shield(&mut self, duration: f32) {
        self.invincible = true;
        self.invincible_timer = duration;
    }
}
