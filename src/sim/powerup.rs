//! Power-ups
//!
//! Pickup overlap is detected by the orchestrator; `apply_effect` runs
//! once and the entity is then parked at the sentinel so the next
//! compaction pass sweeps it.

use glam::Vec2;

use crate::consts::POWER_UP_RADIUS;
use crate::render::{Quad, Surface};
use crate::resources::TextureId;
use crate::tuning::EffectDurations;

use super::entity::{Bounds, Entity, off_track};
use super::player::Player;

/// Visual spin, degrees per second.
const SPIN_RATE: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Magnet,
    /// Short invincibility burst plus an immediate jump
    Jetpack,
    Shield,
    DoubleCoin,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Magnet,
        PowerUpKind::Jetpack,
        PowerUpKind::Shield,
        PowerUpKind::DoubleCoin,
    ];
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    kind: PowerUpKind,
    pos: Vec2,
    rotation_deg: f32,
    /// Effect duration in seconds, resolved from tuning at spawn
    duration: f32,
    texture: Option<TextureId>,
}

impl PowerUp {
    pub fn new(
        kind: PowerUpKind,
        pos: Vec2,
        durations: EffectDurations,
        texture: Option<TextureId>,
    ) -> Self {
        let duration = match kind {
            PowerUpKind::Magnet => durations.magnet,
            PowerUpKind::Jetpack => durations.jetpack,
            PowerUpKind::Shield => durations.shield,
            PowerUpKind::DoubleCoin => durations.double_coin,
        };
        Self {
            kind,
            pos,
            rotation_deg: 0.0,
            duration,
            texture,
        }
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    /// Apply this pickup's timed effect. Re-application refreshes the
    /// relevant timer rather than stacking.
    pub fn apply_effect(&self, player: &mut Player) {
        match self.kind {
            PowerUpKind::Magnet => player.activate_magnet(self.duration),
            PowerUpKind::Shield => player.activate_shield(self.duration),
            PowerUpKind::DoubleCoin => player.activate_double_coin(self.duration),
            PowerUpKind::Jetpack => {
                // invincible for the flight burst
                player.activate_shield(self.duration);
                player.jump();
            }
        }
    }
}

impl Entity for PowerUp {
    fn update(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.y += scroll_speed * dt;
        self.rotation_deg = (self.rotation_deg + SPIN_RATE * dt) % 360.0;
    }

    fn draw(&self, target: &mut dyn Surface) {
        target.draw(Quad {
            texture: self.texture,
            bounds: self.bounds(),
            rotation_deg: self.rotation_deg,
        });
    }

    fn bounds(&self) -> Bounds {
        Bounds::centered(self.pos, Vec2::splat(POWER_UP_RADIUS * 2.0))
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn set_position(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    fn is_removable(&self) -> bool {
        off_track(self.pos)
    }
}
