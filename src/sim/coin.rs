//! Coins

use glam::Vec2;

use crate::consts::COIN_RADIUS;
use crate::render::{Quad, Surface};
use crate::resources::TextureId;

use super::entity::{Bounds, Entity, off_track};

/// Visual spin, degrees per second.
const SPIN_RATE: f32 = 180.0;

#[derive(Debug, Clone)]
pub struct Coin {
    pos: Vec2,
    rotation_deg: f32,
    texture: Option<TextureId>,
}

impl Coin {
    pub fn new(pos: Vec2, texture: Option<TextureId>) -> Self {
        Self {
            pos,
            rotation_deg: 0.0,
            texture,
        }
    }
}

impl Entity for Coin {
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
        Bounds::centered(self.pos, Vec2::splat(COIN_RADIUS * 2.0))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SENTINEL_POS;

    #[test]
    fn scrolls_down_at_track_speed() {
        let mut coin = Coin::new(Vec2::new(400.0, 0.0), None);
        coin.update(0.5, 300.0);
        assert_eq!(coin.position(), Vec2::new(400.0, 150.0));
    }

    #[test]
    fn removable_past_threshold_or_at_sentinel() {
        let mut coin = Coin::new(Vec2::new(400.0, 790.0), None);
        assert!(!coin.is_removable());
        coin.update(0.1, 300.0);
        assert!(coin.is_removable());

        let mut consumed = Coin::new(Vec2::new(400.0, 100.0), None);
        consumed.set_position(SENTINEL_POS);
        assert!(consumed.is_removable());
    }

    #[test]
    fn bounds_wrap_the_center() {
        let coin = Coin::new(Vec2::new(400.0, 100.0), None);
        let b = coin.bounds();
        assert_eq!((b.width, b.height), (30.0, 30.0));
        assert_eq!(b.center(), Vec2::new(400.0, 100.0));
    }
}
