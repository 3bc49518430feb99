//! Shared entity capabilities
//!
//! Everything that rides the track implements [`Entity`]; the pools in
//! [`super::list`] drive the per-frame update/compaction cycle through it.

use glam::Vec2;

use crate::consts::{REMOVAL_Y, SENTINEL_POS};
use crate::render::Surface;

/// Axis-aligned box in screen space. y grows downward, so `top` is the
/// smallest y and `bottom()` the largest.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Box of `size` whose bottom-center sits at `pos`.
    pub fn anchored(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x - size.x / 2.0, pos.y - size.y, size.x, size.y)
    }

    /// Box of `size` centered on `pos`.
    pub fn centered(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x - size.x / 2.0, pos.y - size.y / 2.0, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Strict overlap; shared edges do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Capabilities every scrolling track entity exposes.
pub trait Entity {
    /// Advance one frame; `scroll_speed` is the track's current downward
    /// velocity.
    fn update(&mut self, dt: f32, scroll_speed: f32);
    fn draw(&self, target: &mut dyn Surface);
    fn bounds(&self) -> Bounds;
    fn position(&self) -> Vec2;
    fn set_position(&mut self, pos: Vec2);
    /// True once the entity left the playable area or was consumed.
    fn is_removable(&self) -> bool;
}

/// Shared removal rule: past the bottom threshold, or parked at the
/// consumed-entity sentinel.
pub(crate) fn off_track(pos: Vec2) -> bool {
    pos.y > REMOVAL_Y || pos == SENTINEL_POS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_box_sits_on_its_base_point() {
        let b = Bounds::anchored(Vec2::new(400.0, 500.0), Vec2::new(50.0, 100.0));
        assert_eq!(b.left, 375.0);
        assert_eq!(b.top, 400.0);
        assert_eq!(b.bottom(), 500.0);
        assert_eq!(b.center(), Vec2::new(400.0, 450.0));
    }

    #[test]
    fn centered_box_wraps_its_center() {
        let b = Bounds::centered(Vec2::new(100.0, 100.0), Vec2::splat(30.0));
        assert_eq!(b.left, 85.0);
        assert_eq!(b.top, 85.0);
        assert_eq!(b.center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn overlap_detection() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(5.0, 5.0, 10.0, 10.0);
        let c = Bounds::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn off_track_rules() {
        assert!(off_track(Vec2::new(400.0, 801.0)));
        assert!(off_track(SENTINEL_POS));
        assert!(!off_track(Vec2::new(400.0, -200.0)));
        assert!(!off_track(Vec2::new(400.0, 500.0)));
    }
}
