//! Draw-sink abstraction
//!
//! The simulation never talks to a window or GPU. Entities describe
//! themselves as textured quads and push them into a [`Surface`]; the
//! embedding application decides what a surface actually is.

use crate::resources::TextureId;
use crate::sim::entity::Bounds;

/// One textured rectangle, in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Texture to sample, if the asset was available at startup
    pub texture: Option<TextureId>,
    pub bounds: Bounds,
    /// Clockwise rotation about the quad center, degrees
    pub rotation_deg: f32,
}

/// Anything quads can be drawn into.
pub trait Surface {
    fn draw(&mut self, quad: Quad);
}

/// Surface that records what was drawn; used by tests and the headless
/// driver.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub quads: Vec<Quad>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, quad: Quad) {
        self.quads.push(quad);
    }
}
