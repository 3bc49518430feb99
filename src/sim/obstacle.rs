//! Obstacles and their collision policies
//!
//! Each kind encodes a skill window: the right jump or slide timing
//! relative to the obstacle's geometry avoids death. `on_collision` is
//! only called once bounding boxes already intersect; it decides whether
//! the contact is fatal.

use glam::Vec2;

use crate::render::{Quad, Surface};
use crate::resources::TextureId;
use crate::tuning::Clearances;

use super::entity::{Bounds, Entity, off_track};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Full-lane blocker; no clearance condition exists
    Train,
    /// Jumpable or slidable
    Barrier,
    /// Low hazard, jump only
    Cone,
    /// Tall and slide-only; a jump never clears it
    Fence,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 4] = [
        ObstacleKind::Train,
        ObstacleKind::Barrier,
        ObstacleKind::Cone,
        ObstacleKind::Fence,
    ];

    /// Collision-box size, width x height.
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::Train => Vec2::new(100.0, 200.0),
            ObstacleKind::Barrier => Vec2::new(120.0, 80.0),
            ObstacleKind::Cone => Vec2::new(40.0, 40.0),
            ObstacleKind::Fence => Vec2::new(150.0, 100.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    kind: ObstacleKind,
    /// Bottom-center of the collision box
    pos: Vec2,
    clearances: Clearances,
    texture: Option<TextureId>,
}

impl Obstacle {
    pub fn new(
        kind: ObstacleKind,
        pos: Vec2,
        clearances: Clearances,
        texture: Option<TextureId>,
    ) -> Self {
        Self {
            kind,
            pos,
            clearances,
            texture,
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Whether contact with an already-overlapping player ends the run.
    /// An invincible player never dies, for any kind.
    pub fn on_collision(&self, player: &Player) -> bool {
        if player.is_invincible() {
            return false;
        }

        let pb = player.bounds();
        let top = self.bounds().top;
        let feet = pb.bottom();
        let c = &self.clearances;

        match self.kind {
            ObstacleKind::Train => true,
            ObstacleKind::Barrier => {
                if player.is_sliding() && pb.height <= c.low_profile_height {
                    return false;
                }
                if player.is_jumping() {
                    if feet <= top + c.barrier_jump_clearance {
                        return false;
                    }
                    let mid = pb.top + pb.height * 0.5;
                    if mid <= top + c.barrier_mid_band {
                        return false;
                    }
                    if feet <= top + c.barrier_feet_band {
                        return false;
                    }
                }
                true
            }
            ObstacleKind::Cone => {
                if player.is_jumping() {
                    if feet <= top + c.cone_feet_band {
                        return false;
                    }
                    if pb.top + c.cone_top_band <= top {
                        return false;
                    }
                }
                true
            }
            ObstacleKind::Fence => {
                if player.is_sliding() && pb.height <= c.low_profile_height {
                    return false;
                }
                if player.is_jumping() {
                    // cleared only in the narrow band right at the top edge
                    return !(feet <= top + c.fence_feet_band
                        && pb.top + c.fence_top_band > top);
                }
                true
            }
        }
    }
}

impl Entity for Obstacle {
    fn update(&mut self, dt: f32, scroll_speed: f32) {
        self.pos.y += scroll_speed * dt;
    }

    fn draw(&self, target: &mut dyn Surface) {
        target.draw(Quad {
            texture: self.texture,
            bounds: self.bounds(),
            rotation_deg: 0.0,
        });
    }

    fn bounds(&self) -> Bounds {
        Bounds::anchored(self.pos, self.kind.size())
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
