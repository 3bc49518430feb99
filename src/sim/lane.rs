//! Lane geometry
//!
//! Pure mapping between lane indices and horizontal coordinates. Indices
//! outside the track clamp to the nearest edge lane, never reject.

use crate::consts::{CENTER_X, LANE_COUNT, LANE_WIDTH};

/// Horizontal center of a lane: 200 / 400 / 600 for lanes 0 / 1 / 2.
pub fn lane_center(index: i32) -> f32 {
    let clamped = index.clamp(0, LANE_COUNT as i32 - 1);
    CENTER_X + (clamped - 1) as f32 * LANE_WIDTH
}

/// Lane whose center is closest to `x`.
pub fn nearest_lane(x: f32) -> usize {
    let offset = (x - CENTER_X) / LANE_WIDTH;
    (offset.round() as i32 + 1).clamp(0, LANE_COUNT as i32 - 1) as usize
}
