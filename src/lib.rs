//! Lane Rush - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, track, collisions, game state)
//! - `render`: Draw-sink abstraction the simulation describes itself through
//! - `resources`: Texture cache with graceful degradation
//! - `score`: Running score, persisted high score and game history
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod resources;
pub mod score;
pub mod sim;
pub mod tuning;

pub use score::ScoreBoard;
pub use tuning::Tuning;

/// Fixed world geometry
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, vsync-paced)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Lane layout: three lanes centered on the track
    pub const LANE_COUNT: usize = 3;
    pub const LANE_WIDTH: f32 = 200.0;
    pub const CENTER_X: f32 = 400.0;

    /// Vertical line the player runs along
    pub const GROUND_Y: f32 = 500.0;

    /// Entities past this y are swept on the next compaction pass
    pub const REMOVAL_Y: f32 = 800.0;

    /// Off-screen parking spot marking a consumed entity for removal
    pub const SENTINEL_POS: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Player collision box
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    /// Reduced box height while sliding
    pub const PLAYER_SLIDE_HEIGHT: f32 = 50.0;

    /// Round pickups
    pub const COIN_RADIUS: f32 = 15.0;
    pub const POWER_UP_RADIUS: f32 = 20.0;
}
