//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be deterministic:
//! - Fixed timestep, driven by the embedding loop
//! - Seeded RNG only, no wall clock
//! - Insertion-order entity iteration
//! - No platform dependencies beyond the `Surface` draw sink; the one
//!   deliberate exception is the score board, which persists the record
//!   the moment it is beaten

pub mod coin;
pub mod entity;
pub mod lane;
pub mod list;
pub mod obstacle;
pub mod player;
pub mod powerup;
pub mod state;
pub mod tick;
pub mod track;

pub use coin::Coin;
pub use entity::{Bounds, Entity};
pub use lane::{lane_center, nearest_lane};
pub use list::GameList;
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{Player, PlayerState};
pub use powerup::{PowerUp, PowerUpKind};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use track::TrackManager;
