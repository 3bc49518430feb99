//! Top-level game state
//!
//! Owns the player, the track and the score for one run. The sim stays
//! wall-clock-free; anything the embedding application should react to
//! (sounds, history logging) is queued as a [`GameEvent`] and drained by
//! the driver.

use crate::render::Surface;
use crate::resources::{ResourceCache, SpriteSet};
use crate::score::ScoreBoard;
use crate::tuning::Tuning;

use super::player::Player;
use super::powerup::PowerUpKind;
use super::track::TrackManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    /// Run ended; frames are inert until the driver starts a new state
    GameOver,
}

/// Things that happened during a tick, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    CoinCollected,
    PowerUpCollected(PowerUpKind),
    GameOver { new_high_score: bool },
}

pub struct GameState {
    pub seed: u64,
    pub phase: GamePhase,
    /// Elapsed run time in seconds
    pub time: f32,
    pub player: Player,
    pub track: TrackManager,
    pub score: ScoreBoard,
    pub tuning: Tuning,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh run. Texture lookups happen once, here; missing
    /// textures leave entities untextured but fully simulated.
    pub fn new(seed: u64, tuning: Tuning, score: ScoreBoard, cache: &ResourceCache) -> Self {
        let sprites = SpriteSet::from_cache(cache);
        Self {
            seed,
            phase: GamePhase::Playing,
            time: 0.0,
            player: Player::new(tuning.player, sprites.player),
            track: TrackManager::new(seed, tuning, sprites),
            score,
            tuning,
            events: Vec::new(),
        }
    }

    /// Drain queued events in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Track first, player on top.
    pub fn draw(&self, target: &mut dyn Surface) {
        self.track.draw(target);
        self.player.draw(target);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::render::RecordingSurface;
    use crate::sim::coin::Coin;

    fn new_state() -> (GameState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let score = ScoreBoard::new(dir.path());
        let state = GameState::new(1, Tuning::default(), score, &ResourceCache::new());
        (state, dir)
    }

    #[test]
    fn fresh_state_is_playing_from_frame_zero() {
        let (state, _dir) = new_state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time, 0.0);
        assert!(state.track.obstacles().is_empty());
    }

    #[test]
    fn draw_records_track_then_player_on_top() {
        let (mut state, _dir) = new_state();
        state
            .track
            .coins_mut()
            .add(Coin::new(Vec2::new(200.0, 100.0), None));

        let mut surface = RecordingSurface::new();
        state.draw(&mut surface);

        assert_eq!(surface.quads.len(), 2);
        // player is drawn last, standing on the ground line
        assert_eq!(surface.quads.last().unwrap().bounds.bottom(), 500.0);
    }

    #[test]
    fn drain_events_empties_the_queue() {
        let (mut state, _dir) = new_state();
        state.events.push(GameEvent::CoinCollected);
        assert_eq!(state.drain_events(), vec![GameEvent::CoinCollected]);
        assert!(state.events.is_empty());
    }
}
