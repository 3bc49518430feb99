//! Lane Rush entry point
//!
//! Headless demo driver: runs the simulation at a fixed 60 Hz with a
//! small rule-based autopilot and reports the outcome. Windowing and
//! rendering belong to embedding applications; this binary exercises the
//! full update/collision/spawn pipeline end to end.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lane_rush::consts::SIM_DT;
use lane_rush::resources::ResourceCache;
use lane_rush::score::ScoreBoard;
use lane_rush::sim::{
    Entity, GameEvent, GamePhase, GameState, ObstacleKind, TickInput, nearest_lane, tick,
};
use lane_rush::tuning::Tuning;

const DATA_DIR: &str = "data";
const TEXTURE_DIR: &str = "assets/textures";
const TUNING_FILE: &str = "assets/tuning.json";
/// Demo cap: ten minutes of play
const MAX_FRAMES: u32 = 60 * 600;
/// How far ahead (in track units) the autopilot reacts
const LOOKAHEAD: f32 = 350.0;
/// Distance at which jump/slide reactions fire
const REACT_DISTANCE: f32 = 150.0;

fn main() {
    env_logger::init();

    let tuning = Tuning::load_or_default(Path::new(TUNING_FILE));
    let mut cache = ResourceCache::new();
    cache.load_textures_from_dir(Path::new(TEXTURE_DIR));

    let score = ScoreBoard::new(DATA_DIR).with_coin_value(tuning.score.coin_value);
    let seed = now_unix();
    log::info!("starting run for {} (seed {seed})", score.player_name());

    let mut state = GameState::new(seed, tuning, score, &cache);

    for _ in 0..MAX_FRAMES {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::CoinCollected => {
                    log::debug!("coin collected ({} total)", state.score.coins());
                }
                GameEvent::PowerUpCollected(kind) => log::info!("picked up {kind:?}"),
                GameEvent::GameOver { new_high_score } => {
                    state.score.append_history(&now_unix().to_string());
                    if new_high_score {
                        log::info!("new high score!");
                    }
                }
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!("player: {}", state.score.player_name());
    println!("score:  {}", state.score.score() as i64);
    println!("coins:  {}", state.score.coins());
    println!(
        "best:   {} by {}",
        state.score.high_score() as i64,
        state.score.high_score_name()
    );
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Dodge whatever is bearing down on the player's lane: sidestep trains,
/// jump cones, slide everything else.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player_lane = state.player.lane();
    let feet_y = state.player.bounds().bottom();

    let mut nearest: Option<(ObstacleKind, f32)> = None;
    for obstacle in state.track.obstacles() {
        if nearest_lane(obstacle.position().x) != player_lane {
            continue;
        }
        let gap = feet_y - obstacle.position().y;
        if gap <= 0.0 || gap > LOOKAHEAD {
            continue;
        }
        if nearest.is_none_or(|(_, g)| gap < g) {
            nearest = Some((obstacle.kind(), gap));
        }
    }

    let Some((kind, gap)) = nearest else {
        return input;
    };
    match kind {
        ObstacleKind::Train => {
            // no clearance window exists; change lanes early
            if player_lane == 2 {
                input.move_left = true;
            } else {
                input.move_right = true;
            }
        }
        ObstacleKind::Cone => {
            if gap < REACT_DISTANCE {
                input.jump = true;
            }
        }
        ObstacleKind::Barrier | ObstacleKind::Fence => {
            if gap < REACT_DISTANCE {
                input.slide = true;
            }
        }
    }
    input
}
