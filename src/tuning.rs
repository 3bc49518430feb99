//! Data-driven game balance
//!
//! Every gameplay tuning value lives here so balance passes edit one JSON
//! file instead of hunting literals across the simulation. Loading falls
//! back to defaults on any error; a missing file is not a failure.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player movement physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Downward acceleration while airborne, units/s^2
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative = up)
    pub jump_force: f32,
    /// Extra downward velocity when slide is pressed mid-jump
    pub fast_fall_impulse: f32,
    /// Seconds a slide lasts
    pub slide_duration: f32,
    /// Proportional easing rate toward the target lane, 1/s
    pub lane_switch_rate: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            jump_force: -800.0,
            fast_fall_impulse: 1000.0,
            slide_duration: 1.0,
            lane_switch_rate: 15.0,
        }
    }
}

/// Obstacle skill-window thresholds. These are tuned constants, not derived
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clearances {
    /// Maximum collision-box height that counts as a low slide profile
    pub low_profile_height: f32,
    /// Feet this far above a barrier top clear it while jumping
    pub barrier_jump_clearance: f32,
    /// Vertical-midpoint band over a barrier top that still clears
    pub barrier_mid_band: f32,
    /// Feet-to-barrier-top band that still clears
    pub barrier_feet_band: f32,
    /// Feet-to-cone-top band that clears while jumping
    pub cone_feet_band: f32,
    /// Player top this far above a cone top clears it
    pub cone_top_band: f32,
    /// Feet-to-fence-top band that clears while jumping
    pub fence_feet_band: f32,
    /// Player top this far above a fence top voids the jump clearance
    pub fence_top_band: f32,
}

impl Default for Clearances {
    fn default() -> Self {
        Self {
            low_profile_height: 60.0,
            barrier_jump_clearance: 60.0,
            barrier_mid_band: 20.0,
            barrier_feet_band: 15.0,
            cone_feet_band: 10.0,
            cone_top_band: 20.0,
            fence_feet_band: 15.0,
            fence_top_band: 20.0,
        }
    }
}

/// Seconds each power-up effect lasts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectDurations {
    pub magnet: f32,
    pub shield: f32,
    pub double_coin: f32,
    /// Jetpack grants a shorter invincibility burst plus an immediate jump
    pub jetpack: f32,
}

impl Default for EffectDurations {
    fn default() -> Self {
        Self {
            magnet: 10.0,
            shield: 10.0,
            double_coin: 10.0,
            jetpack: 5.0,
        }
    }
}

/// Scroll-speed difficulty curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTuning {
    pub base: f32,
    pub max: f32,
    /// Speed added per difficulty step
    pub step: f32,
    /// Seconds between difficulty steps
    pub step_interval: f32,
}

impl Default for SpeedTuning {
    fn default() -> Self {
        Self {
            base: 300.0,
            max: 1100.0,
            step: 25.0,
            step_interval: 5.0,
        }
    }
}

/// Spawn cadence. Intervals shrink linearly as speed rises above the base,
/// floored at the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    pub obstacle_base_interval: f32,
    pub obstacle_interval_scale: f32,
    pub obstacle_min_interval: f32,
    pub coin_base_interval: f32,
    pub coin_interval_scale: f32,
    pub coin_min_interval: f32,
    pub power_up_base_interval: f32,
    pub power_up_interval_scale: f32,
    pub power_up_min_interval: f32,
    /// Coins per periodic row
    pub coin_row_count: u32,
    /// Vertical spacing within a row
    pub coin_row_spacing: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            obstacle_base_interval: 1.6,
            obstacle_interval_scale: 1400.0,
            obstacle_min_interval: 0.55,
            coin_base_interval: 0.7,
            coin_interval_scale: 2000.0,
            coin_min_interval: 0.25,
            power_up_base_interval: 12.0,
            power_up_interval_scale: 500.0,
            power_up_min_interval: 5.0,
            coin_row_count: 3,
            coin_row_spacing: 80.0,
        }
    }
}

/// Score accrual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTuning {
    /// Points per second of survival (before the multiplier)
    pub run_rate: f32,
    /// Points per collected coin (multiplier does not apply)
    pub coin_value: f32,
}

impl Default for ScoreTuning {
    fn default() -> Self {
        Self {
            run_rate: 10.0,
            coin_value: 50.0,
        }
    }
}

/// Coin attraction while the magnet effect is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagnetTuning {
    /// Pull radius around the player center
    pub range: f32,
    /// Proportional pull rate, 1/s
    pub pull_rate: f32,
}

impl Default for MagnetTuning {
    fn default() -> Self {
        Self {
            range: 300.0,
            pull_rate: 5.0,
        }
    }
}

/// The full balance sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub clearances: Clearances,
    pub effects: EffectDurations,
    pub speed: SpeedTuning,
    pub spawn: SpawnTuning,
    pub score: ScoreTuning,
    pub magnet: MagnetTuning,
}

impl Tuning {
    /// Read tuning from a JSON file, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
