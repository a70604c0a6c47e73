//! Per-frame stat effects.
//!
//! Every function here is pure: given the current values, the elapsed time
//! (seconds) and the distance moved (pixels) it returns the additive delta for
//! one stat. Callers add the deltas and clamp. Inputs are not validated;
//! negative time or out-of-range stats simply produce the arithmetic result.
//!
//! ```
//! use playa_logic::config::DecayConfig;
//! use playa_logic::effects::compute_frame_effects;
//! use playa_logic::stats::PlayerStats;
//!
//! let config = DecayConfig::default();
//! let deltas = compute_frame_effects(0.0, 1.0, &PlayerStats::default(), &config);
//! assert!((deltas.thirst - 0.75).abs() < 1e-6);
//! ```

use crate::config::DecayConfig;
use crate::stats::{PlayerStats, StatDeltas};

/// Rate (per second) at which mood relaxes toward the well-being score.
pub const MOOD_RELAXATION_RATE: f32 = 2.0;

/// Energy spent walking. Non-positive for non-negative distance.
pub fn movement_energy_decay(distance_moved: f32, config: &DecayConfig) -> f32 {
    -distance_moved * config.energy_decay_per_pixel
}

/// Well-being score: energy averaged with inverted thirst and hunger.
pub fn well_being(energy: f32, thirst: f32, hunger: f32) -> f32 {
    (energy + (100.0 - thirst) + (100.0 - hunger)) / 3.0
}

/// Mood relaxes toward well-being, minus a slow constant erosion.
pub fn mood_decay(
    delta_time: f32,
    energy: f32,
    thirst: f32,
    hunger: f32,
    mood: f32,
    config: &DecayConfig,
) -> f32 {
    let target = well_being(energy, thirst, hunger);
    let relaxation = (target - mood) * MOOD_RELAXATION_RATE * delta_time;
    relaxation - delta_time * config.mood_decay_per_second
}

pub fn thirst_decay(delta_time: f32, config: &DecayConfig) -> f32 {
    delta_time * config.thirst_decay_per_second
}

pub fn hunger_decay(delta_time: f32, config: &DecayConfig) -> f32 {
    delta_time * config.hunger_decay_per_second
}

/// Pull karma toward zero.
///
/// The step never exceeds `|karma|`, so a single long frame lands on zero
/// instead of flipping sign. Exactly `0.0` when karma is already neutral.
pub fn karma_decay(delta_time: f32, karma: f32, config: &DecayConfig) -> f32 {
    if karma == 0.0 {
        return 0.0;
    }
    let step = (delta_time * config.karma_decay_per_second).min(karma.abs());
    -karma.signum() * step
}

pub fn bathroom_decay(delta_time: f32, config: &DecayConfig) -> f32 {
    delta_time * config.bathroom_decay_per_second
}

/// Extra mood loss while energy sits under `low_energy_threshold`.
///
/// Not part of [`compute_frame_effects`]; callers opt in and add it to the
/// mood delta themselves.
pub fn low_energy_mood_penalty(delta_time: f32, energy: f32, config: &DecayConfig) -> f32 {
    if energy < config.low_energy_threshold {
        -delta_time * config.mood_decay_from_low_energy
    } else {
        0.0
    }
}

/// All six stat deltas for a single frame.
pub fn compute_frame_effects(
    distance_moved: f32,
    delta_time: f32,
    stats: &PlayerStats,
    config: &DecayConfig,
) -> StatDeltas {
    StatDeltas {
        energy: movement_energy_decay(distance_moved, config),
        mood: mood_decay(
            delta_time,
            stats.energy,
            stats.thirst,
            stats.hunger,
            stats.mood,
            config,
        ),
        thirst: thirst_decay(delta_time, config),
        hunger: hunger_decay(delta_time, config),
        karma: karma_decay(delta_time, stats.karma, config),
        bathroom: bathroom_decay(delta_time, config),
    }
}
