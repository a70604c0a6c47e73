//! Rate constants for per-tick stat drift.
//!
//! [`DecayConfig`] is a plain record passed explicitly to every function in
//! [`effects`](crate::effects). There is no partial-override merging: to change
//! one rate, build a complete replacement (struct update syntax over
//! `DecayConfig::default()` works well for that).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Named rate constants controlling all stat drift.
///
/// All rates are non-negative; the sign of each applied delta is decided by
/// the function computing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecayConfig {
    /// Energy lost per pixel moved.
    pub energy_decay_per_pixel: f32,
    /// Constant mood erosion per second.
    pub mood_decay_per_second: f32,
    /// Thirst gained per second.
    pub thirst_decay_per_second: f32,
    /// Hunger gained per second.
    pub hunger_decay_per_second: f32,
    /// Karma pulled toward zero per second.
    pub karma_decay_per_second: f32,
    /// Bathroom need gained per second.
    pub bathroom_decay_per_second: f32,
    /// Energy below which the low-energy mood penalty applies.
    pub low_energy_threshold: f32,
    /// Mood lost per second while under `low_energy_threshold`.
    pub mood_decay_from_low_energy: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            energy_decay_per_pixel: 0.01,
            mood_decay_per_second: 0.1,
            thirst_decay_per_second: 0.75,
            hunger_decay_per_second: 0.5,
            karma_decay_per_second: 0.05,
            bathroom_decay_per_second: 0.3,
            low_energy_threshold: 20.0,
            mood_decay_from_low_energy: 0.5,
        }
    }
}

impl DecayConfig {
    /// Parse a complete config from JSON and validate it.
    ///
    /// Every field must be present; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DecayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every rate is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeRate { field, value });
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 8] {
        [
            ("energy_decay_per_pixel", self.energy_decay_per_pixel),
            ("mood_decay_per_second", self.mood_decay_per_second),
            ("thirst_decay_per_second", self.thirst_decay_per_second),
            ("hunger_decay_per_second", self.hunger_decay_per_second),
            ("karma_decay_per_second", self.karma_decay_per_second),
            ("bathroom_decay_per_second", self.bathroom_decay_per_second),
            ("low_energy_threshold", self.low_energy_threshold),
            ("mood_decay_from_low_energy", self.mood_decay_from_low_energy),
        ]
    }
}
