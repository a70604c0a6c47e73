//! Session settings.
//!
//! Everything but the decay rates has a sensible default, so a JSON file only
//! needs the keys it changes. The `decay` record is the exception: when it is
//! present it must be complete, since rates are never merged field by field.

use playa_logic::config::DecayConfig;
use playa_logic::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Stat drift rates.
    pub decay: DecayConfig,
    /// Minimum simulation time between two auto-craft passes.
    pub craft_interval_seconds: f32,
    /// Add the low-energy mood penalty on top of the frame effects.
    pub apply_low_energy_penalty: bool,
    /// 1.0 = real-time, 2.0 = 2x speed, etc.
    pub time_scale: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            decay: DecayConfig::default(),
            craft_interval_seconds: 0.5,
            apply_low_energy_penalty: false,
            time_scale: 1.0,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decay.validate()?;
        check_non_negative("craft_interval_seconds", self.craft_interval_seconds)?;
        check_non_negative("time_scale", self.time_scale)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidSetting {
            field,
            reason: "must be non-negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_partial_session_settings() {
        let config =
            SessionConfig::from_json_str(r#"{ "time_scale": 4.0, "apply_low_energy_penalty": true }"#)
                .unwrap();
        assert_eq!(config.time_scale, 4.0);
        assert!(config.apply_low_energy_penalty);
        assert_eq!(config.craft_interval_seconds, 0.5);
        assert_eq!(config.decay, DecayConfig::default());
    }

    #[test]
    fn test_partial_decay_rejected() {
        let json = r#"{ "decay": { "thirst_decay_per_second": 2.0 } }"#;
        assert!(matches!(
            SessionConfig::from_json_str(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_negative_time_scale_rejected() {
        let config = SessionConfig {
            time_scale: -1.0,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting { field: "time_scale", .. })
        ));
    }

    #[test]
    fn test_decay_errors_surface() {
        let mut config = SessionConfig::default();
        config.decay.bathroom_decay_per_second = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeRate { field: "bathroom_decay_per_second", .. })
        ));
    }
}
