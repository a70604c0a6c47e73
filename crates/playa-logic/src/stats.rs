//! Player stat snapshot and the per-frame delta bundle.
//!
//! Energy and mood are "higher is better"; thirst, hunger and bathroom are
//! badness accumulators where higher is worse. Karma is centered on zero.
//! Nothing in this crate clamps automatically: callers apply a
//! [`StatDeltas`] and then decide whether to call
//! [`PlayerStats::clamp_to_ranges`].

use serde::{Deserialize, Serialize};

/// Upper bound for every stat.
pub const STAT_MAX: f32 = 100.0;
/// Lower bound for every stat except karma.
pub const STAT_MIN: f32 = 0.0;
/// Lower bound for karma.
pub const KARMA_MIN: f32 = -100.0;

/// Authoritative stat values for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub energy: f32,
    pub mood: f32,
    pub thirst: f32,
    pub hunger: f32,
    pub karma: f32,
    pub bathroom: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            energy: STAT_MAX,
            mood: STAT_MAX,
            thirst: STAT_MIN,
            hunger: STAT_MIN,
            karma: 0.0,
            bathroom: STAT_MIN,
        }
    }
}

impl PlayerStats {
    /// Clamp karma to [-100, 100] and every other stat to [0, 100].
    pub fn clamp_to_ranges(&mut self) {
        self.energy = self.energy.clamp(STAT_MIN, STAT_MAX);
        self.mood = self.mood.clamp(STAT_MIN, STAT_MAX);
        self.thirst = self.thirst.clamp(STAT_MIN, STAT_MAX);
        self.hunger = self.hunger.clamp(STAT_MIN, STAT_MAX);
        self.karma = self.karma.clamp(KARMA_MIN, STAT_MAX);
        self.bathroom = self.bathroom.clamp(STAT_MIN, STAT_MAX);
    }

    /// Whether every stat lies within its nominal range.
    pub fn in_range(&self) -> bool {
        let normal = |v: f32| (STAT_MIN..=STAT_MAX).contains(&v);
        normal(self.energy)
            && normal(self.mood)
            && normal(self.thirst)
            && normal(self.hunger)
            && normal(self.bathroom)
            && (KARMA_MIN..=STAT_MAX).contains(&self.karma)
    }
}

/// Additive change for each stat over one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDeltas {
    pub energy: f32,
    pub mood: f32,
    pub thirst: f32,
    pub hunger: f32,
    pub karma: f32,
    pub bathroom: f32,
}

impl StatDeltas {
    /// Add every delta to the matching stat. Does not clamp.
    pub fn apply_to(&self, stats: &mut PlayerStats) {
        stats.energy += self.energy;
        stats.mood += self.mood;
        stats.thirst += self.thirst;
        stats.hunger += self.hunger;
        stats.karma += self.karma;
        stats.bathroom += self.bathroom;
    }
}
