use serde::{Deserialize, Serialize};

use super::defaults;

/// Preference-learning heuristics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Score contribution of each like.
    pub like_weight: i64,
    /// Score penalty of each dislike.
    pub dislike_weight: i64,
    /// Occurrences within a partition must exceed this to count as signal.
    pub signal_floor: usize,
    /// Values scoring below this are dropped from the working pool.
    pub min_score: i64,
    /// The multi-slot exclusion pool resets to the full catalog when it holds
    /// fewer than `slots + exclusion_reset_margin` values.
    pub exclusion_reset_margin: usize,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            like_weight: defaults::DEFAULT_LIKE_WEIGHT,
            dislike_weight: defaults::DEFAULT_DISLIKE_WEIGHT,
            signal_floor: defaults::DEFAULT_SIGNAL_FLOOR,
            min_score: defaults::DEFAULT_MIN_SCORE,
            exclusion_reset_margin: defaults::DEFAULT_EXCLUSION_RESET_MARGIN,
        }
    }
}
