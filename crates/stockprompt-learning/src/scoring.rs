//! Preference score: `like_weight * likes - dislike_weight * dislikes`.

use stockprompt_core::config::PreferenceConfig;
use stockprompt_core::constants;

/// Weights applied to like and dislike counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub like: i64,
    pub dislike: i64,
}

impl ScoreWeights {
    pub fn score(&self, likes: usize, dislikes: usize) -> i64 {
        self.like * likes as i64 - self.dislike * dislikes as i64
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            like: constants::LIKE_WEIGHT,
            dislike: constants::DISLIKE_WEIGHT,
        }
    }
}

impl From<&PreferenceConfig> for ScoreWeights {
    fn from(config: &PreferenceConfig) -> Self {
        Self {
            like: config.like_weight,
            dislike: config.dislike_weight,
        }
    }
}

/// Score with the default weights.
pub fn score(likes: usize, dislikes: usize) -> i64 {
    ScoreWeights::default().score(likes, dislikes)
}
