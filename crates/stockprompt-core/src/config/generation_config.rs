use serde::{Deserialize, Serialize};

use super::defaults;

/// Attempt-loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Remote proposals tried before delegating to the fallback selector.
    pub max_remote_attempts: usize,
    /// Internal attempts the fallback selector makes to avoid a duplicate.
    pub max_fallback_attempts: usize,
    /// Number of most recent history tuples sent to the proposer.
    pub recent_history_window: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_remote_attempts: defaults::DEFAULT_MAX_REMOTE_ATTEMPTS,
            max_fallback_attempts: defaults::DEFAULT_MAX_FALLBACK_ATTEMPTS,
            recent_history_window: defaults::DEFAULT_RECENT_HISTORY_WINDOW,
        }
    }
}
