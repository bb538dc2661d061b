use serde::{Deserialize, Serialize};

use super::defaults;

/// History persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Records retained per domain; the oldest is evicted past this.
    pub capacity: usize,
    /// SQLite database path for the file-backed store.
    pub db_path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_HISTORY_CAPACITY,
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
        }
    }
}
