// Single source of truth for all default values.

use crate::constants;

// --- Generation ---
pub const DEFAULT_MAX_REMOTE_ATTEMPTS: usize = constants::MAX_REMOTE_ATTEMPTS;
pub const DEFAULT_MAX_FALLBACK_ATTEMPTS: usize = constants::MAX_FALLBACK_ATTEMPTS;
pub const DEFAULT_RECENT_HISTORY_WINDOW: usize = constants::RECENT_HISTORY_WINDOW;

// --- Preference ---
pub const DEFAULT_LIKE_WEIGHT: i64 = constants::LIKE_WEIGHT;
pub const DEFAULT_DISLIKE_WEIGHT: i64 = constants::DISLIKE_WEIGHT;
pub const DEFAULT_SIGNAL_FLOOR: usize = constants::PREFERENCE_SIGNAL_FLOOR;
pub const DEFAULT_MIN_SCORE: i64 = constants::MIN_PREFERENCE_SCORE;
pub const DEFAULT_EXCLUSION_RESET_MARGIN: usize = constants::EXCLUSION_RESET_MARGIN;

// --- History ---
pub const DEFAULT_HISTORY_CAPACITY: usize = constants::HISTORY_CAPACITY;
pub const DEFAULT_DB_FILENAME: &str = "stockprompt.db";

// --- Remote ---
pub const DEFAULT_API_KEY_ENV: &str = "STOCKPROMPT_API_KEY";
pub const DEFAULT_MODEL: &str = "default";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 20;
pub const MAX_REMOTE_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_ENRICHMENT_PROMPT_MAX_CHARS: usize = constants::ENRICHMENT_PROMPT_MAX_CHARS;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
