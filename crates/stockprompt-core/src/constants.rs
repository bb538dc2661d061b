/// stockprompt version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote proposals tried per generation before falling back locally.
pub const MAX_REMOTE_ATTEMPTS: usize = 50;

/// Tuples the fallback selector builds before accepting a duplicate.
pub const MAX_FALLBACK_ATTEMPTS: usize = 1000;

/// History records retained per domain.
pub const HISTORY_CAPACITY: usize = 50;

/// Most recent tuples summarized for the remote proposer.
pub const RECENT_HISTORY_WINDOW: usize = 5;

/// Weight of one like in the preference score.
pub const LIKE_WEIGHT: i64 = 2;

/// Weight of one dislike in the preference score.
pub const DISLIKE_WEIGHT: i64 = 1;

/// A value must occur more often than this within a feedback partition
/// to count as a preference signal. Single occurrences are noise.
pub const PREFERENCE_SIGNAL_FLOOR: usize = 1;

/// Minimum preference score for a value to stay in the working pool.
pub const MIN_PREFERENCE_SCORE: i64 = 0;

/// Extra members (beyond the slot count) the multi-slot exclusion pool must
/// keep before it is reset to the full catalog.
pub const EXCLUSION_RESET_MARGIN: usize = 0;

/// Maximum characters in an enrichment title.
pub const TITLE_MAX_CHARS: usize = 70;

/// Maximum keywords kept from an enrichment response.
pub const MAX_KEYWORDS: usize = 49;

/// Maximum characters of rendered text sent to the enrichment service.
pub const ENRICHMENT_PROMPT_MAX_CHARS: usize = 2000;
