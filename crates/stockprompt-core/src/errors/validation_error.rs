use super::error_code::{self, StockpromptErrorCode};

/// Why a remote proposal was rejected. The first failing check wins.
///
/// The orchestrator treats every variant the same way (discard, retry);
/// the reason exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("proposal is not a JSON object: {reason}")]
    Malformed { reason: String },

    #[error("proposal is missing category {category}")]
    MissingCategory { category: String },

    #[error("proposal value for {category} has the wrong shape")]
    WrongShape { category: String },

    #[error("value {value} is not in the working pool for {category}")]
    OutOfPool { category: String, value: String },

    #[error("category {category} expects {expected} values, got {actual}")]
    SlotCountMismatch {
        category: String,
        expected: usize,
        actual: usize,
    },

    #[error("category {category} repeats value {value} across slots")]
    RepeatedSlotValue { category: String, value: String },
}

impl StockpromptErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
