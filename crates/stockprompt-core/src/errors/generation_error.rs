use super::error_code::{self, StockpromptErrorCode};
use super::StorageError;

/// Outcomes of `generate()` other than an accepted tuple.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The previous tuple has not been labeled yet.
    #[error("feedback pending for tuple {awaiting}")]
    FeedbackPending { awaiting: String },

    /// The caller abandoned the call; nothing was committed.
    #[error("generation abandoned by caller")]
    Abandoned,

    /// The history collaborator failed.
    #[error("history store failed: {0}")]
    History(#[from] StorageError),
}

impl StockpromptErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FeedbackPending { .. } => error_code::FEEDBACK_PENDING,
            Self::Abandoned => error_code::ABANDONED,
            Self::History(e) => e.error_code(),
        }
    }
}
