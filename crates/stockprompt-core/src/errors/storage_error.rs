use super::error_code::{self, StockpromptErrorCode};

/// History persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("history record could not be encoded: {message}")]
    Serialization { message: String },

    #[error("history store lock poisoned")]
    LockPoisoned,
}

impl StockpromptErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
