//! # stockprompt-storage
//!
//! History persistence collaborators. Both stores keep records
//! most-recent-first, enforce their own capacity, and never mix domains.

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::InMemoryHistoryStore;
pub use sqlite::SqliteHistoryStore;

use stockprompt_core::errors::StorageError;

/// Helper to convert any displayable error into a `StorageError::Sqlite`.
pub fn to_storage_err(msg: impl std::fmt::Display) -> StorageError {
    StorageError::Sqlite {
        message: msg.to_string(),
    }
}
