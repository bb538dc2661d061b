use crate::errors::StorageError;
use crate::models::{FeedbackLabel, HistoryRecord};

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence collaborator for one domain's history.
///
/// Records are kept most-recent-first. The store enforces its own capacity:
/// `prepend` past the cap evicts the oldest record.
pub trait IHistoryStore: Send + Sync {
    /// Insert a record at the front.
    fn prepend(&self, record: &HistoryRecord) -> StorageResult<()>;

    /// All records, most recent first.
    fn list(&self) -> StorageResult<Vec<HistoryRecord>>;

    /// Drop every record.
    fn clear(&self) -> StorageResult<()>;

    /// Label a record in place. Returns `false` if no record has this id.
    fn set_feedback(&self, id: &str, label: FeedbackLabel) -> StorageResult<bool>;

    /// Attach title and keywords to a record. Returns `false` if no record has this id.
    fn set_enrichment(&self, id: &str, title: &str, keywords: &[String]) -> StorageResult<bool>;

    /// Maximum records retained.
    fn capacity(&self) -> usize;

    fn get(&self, id: &str) -> StorageResult<Option<HistoryRecord>> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }

    fn len(&self) -> StorageResult<usize> {
        Ok(self.list()?.len())
    }
}
