//! In-memory history store.

use std::collections::VecDeque;
use std::sync::Mutex;

use stockprompt_core::config::HistoryConfig;
use stockprompt_core::errors::StorageError;
use stockprompt_core::models::{FeedbackLabel, HistoryRecord};
use stockprompt_core::traits::{IHistoryStore, StorageResult};

/// Volatile history for one generator instance.
#[derive(Debug)]
pub struct InMemoryHistoryStore {
    records: Mutex<VecDeque<HistoryRecord>>,
    capacity: usize,
}

impl InMemoryHistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Capacity from the `[history]` config section.
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self::new(config.capacity)
    }

    fn with_records<T>(&self, f: impl FnOnce(&mut VecDeque<HistoryRecord>) -> T) -> StorageResult<T> {
        let mut guard = self.records.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(f(&mut guard))
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(stockprompt_core::constants::HISTORY_CAPACITY)
    }
}

impl IHistoryStore for InMemoryHistoryStore {
    fn prepend(&self, record: &HistoryRecord) -> StorageResult<()> {
        let capacity = self.capacity;
        self.with_records(|records| {
            records.push_front(record.clone());
            records.truncate(capacity);
        })
    }

    fn list(&self) -> StorageResult<Vec<HistoryRecord>> {
        self.with_records(|records| records.iter().cloned().collect())
    }

    fn clear(&self) -> StorageResult<()> {
        self.with_records(VecDeque::clear)
    }

    fn set_feedback(&self, id: &str, label: FeedbackLabel) -> StorageResult<bool> {
        self.with_records(|records| match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.feedback = Some(label);
                true
            }
            None => false,
        })
    }

    fn set_enrichment(&self, id: &str, title: &str, keywords: &[String]) -> StorageResult<bool> {
        self.with_records(|records| match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.title = Some(title.to_string());
                record.keywords = Some(keywords.to_vec());
                true
            }
            None => false,
        })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
