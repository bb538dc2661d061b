//! SQLite-backed history store. One database may hold several domains;
//! each store instance only ever sees its own.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use stockprompt_core::config::HistoryConfig;
use stockprompt_core::errors::StorageError;
use stockprompt_core::models::{FeedbackLabel, HistoryRecord, TupleValues};
use stockprompt_core::traits::{IHistoryStore, StorageResult};

use crate::migrations;
use crate::to_storage_err;

const BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);

const SELECT_COLUMNS: &str =
    "id, domain, tuple_values, rendered_text, created_at, title, keywords, feedback";

/// Persistent history for one domain.
pub struct SqliteHistoryStore {
    conn: Mutex<Connection>,
    domain: String,
    capacity: usize,
}

impl SqliteHistoryStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path, domain: &str, capacity: usize) -> StorageResult<Self> {
        let conn = Connection::open(path).map_err(to_storage_err)?;
        conn.query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
            .map_err(to_storage_err)?;
        Self::initialize(conn, domain, capacity)
    }

    /// Open `config.db_path` with `config.capacity`.
    pub fn from_config(config: &HistoryConfig, domain: &str) -> StorageResult<Self> {
        Self::open(Path::new(&config.db_path), domain, config.capacity)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory(domain: &str, capacity: usize) -> StorageResult<Self> {
        let conn = Connection::open_in_memory().map_err(to_storage_err)?;
        Self::initialize(conn, domain, capacity)
    }

    fn initialize(conn: Connection, domain: &str, capacity: usize) -> StorageResult<Self> {
        conn.busy_timeout(BUSY_TIMEOUT).map_err(to_storage_err)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            domain: domain.to_string(),
            capacity: capacity.max(1),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> StorageResult<T>) -> StorageResult<T> {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }
}

/// Columns as stored, before decoding.
struct RawRecord {
    id: String,
    domain: String,
    tuple_values: String,
    rendered_text: String,
    created_at: String,
    title: Option<String>,
    keywords: Option<String>,
    feedback: Option<String>,
}

impl RawRecord {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            domain: row.get(1)?,
            tuple_values: row.get(2)?,
            rendered_text: row.get(3)?,
            created_at: row.get(4)?,
            title: row.get(5)?,
            keywords: row.get(6)?,
            feedback: row.get(7)?,
        })
    }

    fn decode(self) -> StorageResult<HistoryRecord> {
        let values: TupleValues = serde_json::from_str(&self.tuple_values).map_err(ser_err)?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(ser_err)?
            .with_timezone(&Utc);
        let keywords = self
            .keywords
            .map(|k| serde_json::from_str::<Vec<String>>(&k))
            .transpose()
            .map_err(ser_err)?;
        let feedback = self
            .feedback
            .map(|f| f.parse::<FeedbackLabel>())
            .transpose()
            .map_err(ser_err)?;

        Ok(HistoryRecord {
            id: self.id,
            domain: self.domain,
            values,
            rendered_text: self.rendered_text,
            created_at,
            title: self.title,
            keywords,
            feedback,
        })
    }
}

fn ser_err(e: impl std::fmt::Display) -> StorageError {
    StorageError::Serialization {
        message: e.to_string(),
    }
}

impl IHistoryStore for SqliteHistoryStore {
    fn prepend(&self, record: &HistoryRecord) -> StorageResult<()> {
        let values = serde_json::to_string(&record.values).map_err(ser_err)?;
        let keywords = record
            .keywords
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(ser_err)?;
        let feedback = record.feedback.map(FeedbackLabel::as_str);

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO history
                    (id, domain, tuple_values, rendered_text, text_hash, created_at, title, keywords, feedback)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    record.id,
                    self.domain,
                    values,
                    record.rendered_text,
                    record.text_hash(),
                    record.created_at.to_rfc3339(),
                    record.title,
                    keywords,
                    feedback,
                ],
            )
            .map_err(to_storage_err)?;

            let evicted = conn
                .execute(
                    "DELETE FROM history WHERE domain = ?1 AND seq NOT IN (
                        SELECT seq FROM history WHERE domain = ?1 ORDER BY seq DESC LIMIT ?2
                    )",
                    params![self.domain, self.capacity as i64],
                )
                .map_err(to_storage_err)?;
            if evicted > 0 {
                tracing::debug!(domain = %self.domain, evicted, "history capacity eviction");
            }
            Ok(())
        })
    }

    fn list(&self) -> StorageResult<Vec<HistoryRecord>> {
        let raw = self.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {SELECT_COLUMNS} FROM history WHERE domain = ?1 ORDER BY seq DESC"
                ))
                .map_err(to_storage_err)?;
            let rows = stmt
                .query_map([&self.domain], RawRecord::from_row)
                .map_err(to_storage_err)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()
                .map_err(to_storage_err)
        })?;
        raw.into_iter().map(RawRecord::decode).collect()
    }

    fn clear(&self) -> StorageResult<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM history WHERE domain = ?1", [&self.domain])
                .map_err(to_storage_err)?;
            Ok(())
        })
    }

    fn set_feedback(&self, id: &str, label: FeedbackLabel) -> StorageResult<bool> {
        self.with_conn(|conn| {
            let changed = conn
                .execute(
                    "UPDATE history SET feedback = ?1 WHERE domain = ?2 AND id = ?3",
                    params![label.as_str(), self.domain, id],
                )
                .map_err(to_storage_err)?;
            Ok(changed > 0)
        })
    }

    fn set_enrichment(&self, id: &str, title: &str, keywords: &[String]) -> StorageResult<bool> {
        let keywords = serde_json::to_string(keywords).map_err(ser_err)?;
        self.with_conn(|conn| {
            let changed = conn
                .execute(
                    "UPDATE history SET title = ?1, keywords = ?2 WHERE domain = ?3 AND id = ?4",
                    params![title, keywords, self.domain, id],
                )
                .map_err(to_storage_err)?;
            Ok(changed > 0)
        })
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn get(&self, id: &str) -> StorageResult<Option<HistoryRecord>> {
        let raw = self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM history WHERE domain = ?1 AND id = ?2"),
                params![self.domain, id],
                RawRecord::from_row,
            )
            .optional()
            .map_err(to_storage_err)
        })?;
        raw.map(RawRecord::decode).transpose()
    }

    fn len(&self) -> StorageResult<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM history WHERE domain = ?1",
                    [&self.domain],
                    |row| row.get(0),
                )
                .map_err(to_storage_err)?;
            Ok(count as usize)
        })
    }
}
