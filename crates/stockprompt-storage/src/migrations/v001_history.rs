//! v001: history table, one row per accepted tuple, partitioned by domain.

use rusqlite::Connection;

use stockprompt_core::traits::StorageResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS history (
            seq            INTEGER PRIMARY KEY AUTOINCREMENT,
            id             TEXT NOT NULL UNIQUE,
            domain         TEXT NOT NULL,
            tuple_values   TEXT NOT NULL,
            rendered_text  TEXT NOT NULL,
            text_hash      TEXT NOT NULL,
            created_at     TEXT NOT NULL,
            title          TEXT,
            keywords       TEXT,
            feedback       TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_history_domain_seq ON history(domain, seq);
        CREATE INDEX IF NOT EXISTS idx_history_text_hash ON history(domain, text_hash);
        ",
    )
    .map_err(to_storage_err)
}
