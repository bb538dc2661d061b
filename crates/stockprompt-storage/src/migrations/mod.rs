//! Schema migrations, applied in order and recorded in `schema_version`.

mod v001_history;

use rusqlite::Connection;

use stockprompt_core::traits::StorageResult;

use crate::to_storage_err;

type Migration = fn(&Connection) -> StorageResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_history::migrate as Migration)];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

/// Apply every migration newer than the recorded schema version.
pub fn run_migrations(conn: &Connection) -> StorageResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(to_storage_err)?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .map_err(to_storage_err)?;

    for (version, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        migrate(conn)?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )
        .map_err(to_storage_err)?;
        tracing::info!(version, "history schema migrated");
    }
    Ok(LATEST_VERSION.max(current))
}
