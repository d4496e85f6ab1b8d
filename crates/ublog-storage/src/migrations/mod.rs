//! Versioned schema migrations, applied in order at engine startup.

mod v001_users_posts;
mod v002_post_order_index;

use rusqlite::Connection;

use ublog_core::errors::{StorageError, UblogResult};

use crate::to_storage_err;

type Migration = fn(&Connection) -> UblogResult<()>;

/// All migrations, in version order.
const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_users_posts::migrate),
    (2, v002_post_order_index::migrate),
];

/// Run all pending migrations. Each version commits individually so a
/// failure reports the exact version that broke.
pub fn run_migrations(conn: &Connection) -> UblogResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for (version, migrate) in MIGRATIONS {
        if u64::from(*version) <= current {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::debug!(version, "applied migration");
    }
    Ok(())
}

/// Highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> UblogResult<u64> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get::<_, u64>(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
