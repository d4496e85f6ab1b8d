//! v002: composite pagination index on (created_at, id).

use rusqlite::Connection;

use ublog_core::errors::UblogResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> UblogResult<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_posts_order
            ON posts(created_at DESC, id DESC);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
