//! v001: users, posts.

use rusqlite::Connection;

use ublog_core::errors::UblogResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> UblogResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id         TEXT PRIMARY KEY,
            username   TEXT NOT NULL UNIQUE,
            email      TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS posts (
            id         TEXT PRIMARY KEY,
            author_id  TEXT NOT NULL REFERENCES users(id),
            title      TEXT NOT NULL,
            body       TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_posts_author ON posts(author_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
