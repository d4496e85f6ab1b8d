//! Author records: insert and point lookup.

use rusqlite::{params, Connection, OptionalExtension};

use ublog_core::errors::UblogResult;
use ublog_core::models::User;

use crate::{parse_ts, to_sortable_ts, to_storage_err};

/// Insert a single user.
pub fn insert_user(conn: &Connection, user: &User) -> UblogResult<()> {
    conn.execute(
        "INSERT INTO users (id, username, email, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            user.id,
            user.username,
            user.email,
            to_sortable_ts(&user.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single user by ID.
pub fn get_user(conn: &Connection, id: &str) -> UblogResult<Option<User>> {
    let mut stmt = conn
        .prepare("SELECT id, username, email, created_at FROM users WHERE id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(parse_user_row(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(user) => Ok(Some(user?)),
        None => Ok(None),
    }
}

fn parse_user_row(row: &rusqlite::Row<'_>) -> UblogResult<User> {
    let created_at: String = row.get(3).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(User {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        username: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        email: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_ts(&created_at)?,
    })
}
