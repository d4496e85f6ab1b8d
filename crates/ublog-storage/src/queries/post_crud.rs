//! Insert, update, get, delete for posts.

use rusqlite::{params, Connection, OptionalExtension};

use ublog_core::errors::UblogResult;
use ublog_core::models::Post;

use crate::{parse_ts, to_sortable_ts, to_storage_err};

/// The base SELECT columns for all post queries (6 columns, indices 0-5).
pub(crate) const POST_COLUMNS: &str = "id, author_id, title, body, created_at, updated_at";

/// Insert a single post.
pub fn insert_post(conn: &Connection, post: &Post) -> UblogResult<()> {
    conn.execute(
        "INSERT INTO posts (id, author_id, title, body, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            post.id,
            post.author_id,
            post.title,
            post.body,
            to_sortable_ts(&post.created_at),
            to_sortable_ts(&post.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single post by ID.
pub fn get_post(conn: &Connection, id: &str) -> UblogResult<Option<Post>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], |row| Ok(parse_post_row(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(post) => Ok(Some(post?)),
        None => Ok(None),
    }
}

/// Update a post's mutable fields. `created_at` is the sort key and is
/// never rewritten.
pub fn update_post(conn: &Connection, post: &Post) -> UblogResult<()> {
    conn.execute(
        "UPDATE posts SET title = ?2, body = ?3, updated_at = ?4 WHERE id = ?1",
        params![
            post.id,
            post.title,
            post.body,
            to_sortable_ts(&post.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Delete a post by ID.
pub fn delete_post(conn: &Connection, id: &str) -> UblogResult<()> {
    conn.execute("DELETE FROM posts WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Parse one row in `POST_COLUMNS` order.
pub(crate) fn parse_post_row(row: &rusqlite::Row<'_>) -> UblogResult<Post> {
    let created_at: String = row.get(4).map_err(|e| to_storage_err(e.to_string()))?;
    let updated_at: String = row.get(5).map_err(|e| to_storage_err(e.to_string()))?;
    Ok(Post {
        id: row.get(0).map_err(|e| to_storage_err(e.to_string()))?,
        author_id: row.get(1).map_err(|e| to_storage_err(e.to_string()))?,
        title: row.get(2).map_err(|e| to_storage_err(e.to_string()))?,
        body: row.get(3).map_err(|e| to_storage_err(e.to_string()))?,
        created_at: parse_ts(&created_at)?,
        updated_at: parse_ts(&updated_at)?,
    })
}
