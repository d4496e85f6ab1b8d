//! Ordered page window, boundary record, and count for pagination.
//!
//! `snapshot_page` is the entry point: it takes all three reads inside
//! one transaction so the `has_more` boundary comparison cannot race a
//! concurrent writer.

use rusqlite::{params, Connection, OptionalExtension};

use ublog_core::errors::UblogResult;
use ublog_core::models::{Cursor, Post};
use ublog_core::traits::PageSnapshot;

use super::post_crud::{parse_post_row, POST_COLUMNS};
use crate::{to_sortable_ts, to_storage_err};

/// Fetch up to `limit` posts in descending `(created_at, id)` order,
/// strictly below `cursor` when one is given.
pub fn page_window(
    conn: &Connection,
    limit: u32,
    cursor: Option<&Cursor>,
) -> UblogResult<Vec<Post>> {
    match cursor {
        Some(cursor) => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {POST_COLUMNS} FROM posts
                     WHERE created_at < ?1 OR (created_at = ?1 AND id < ?2)
                     ORDER BY created_at DESC, id DESC
                     LIMIT ?3"
                ))
                .map_err(|e| to_storage_err(e.to_string()))?;
            collect_posts(
                &mut stmt,
                params![to_sortable_ts(&cursor.created_at), cursor.id, limit],
            )
        }
        None => {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {POST_COLUMNS} FROM posts
                     ORDER BY created_at DESC, id DESC
                     LIMIT ?1"
                ))
                .map_err(|e| to_storage_err(e.to_string()))?;
            collect_posts(&mut stmt, params![limit])
        }
    }
}

/// The single oldest post in the store, if any.
pub fn oldest_post(conn: &Connection) -> UblogResult<Option<Post>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {POST_COLUMNS} FROM posts
             ORDER BY created_at ASC, id ASC
             LIMIT 1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row([], |row| Ok(parse_post_row(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match result {
        Some(post) => Ok(Some(post?)),
        None => Ok(None),
    }
}

/// Live post count.
pub fn count_posts(conn: &Connection) -> UblogResult<u64> {
    conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get::<_, u64>(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Take the page window, boundary record, and count from one
/// consistent snapshot.
pub fn snapshot_page(
    conn: &Connection,
    limit: u32,
    cursor: Option<&Cursor>,
) -> UblogResult<PageSnapshot> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("snapshot_page begin: {e}")))?;

    let items = page_window(&tx, limit, cursor)?;
    let oldest = oldest_post(&tx)?;
    let total_count = count_posts(&tx)?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("snapshot_page commit: {e}")))?;

    Ok(PageSnapshot {
        items,
        oldest,
        total_count,
    })
}

/// Helper: collect posts from a prepared statement.
fn collect_posts<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> UblogResult<Vec<Post>> {
    let rows = stmt
        .query_map(params, |row| Ok(parse_post_row(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let post = row.map_err(|e| to_storage_err(e.to_string()))??;
        results.push(post);
    }
    Ok(results)
}
