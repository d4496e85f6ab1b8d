//! CursorPaginator — one bounded, ordered slice per call.
//!
//! The subtle part is `has_more`. "items.len() == limit" under- and
//! over-counts when the page boundary lands exactly on the last record,
//! so the continuation branch compares the page's last position against
//! the store's single oldest record instead; both come from the same
//! storage snapshot as the page itself.

use ublog_core::errors::UblogResult;
use ublog_core::models::{Cursor, Page, PageOutcome};
use ublog_core::traits::{PageSnapshot, PostStore};

/// Fetch the next page of at most `limit` posts, strictly below
/// `cursor` when one is given. `limit` is clamped to
/// `1..=max_limit` — caller-supplied sizes are never trusted unbounded.
///
/// Storage failures come back as `PageOutcome::Unavailable`, keeping
/// them distinguishable from an exhausted collection.
pub fn fetch_page<S: PostStore + ?Sized>(
    store: &S,
    max_limit: u32,
    limit: u32,
    cursor: Option<&Cursor>,
) -> PageOutcome {
    // Not `clamp`: a zero `max_limit` would invert the range and panic.
    let limit = limit.min(max_limit).max(1);
    match snapshot(store, limit, cursor) {
        Ok(page) => PageOutcome::Ready(page),
        Err(e) => {
            tracing::warn!(error = %e, "paginated read failed");
            PageOutcome::Unavailable
        }
    }
}

fn snapshot<S: PostStore + ?Sized>(
    store: &S,
    limit: u32,
    cursor: Option<&Cursor>,
) -> UblogResult<Page> {
    let PageSnapshot {
        items,
        oldest,
        total_count,
    } = store.snapshot_page(limit, cursor)?;

    let last_cursor = items.last().map(|post| post.cursor());
    let has_more = match (cursor, &last_cursor) {
        // Continuation: more data iff this page does not end on the
        // store's oldest record.
        (Some(_), Some(last)) => match oldest {
            Some(oldest) => *last != oldest.cursor(),
            None => false,
        },
        // Continuation that came back empty: the cursor was at or past
        // the end.
        (Some(_), None) => false,
        // First page: more data iff the page did not swallow the whole
        // collection.
        (None, _) => items.len() as u64 != total_count,
    };

    Ok(Page {
        items,
        cursor: last_cursor,
        has_more,
        total_count,
    })
}
