//! MergePolicy — folds an arriving page into the cache state.
//!
//! Stale or orphaned continuations are benign races (a fast "load
//! more" double-click, a response landing after its view unmounted),
//! so they no-op silently instead of surfacing an error or corrupting
//! order.

use std::collections::HashMap;

use ublog_core::models::{Cursor, Page, Post};

use crate::key::QueryKey;
use crate::view::ListView;

/// The two maps behind the cache: entity bodies by id, list views by
/// logical query. Views reference entities by id only.
#[derive(Debug, Default)]
pub struct CacheState {
    pub entities_by_id: HashMap<String, Post>,
    pub views: HashMap<QueryKey, ListView>,
}

/// Fold one fetched page into the state. `requested_cursor` is the
/// cursor the fetch was issued from: `None` for a first fetch or
/// refetch, `Some` for a continuation. A continuation merges only when
/// that cursor still equals the view's tail.
pub(crate) fn apply_page(
    state: &mut CacheState,
    key: &QueryKey,
    requested_cursor: Option<&Cursor>,
    page: &Page,
) {
    match (state.views.contains_key(key), requested_cursor) {
        // First fetch for this key: install the view as-is.
        (false, None) => {
            let view = ListView {
                ordered_ids: page.items.iter().map(|p| p.id.clone()).collect(),
                cursor: page.cursor.clone(),
                has_more: page.has_more,
                total_count: page.total_count,
            };
            state.views.insert(key.clone(), view);
            upsert_entities(state, page);
        }
        // Continuation for a view that no longer exists: the fetch was
        // superseded (view unmounted or evicted). Drop it.
        (false, Some(_)) => {
            tracing::debug!(?key, "dropping continuation for evicted view");
        }
        // Refetch from the top: replace the view wholesale.
        (true, None) => {
            if let Some(view) = state.views.get_mut(key) {
                view.ordered_ids = page.items.iter().map(|p| p.id.clone()).collect();
                view.cursor = page.cursor.clone();
                view.has_more = page.has_more;
                view.total_count = page.total_count;
            }
            upsert_entities(state, page);
        }
        // Continuation: append minus duplicates, iff the cursor still
        // matches the tail.
        (true, Some(requested)) => {
            let Some(view) = state.views.get_mut(key) else {
                return;
            };
            if view.cursor.as_ref() != Some(requested) {
                tracing::debug!(?key, "dropping stale continuation");
                return;
            }
            for post in &page.items {
                if !view.contains(&post.id) {
                    view.ordered_ids.push(post.id.clone());
                }
            }
            // An empty continuation carries no cursor; the tail stays
            // where it was.
            if page.cursor.is_some() {
                view.cursor = page.cursor.clone();
            }
            view.has_more = page.has_more;
            view.total_count = page.total_count;
            upsert_entities(state, page);
        }
    }
}

/// Targeted deletion edit: drop the post everywhere it is referenced
/// and shrink each affected view's count by one. No refetch.
pub(crate) fn remove_post(state: &mut CacheState, id: &str) {
    state.entities_by_id.remove(id);
    for view in state.views.values_mut() {
        let before = view.ordered_ids.len();
        view.ordered_ids.retain(|existing| existing != id);
        if view.ordered_ids.len() != before {
            view.total_count = view.total_count.saturating_sub(1);
        }
    }
}

fn upsert_entities(state: &mut CacheState, page: &Page) {
    for post in &page.items {
        state.entities_by_id.insert(post.id.clone(), post.clone());
    }
}
