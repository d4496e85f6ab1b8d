//! ClientCache — the serialization point around all cache mutation.

use std::sync::Mutex;

use ublog_core::models::{Cursor, Page, Post};

use crate::key::QueryKey;
use crate::merge::{self, CacheState};
use crate::view::ListView;

/// Normalized client-side cache. One mutex guards both maps so a page
/// merge, a deletion edit, and a view eviction can never interleave —
/// the surrounding app may dispatch them from concurrent request
/// completions, but they apply one at a time here.
///
/// Reads are synchronous and return cloned snapshots.
pub struct ClientCache {
    state: Mutex<CacheState>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Serialize access to the state. A poisoned lock means a panic
    /// mid-merge elsewhere; the state is still structurally sound
    /// (merges never leave a view half-written across await points —
    /// there are none), so recover rather than propagate the panic.
    fn locked(&self) -> std::sync::MutexGuard<'_, CacheState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Fold a fetched page into the view for `key`. `requested_cursor`
    /// is the cursor the fetch was issued from (`None` for a first
    /// fetch or refetch). Stale and orphaned continuations no-op.
    pub fn apply_page(&self, key: &QueryKey, requested_cursor: Option<&Cursor>, page: &Page) {
        merge::apply_page(&mut self.locked(), key, requested_cursor, page);
    }

    /// Remove a deleted post from the entity table and every view that
    /// references it, decrementing each affected view's total count.
    pub fn remove_post(&self, id: &str) {
        merge::remove_post(&mut self.locked(), id);
    }

    /// Drop the view for `key` (e.g. on unmount). Later continuations
    /// for it are dropped by the merge policy. Entities stay: other
    /// views may still reference them.
    pub fn evict_view(&self, key: &QueryKey) {
        self.locked().views.remove(key);
    }

    /// Snapshot of a single cached post.
    pub fn get_post(&self, id: &str) -> Option<Post> {
        self.locked().entities_by_id.get(id).cloned()
    }

    /// Snapshot of the view for `key`.
    pub fn view(&self, key: &QueryKey) -> Option<ListView> {
        self.locked().views.get(key).cloned()
    }

    /// The view's posts in display order, resolved through the entity
    /// table.
    pub fn list(&self, key: &QueryKey) -> Vec<Post> {
        let state = self.locked();
        let Some(view) = state.views.get(key) else {
            return Vec::new();
        };
        view.ordered_ids
            .iter()
            .filter_map(|id| state.entities_by_id.get(id).cloned())
            .collect()
    }

    /// Number of cached entities.
    pub fn entity_count(&self) -> usize {
        self.locked().entities_by_id.len()
    }
}

impl Default for ClientCache {
    fn default() -> Self {
        Self::new()
    }
}
