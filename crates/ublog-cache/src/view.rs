//! ListView — the ordered, de-duplicated state of one logical query.

use serde::{Deserialize, Serialize};

use ublog_core::models::Cursor;

/// Holds identifiers only (display order = insertion order); entity
/// bodies live once in the cache's entity table, so two views of the
/// same post can never drift apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListView {
    /// Unique post ids in display order.
    pub ordered_ids: Vec<String>,
    /// Tail cursor: where the next continuation starts.
    pub cursor: Option<Cursor>,
    /// Whether the server reported more data beyond the tail.
    pub has_more: bool,
    /// Server-reported collection size, kept current by targeted edits.
    pub total_count: u64,
}

impl ListView {
    /// Whether the view already shows this post.
    pub fn contains(&self, id: &str) -> bool {
        self.ordered_ids.iter().any(|existing| existing == id)
    }

    /// Number of posts in the view.
    pub fn len(&self) -> usize {
        self.ordered_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }
}
