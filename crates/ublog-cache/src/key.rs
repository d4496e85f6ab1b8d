//! QueryKey — identity of one logical paginated view.

use serde::{Deserialize, Serialize};

/// Keys a list view by the query's parameter set *excluding* the
/// cursor: pages fetched at different cursors are continuations of one
/// logical view, not distinct views. Limit and filters do distinguish.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    pub limit: u32,
    /// Optional author filter; `None` is the all-posts feed.
    pub author_id: Option<String>,
}

impl QueryKey {
    /// The all-posts feed at the given page size.
    pub fn feed(limit: u32) -> Self {
        Self {
            limit,
            author_id: None,
        }
    }

    /// A single author's feed at the given page size.
    pub fn by_author(limit: u32, author_id: &str) -> Self {
        Self {
            limit,
            author_id: Some(author_id.to_string()),
        }
    }
}
