use serde::{Deserialize, Serialize};

use crate::models::{Cursor, Post};

/// One bounded slice of the post collection plus continuation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Posts sorted strictly descending by `(created_at, id)`.
    pub items: Vec<Post>,
    /// Cursor of the last item, absent when the page is empty.
    pub cursor: Option<Cursor>,
    /// Whether older posts exist beyond this page.
    pub has_more: bool,
    /// Live count of the whole collection at read time. Snapshot only:
    /// eventually consistent under concurrent writes.
    pub total_count: u64,
}

/// Outcome of a paginated read. `Unavailable` keeps storage failures
/// distinguishable from "no more data" without raising a fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PageOutcome {
    Ready(Page),
    Unavailable,
}

impl PageOutcome {
    /// The page, if the read succeeded.
    pub fn ready(self) -> Option<Page> {
        match self {
            PageOutcome::Ready(page) => Some(page),
            PageOutcome::Unavailable => None,
        }
    }
}
