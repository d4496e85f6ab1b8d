use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position marker in the pagination total order.
///
/// The collection is served strictly descending by `(created_at, id)`.
/// A bare timestamp cannot distinguish two posts created in the same
/// millisecond, so the cursor carries the id tiebreak as well; a page
/// continues strictly below its cursor in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub created_at: DateTime<Utc>,
    pub id: String,
}

/// Ascending `(created_at, id)` order; pagination walks it in reverse.
impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.created_at
            .cmp(&other.created_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
