use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SNIPPET_LEN;
use crate::models::Cursor;

/// A blog post. `created_at` is set once at creation and never changes:
/// it is the primary sort key for pagination, tie-broken by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// UUID v4 identifier.
    pub id: String,
    /// Principal that created the post. Only this principal may
    /// update or delete it.
    pub author_id: String,
    /// Post title.
    pub title: String,
    /// Full post body.
    pub body: String,
    /// Creation timestamp, millisecond resolution. Immutable.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `author_id`, stamped with the current time.
    pub fn new(author_id: &str, title: &str, body: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The pagination cursor this post occupies in the total order.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            created_at: self.created_at,
            id: self.id.clone(),
        }
    }

    /// First `SNIPPET_LEN` characters of the body, for list rendering.
    pub fn snippet(&self) -> &str {
        match self.body.char_indices().nth(SNIPPET_LEN) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }
}

/// Identity equality: two posts are equal if they have the same ID.
/// For content comparison, compare fields directly.
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
