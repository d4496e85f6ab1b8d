use crate::errors::UblogResult;
use crate::models::{Cursor, Post, User};

/// The three reads a paginated call needs, taken from one consistent
/// snapshot. Splitting them across independent reads lets a concurrent
/// write flip the `has_more` boundary comparison, so implementations
/// must produce all three fields from a single read transaction.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Up to `limit` posts, strictly descending by `(created_at, id)`,
    /// strictly below the cursor when one was given.
    pub items: Vec<Post>,
    /// The single oldest post in the store, if any.
    pub oldest: Option<Post>,
    /// Total number of posts at snapshot time.
    pub total_count: u64,
}

/// Durable ordered post collection.
///
/// Backed by anything that can range-scan `(created_at, id)` descending
/// and point-delete by id.
pub trait PostStore: Send + Sync {
    fn create(&self, post: &Post) -> UblogResult<()>;

    fn get(&self, id: &str) -> UblogResult<Option<Post>>;

    fn update(&self, post: &Post) -> UblogResult<()>;

    fn delete(&self, id: &str) -> UblogResult<()>;

    /// Read the page window, boundary record, and live count in one
    /// consistent snapshot. See [`PageSnapshot`].
    fn snapshot_page(&self, limit: u32, cursor: Option<&Cursor>) -> UblogResult<PageSnapshot>;

    fn count(&self) -> UblogResult<u64>;
}

/// Author records, enough for the post → author lookup.
pub trait UserStore: Send + Sync {
    fn create_user(&self, user: &User) -> UblogResult<()>;

    fn get_user(&self, id: &str) -> UblogResult<Option<User>>;
}
