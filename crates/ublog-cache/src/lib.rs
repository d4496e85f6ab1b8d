//! # ublog-cache
//!
//! Process-local reconciliation state for pagination consumers: a
//! normalized entity table plus one ordered list view per logical
//! query. Pages fold in through the merge policy; deletions edit every
//! affected view in place without a refetch.

pub mod cache;
pub mod key;
pub mod merge;
pub mod view;

pub use cache::ClientCache;
pub use key::QueryKey;
pub use view::ListView;
