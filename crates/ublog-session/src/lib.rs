//! # ublog-session
//!
//! The session collaborator: an opaque token → principal store with a
//! fixed TTL, plus the guard that mutation paths call to resolve the
//! caller's identity.

pub mod guard;
pub mod record;
pub mod store;

pub use guard::require_identity;
pub use record::SessionRecord;
pub use store::SessionStore;
