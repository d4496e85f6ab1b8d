//! # ublog-resolver
//!
//! The server-side surface: cursor pagination over the ordered post
//! store, session-guarded mutations, and the explicit app context
//! handler entry points receive. This crate is a library invoked by
//! resolver/handler plumbing, not a standalone executable.

pub mod context;
pub mod mutations;
pub mod paginator;
pub mod queries;

pub use context::AppContext;
pub use mutations::PostInput;
