//! # ublog-core
//!
//! Foundation crate for the ublog pagination core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::UblogConfig;
pub use errors::{UblogError, UblogResult};
pub use models::{Cursor, MutationResult, Page, PageOutcome, Post, User};
