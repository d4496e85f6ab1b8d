//! SQL query modules, one per concern.

pub mod post_crud;
pub mod post_page;
pub mod user_ops;
