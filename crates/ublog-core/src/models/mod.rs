//! Data model: entities, pages, cursors, and mutation results.

mod cursor;
mod mutation;
mod page;
mod post;
mod user;

pub use cursor::Cursor;
pub use mutation::{FieldError, MutationResult};
pub use page::{Page, PageOutcome};
pub use post::Post;
pub use user::User;
