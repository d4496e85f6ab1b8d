//! Trait seams between the core and its collaborators.

mod identity;
mod store;

pub use identity::IdentityResolver;
pub use store::{PageSnapshot, PostStore, UserStore};
