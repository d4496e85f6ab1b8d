//! Read-side lookups: single post, its author, the current user.

use ublog_core::errors::UblogResult;
use ublog_core::models::{Post, User};
use ublog_core::traits::{IdentityResolver, PostStore, UserStore};

/// Point lookup by post id. Absence is a value, not a fault.
pub fn get_post<S: PostStore + ?Sized>(store: &S, id: &str) -> UblogResult<Option<Post>> {
    store.get(id)
}

/// The author of a post, if the user record still exists.
pub fn get_author<S: UserStore + ?Sized>(store: &S, post: &Post) -> UblogResult<Option<User>> {
    store.get_user(&post.author_id)
}

/// The user bound to the given session, if any.
pub fn current_user<S, R>(store: &S, sessions: &R, token: &str) -> UblogResult<Option<User>>
where
    S: UserStore + ?Sized,
    R: IdentityResolver + ?Sized,
{
    match sessions.resolve(token) {
        Some(owner_id) => store.get_user(&owner_id),
        None => Ok(None),
    }
}
