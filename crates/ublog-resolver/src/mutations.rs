//! Guarded post mutations.
//!
//! Every mutation resolves the caller through the session guard first;
//! a missing identity aborts the call as a fault. Everything after
//! that — not found, wrong owner, invalid fields, storage trouble —
//! comes back inside the structured `MutationResult`.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use ublog_core::constants::MAX_TITLE_LEN;
use ublog_core::errors::UblogResult;
use ublog_core::models::{FieldError, MutationResult, Post};
use ublog_core::traits::{IdentityResolver, PostStore};
use ublog_session::require_identity;

/// Title and body for a create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

/// Field-level checks shared by create and update.
fn validate(input: &PostInput) -> Option<Vec<FieldError>> {
    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push(FieldError::new("title", "title must not be empty"));
    } else if input.title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            "title must be at most 255 characters",
        ));
    }
    if input.body.trim().is_empty() {
        errors.push(FieldError::new("body", "body must not be empty"));
    }
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

/// Create a post owned by the caller.
pub fn create_post<S, R>(
    store: &S,
    sessions: &R,
    token: &str,
    input: &PostInput,
) -> UblogResult<MutationResult>
where
    S: PostStore + ?Sized,
    R: IdentityResolver + ?Sized,
{
    let owner_id = require_identity(sessions, token)?;

    if let Some(errors) = validate(input) {
        return Ok(MutationResult::invalid(errors));
    }

    let post = Post::new(&owner_id, &input.title, &input.body);
    match store.create(&post) {
        Ok(()) => Ok(MutationResult::ok("Created post successfully", post)),
        Err(e) => {
            tracing::warn!(error = %e, "create_post storage failure");
            Ok(MutationResult::unavailable())
        }
    }
}

/// Update a post's title and body. Only the recorded owner may update.
pub fn update_post<S, R>(
    store: &S,
    sessions: &R,
    token: &str,
    id: &str,
    input: &PostInput,
) -> UblogResult<MutationResult>
where
    S: PostStore + ?Sized,
    R: IdentityResolver + ?Sized,
{
    let owner_id = require_identity(sessions, token)?;

    let existing = match store.get(id) {
        Ok(Some(post)) => post,
        Ok(None) => return Ok(MutationResult::not_found()),
        Err(e) => {
            tracing::warn!(error = %e, "update_post read failure");
            return Ok(MutationResult::unavailable());
        }
    };

    if existing.author_id != owner_id {
        return Ok(MutationResult::forbidden());
    }

    if let Some(errors) = validate(input) {
        return Ok(MutationResult::invalid(errors));
    }

    let mut post = existing;
    post.title = input.title.clone();
    post.body = input.body.clone();
    post.updated_at = Utc::now();

    match store.update(&post) {
        Ok(()) => Ok(MutationResult::ok("Updated post successfully", post)),
        Err(e) => {
            tracing::warn!(error = %e, "update_post write failure");
            Ok(MutationResult::unavailable())
        }
    }
}

/// Delete a post. Only the recorded owner may delete.
pub fn delete_post<S, R>(
    store: &S,
    sessions: &R,
    token: &str,
    id: &str,
) -> UblogResult<MutationResult>
where
    S: PostStore + ?Sized,
    R: IdentityResolver + ?Sized,
{
    let owner_id = require_identity(sessions, token)?;

    let existing = match store.get(id) {
        Ok(Some(post)) => post,
        Ok(None) => return Ok(MutationResult::not_found()),
        Err(e) => {
            tracing::warn!(error = %e, "delete_post read failure");
            return Ok(MutationResult::unavailable());
        }
    };

    if existing.author_id != owner_id {
        return Ok(MutationResult::forbidden());
    }

    match store.delete(id) {
        Ok(()) => Ok(MutationResult::ok_empty("Deleted post successfully")),
        Err(e) => {
            tracing::warn!(error = %e, "delete_post write failure");
            Ok(MutationResult::unavailable())
        }
    }
}

/// Destroy the caller's session. Returns whether one existed.
pub fn logout<R: IdentityResolver + ?Sized>(sessions: &R, token: &str) -> bool {
    sessions.destroy(token)
}
