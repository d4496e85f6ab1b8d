use serde::{Deserialize, Serialize};

use crate::models::Post;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Structured outcome of a post mutation.
///
/// Business-rule failures (not found, wrong owner, invalid fields)
/// come back through this value so callers can render field-level
/// feedback; only authentication and storage faults abort the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    pub success: bool,
    pub message: String,
    /// Per-field validation messages, present only for validation failures.
    pub field_errors: Option<Vec<FieldError>>,
    /// The created or updated post, on success.
    pub post: Option<Post>,
}

impl MutationResult {
    pub fn ok(message: &str, post: Post) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            field_errors: None,
            post: Some(post),
        }
    }

    /// Success without an entity payload (delete).
    pub fn ok_empty(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            field_errors: None,
            post: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            success: false,
            message: "Post not found".to_string(),
            field_errors: None,
            post: None,
        }
    }

    /// Valid session, but the caller does not own the post.
    pub fn forbidden() -> Self {
        Self {
            success: false,
            message: "Not authorized".to_string(),
            field_errors: None,
            post: None,
        }
    }

    /// Storage failed mid-mutation. Kept inside the structured result
    /// channel so callers render it like any other failure.
    pub fn unavailable() -> Self {
        Self {
            success: false,
            message: "Internal server error".to_string(),
            field_errors: None,
            post: None,
        }
    }

    pub fn invalid(field_errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: "Validation failed".to_string(),
            field_errors: Some(field_errors),
            post: None,
        }
    }
}
