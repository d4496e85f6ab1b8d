use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered author. Credential material (password hash, reset
/// tokens) belongs to the external identity collaborator and is not
/// modeled here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 identifier, referenced by `Post::author_id`.
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Identity equality, same convention as `Post`.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
