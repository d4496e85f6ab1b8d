//! SessionRecord — per-token state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One session. Created anonymous on first request; a principal is
/// bound to it by the external login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque session token.
    pub token: String,
    /// Principal bound to this session, absent while anonymous.
    pub owner_id: Option<String>,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Hard expiry; the session stops resolving after this instant.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create an anonymous session valid for `ttl`.
    pub fn new(token: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token,
            owner_id: None,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Whether this session has passed its expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
