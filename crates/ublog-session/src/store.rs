//! SessionStore — concurrent token → session access via DashMap.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use ublog_core::traits::IdentityResolver;

use crate::record::SessionRecord;

/// Thread-safe session store with a fixed TTL. Expired entries are
/// dropped lazily on resolve and eagerly by `purge_expired`.
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionRecord>>,
    ttl: Duration,
}

impl SessionStore {
    /// Create a store whose sessions live for `ttl_secs`.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Create a new anonymous session and return its token.
    pub fn create(&self) -> String {
        let token = Uuid::new_v4().to_string();
        let record = SessionRecord::new(token.clone(), self.ttl);
        self.sessions.insert(token.clone(), record);
        token
    }

    /// Bind a principal to an existing session (called by the external
    /// login flow). Returns false if the session does not exist.
    pub fn bind(&self, token: &str, owner_id: &str) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(token) {
            entry.owner_id = Some(owner_id.to_string());
            true
        } else {
            false
        }
    }

    /// Push a session's expiry forward by one TTL from now. Returns
    /// false if the session does not exist. The auth guard never calls
    /// this: resolving is a pure check.
    pub fn renew(&self, token: &str) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(token) {
            entry.expires_at = Utc::now() + self.ttl;
            true
        } else {
            false
        }
    }

    /// Get a session record by token (cloned snapshot), if live.
    pub fn get(&self, token: &str) -> Option<SessionRecord> {
        self.sessions
            .get(token)
            .filter(|r| !r.is_expired(Utc::now()))
            .map(|r| r.clone())
    }

    /// Drop every expired session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        // A concurrent create can land mid-retain, so the two lengths
        // are not ordered; saturate instead of underflowing.
        let before = self.sessions.len();
        self.sessions.retain(|_, record| !record.is_expired(now));
        before.saturating_sub(self.sessions.len())
    }

    /// Number of sessions currently held (including not-yet-purged
    /// expired ones).
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl IdentityResolver for SessionStore {
    /// Resolve a token to its bound principal. Expired sessions are
    /// removed on touch and resolve to nothing, as do anonymous ones.
    fn resolve(&self, token: &str) -> Option<String> {
        let expired = match self.sessions.get(token) {
            Some(record) => record.is_expired(Utc::now()),
            None => return None,
        };
        if expired {
            self.sessions.remove(token);
            tracing::debug!(token, "session expired on resolve");
            return None;
        }
        self.sessions.get(token).and_then(|r| r.owner_id.clone())
    }

    fn destroy(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}
