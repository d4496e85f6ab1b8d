//! The authorization guard wrapping every mutation-capable operation.

use ublog_core::errors::AuthError;
use ublog_core::traits::IdentityResolver;

/// Resolve the caller's identity or fail with `Unauthenticated`.
///
/// Pure check: the session is not refreshed or extended. Ownership
/// enforcement (Forbidden) is each mutation's job — a valid identity
/// from here says nothing about what it may touch.
pub fn require_identity<R: IdentityResolver + ?Sized>(
    resolver: &R,
    token: &str,
) -> Result<String, AuthError> {
    resolver.resolve(token).ok_or(AuthError::Unauthenticated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SessionStore;

    #[test]
    fn unknown_token_is_unauthenticated() {
        let store = SessionStore::new(3600);
        assert!(matches!(
            require_identity(&store, "no-such-token"),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn anonymous_session_is_unauthenticated() {
        let store = SessionStore::new(3600);
        let token = store.create();
        assert!(require_identity(&store, &token).is_err());
    }

    #[test]
    fn bound_session_yields_the_principal() {
        let store = SessionStore::new(3600);
        let token = store.create();
        store.bind(&token, "user-9");
        assert_eq!(require_identity(&store, &token).unwrap(), "user-9");
    }

    #[test]
    fn guard_does_not_extend_the_session() {
        let store = SessionStore::new(3600);
        let token = store.create();
        store.bind(&token, "user-9");
        let before = store.get(&token).unwrap().expires_at;
        let _ = require_identity(&store, &token);
        let after = store.get(&token).unwrap().expires_at;
        assert_eq!(before, after);
    }
}
