/// Opaque identity collaborator consumed read-only by the auth guard.
///
/// A token resolves to the principal bound to it, or to nothing when
/// the session is unknown, expired, or anonymous.
pub trait IdentityResolver: Send + Sync {
    /// Resolve a session token to its principal, if any.
    fn resolve(&self, token: &str) -> Option<String>;

    /// Destroy a session. Returns whether one existed.
    fn destroy(&self, token: &str) -> bool;
}
