/// Authentication faults raised by the session guard.
///
/// Ownership mismatches (`Forbidden`) are not here: they are
/// business-rule failures returned inside a `MutationResult`.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not authenticated")]
    Unauthenticated,
}
