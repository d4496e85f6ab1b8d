//! Error taxonomy, one enum per subsystem.
//!
//! Two channels: variants here are raised faults. Business-rule
//! failures (not found, wrong owner, field validation) travel as
//! structured [`crate::models::MutationResult`] values instead.

mod auth_error;
mod config_error;
mod storage_error;

pub use auth_error::AuthError;
pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error for the ublog workspace.
#[derive(Debug, thiserror::Error)]
pub enum UblogError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Workspace-wide result alias.
pub type UblogResult<T> = Result<T, UblogError>;
