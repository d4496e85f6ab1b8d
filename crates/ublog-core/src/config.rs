//! Workspace configuration, loadable from TOML.
//!
//! Every section defaults from `constants`, so an empty config file
//! (or no file at all) yields a fully working setup.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{ConfigError, UblogResult};

/// Pagination limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Hard ceiling on requested page size; requests above it are clamped.
    pub max_page_limit: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_page_limit: constants::DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

/// Session lifetime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed TTL after which a session stops resolving.
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: constants::DEFAULT_SESSION_TTL_SECS,
        }
    }
}

/// Storage pool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Number of read connections in the pool.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            read_pool_size: constants::DEFAULT_READ_POOL_SIZE,
        }
    }
}

/// Top-level configuration passed into the app context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UblogConfig {
    pub pagination: PaginationConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
}

impl UblogConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(input: &str) -> UblogResult<Self> {
        toml::from_str(input).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = UblogConfig::from_toml("").unwrap();
        assert_eq!(
            config.pagination.max_page_limit,
            constants::DEFAULT_MAX_PAGE_LIMIT
        );
        assert_eq!(config.session.ttl_secs, constants::DEFAULT_SESSION_TTL_SECS);
        assert_eq!(
            config.storage.read_pool_size,
            constants::DEFAULT_READ_POOL_SIZE
        );
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = UblogConfig::from_toml("[pagination]\nmax_page_limit = 5\n").unwrap();
        assert_eq!(config.pagination.max_page_limit, 5);
        assert_eq!(config.session.ttl_secs, constants::DEFAULT_SESSION_TTL_SECS);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(UblogConfig::from_toml("pagination = [").is_err());
    }
}
