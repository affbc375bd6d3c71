//! Configuration error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// A loaded value that fails the portal's sanity checks.
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },

    /// Misuse of the `PORTAL_*` environment variables.
    #[error("{0}")]
    Env(String),

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
