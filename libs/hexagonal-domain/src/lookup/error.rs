//! Domain errors for lookup operations
//!
//! A missing entity is NOT an error: repositories report it as `None`.
//! These variants only cover failures of the infrastructure behind the ports.

use thiserror::Error;

/// Errors that can occur while looking up an entity
///
/// These errors are independent of infrastructure implementation details
/// (e.g., no SQLite error types here).
#[derive(Error, Debug)]
pub enum EntityError {
    /// The backing store failed to answer the lookup
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),

    /// The persistence adapter could not be configured or opened
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl EntityError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Create a config error with a message
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, EntityError>;
