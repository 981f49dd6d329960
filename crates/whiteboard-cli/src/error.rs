//! Error types for the CLI application.

use thiserror::Error;
use whiteboard_ops::{ConfigError, OpsError};

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Board operation error
    #[error(transparent)]
    Ops(#[from] OpsError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the user can fix this by changing the command line
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::Ops(err) if err.is_validation())
    }
}
