//! Gatekeeper error types

use thiserror::Error;
use whiteboard_domain::Section;

/// Errors in capacity configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatekeeperError {
    /// A capacity key does not name a section
    #[error("Unknown section '{name}' in capacities. Available: {}", Section::names().join(", "))]
    UnknownSection {
        /// The key as written
        name: String,
    },

    /// Capacities must be positive
    #[error("Capacity for '{0}' must be a positive integer or \"unbounded\"")]
    ZeroCapacity(Section),

    /// The archive never has a capacity
    #[error("The Archive section cannot be given a capacity")]
    ArchiveCapacity,

    /// A capacity value is neither a number nor the keyword
    #[error("Invalid capacity value '{0}': expected a positive integer or \"unbounded\"")]
    InvalidCapacity(String),
}
