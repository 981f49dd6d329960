//! Error types for board operations.

use thiserror::Error;
use whiteboard_domain::{BoardError, Priority, Section};
use whiteboard_store::StoreError;

/// Board operation errors
///
/// Validation variants are recoverable and raised before any state is read
/// or written. `Store` is fatal to the operation and must be surfaced.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Section name not in the fixed set
    #[error("Section '{name}' not found. Available: {}", valid.join(", "))]
    UnknownSection {
        /// Name as given by the caller
        name: String,
        /// Every valid section name
        valid: Vec<&'static str>,
    },

    /// Priority spelling not recognised
    #[error("Invalid priority '{value}'. Valid priorities: {}", Priority::names().join(", "))]
    InvalidPriority {
        /// Value as given by the caller
        value: String,
    },

    /// Item content was empty or whitespace
    #[error("Item content cannot be empty")]
    EmptyContent,

    /// The loaded board cannot take the change
    #[error("Board cannot be updated: {0}")]
    Board(#[from] BoardError),

    /// Loading, saving or locking the board failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OpsError {
    /// Whether this is a caller input problem rather than a board or storage failure
    pub fn is_validation(&self) -> bool {
        !matches!(self, OpsError::Board(_) | OpsError::Store(_))
    }

    pub(crate) fn unknown_section(name: &str) -> Self {
        OpsError::UnknownSection {
            name: name.to_string(),
            valid: Section::names(),
        }
    }
}
