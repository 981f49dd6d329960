//! Error types for storage operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading, writing or renaming a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Persisted content does not match the board schema or its invariants
    ///
    /// Never repaired automatically; the file is left untouched for manual recovery.
    #[error("Corrupt board state in {location}: {reason}")]
    CorruptState {
        /// File path, or `<memory>` for the in-memory store
        location: String,
        /// What failed to parse or validate
        reason: String,
    },

    /// Encoding the board failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Another writer held the lock for longer than the configured timeout
    #[error("Timed out after {waited_ms}ms waiting for lock {}", path.display())]
    LockTimeout {
        /// Lock file path
        path: PathBuf,
        /// How long acquisition was attempted
        waited_ms: u64,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the persisted state needs manual attention
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptState { .. })
    }
}
