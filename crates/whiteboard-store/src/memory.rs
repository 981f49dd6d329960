//! In-memory store for tests

use crate::{record, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use whiteboard_domain::{Board, BoardStore};

const LOCATION: &str = "<memory>";

/// Store that keeps the serialized board in memory
///
/// The board goes through the same JSON codec as [`crate::JsonFileStore`],
/// so parsing and validation behave identically without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    text: Mutex<Option<String>>,
    lock: Mutex<()>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store (loads return a fresh board)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding raw persisted text, which need not be valid
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
            ..Self::default()
        }
    }

    /// Current persisted text, if anything was saved or seeded
    pub fn text(&self) -> Option<String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl BoardStore for MemoryStore {
    type Error = StoreError;
    type Guard<'a> = MutexGuard<'a, ()>;

    fn load(&self) -> Result<Board, StoreError> {
        match self.text() {
            None => Ok(Board::new()),
            Some(text) => record::decode(&text).map_err(|reason| StoreError::CorruptState {
                location: LOCATION.to_string(),
                reason,
            }),
        }
    }

    fn save(&self, board: &Board) -> Result<(), StoreError> {
        let text = record::encode(board)?;
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        Ok(self.lock.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
