//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::Board;

/// Trait for loading and persisting the board
///
/// Implemented by the infrastructure layer (whiteboard-store). Every
/// operation is a full read-modify-write cycle; there is no long-lived
/// in-memory board between calls.
pub trait BoardStore {
    /// Error type for store operations
    type Error;

    /// Guard returned by [`BoardStore::lock`]; exclusion ends when it drops
    type Guard<'a>
    where
        Self: 'a;

    /// Materialize the current board
    ///
    /// Returns a fresh board when nothing has been persisted yet.
    fn load(&self) -> Result<Board, Self::Error>;

    /// Replace the persisted board with `board`
    ///
    /// Must be atomic: a failure leaves the previous state loadable.
    fn save(&self, board: &Board) -> Result<(), Self::Error>;

    /// Acquire exclusive access for a load-modify-save cycle
    fn lock(&self) -> Result<Self::Guard<'_>, Self::Error>;
}
