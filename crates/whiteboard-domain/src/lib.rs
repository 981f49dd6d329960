//! Whiteboard Domain Layer
//!
//! This crate contains the board model shared by every other layer. It has
//! ZERO external dependencies and defines the value types, the board
//! aggregate with its invariants, and the storage trait that infrastructure
//! crates implement.
//!
//! ## Key Concepts
//!
//! - **Item**: a line on the board with content, completion flag and priority
//! - **Section**: one of a fixed set of named buckets (Today's Tasks, Archive, ...)
//! - **Board**: every section plus the `next_id` counter
//! - **Active item**: an item whose completion flag is false
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and invariant checks only
//! - Capacity policy lives in `whiteboard-gatekeeper`, archival in
//!   `whiteboard-janitor`, persistence in `whiteboard-store`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod item;
pub mod priority;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use board::{Board, BoardError};
pub use item::{Item, ItemId};
pub use priority::Priority;
pub use section::Section;
pub use traits::BoardStore;
