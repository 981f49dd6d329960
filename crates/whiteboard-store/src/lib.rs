//! Whiteboard Storage Layer
//!
//! Implements the `BoardStore` trait for the board's single JSON document.
//!
//! # Architecture
//!
//! - [`JsonFileStore`]: the durable store. Atomic saves (temp file + rename),
//!   and an exclusive lock (in-process mutex + `<data>.lock` file) held by
//!   mutating operations across their load-modify-save cycle.
//! - [`MemoryStore`]: same codec, no filesystem; used by tests.
//! - Corrupt content is never repaired: loads fail with
//!   [`StoreError::CorruptState`] and leave the file alone.
//!
//! # Examples
//!
//! ```no_run
//! use whiteboard_domain::{BoardStore, Priority, Section};
//! use whiteboard_store::JsonFileStore;
//!
//! let store = JsonFileStore::new("whiteboard_data.json");
//! let _guard = store.lock().unwrap();
//! let mut board = store.load().unwrap();
//! board.add(Section::BrainDump, "Buy milk", Priority::Low).unwrap();
//! store.save(&board).unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod file;
mod lock;
mod memory;
pub mod record;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use lock::{FileLockGuard, LockOptions};
pub use memory::MemoryStore;
