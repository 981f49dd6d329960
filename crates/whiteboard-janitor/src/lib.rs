//! Whiteboard Janitor
//!
//! Relocates completed items into the archive so their slots free up and
//! the visible board stays short.
//!
//! # Overview
//!
//! The Janitor is responsible for:
//! - **Archival**: moving every completed item out of its section, preserving order
//! - **Metrics**: reporting how many items moved from each section
//!
//! Archival is one-way and explicit: the Janitor runs only when asked, and
//! toggling an archived item back to active does not bring it back.
//!
//! # Usage
//!
//! ```
//! use whiteboard_domain::{Board, Priority, Section};
//! use whiteboard_janitor::Janitor;
//!
//! let mut board = Board::new();
//! let id = board.add(Section::BrainDump, "Call the plumber", Priority::High).unwrap();
//! board.set_completed(id, true);
//!
//! let janitor = Janitor::new();
//! assert_eq!(janitor.preview(&board).total_moved(), 1);
//!
//! let metrics = janitor.sweep(&mut board);
//! println!("{}", metrics.summary());
//! assert!(board.items(Section::BrainDump).is_empty());
//! ```

#![warn(missing_docs)]

mod janitor;
mod metrics;

pub use janitor::Janitor;
pub use metrics::JanitorMetrics;
