//! Whiteboard Operations
//!
//! The four board operations (`add_item`, `toggle_status`, `clean_board`,
//! `render_view`) built on an injectable [`BoardStore`](whiteboard_domain::BoardStore),
//! plus the configuration that wires a file-backed board together.
//!
//! # Example
//!
//! ```no_run
//! use whiteboard_ops::{Whiteboard, WhiteboardConfig};
//!
//! let config = WhiteboardConfig::resolve(None).expect("Failed to load config");
//! let board = Whiteboard::open(&config);
//!
//! let outcome = board
//!     .add_item("Today's Tasks", "Write report", Some("High"))
//!     .expect("Failed to add item");
//! println!("{outcome}");
//! println!("{}", board.render_view().expect("Failed to render"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod outcome;
mod render;
mod whiteboard;

pub use config::{ConfigError, WhiteboardConfig, CONFIG_ENV, DATA_ENV};
pub use error::OpsError;
pub use outcome::{AddOutcome, CleanReport, SectionMoves, ToggleOutcome};
pub use render::{priority_icon, BoardView, ItemView, SectionView};
pub use whiteboard::Whiteboard;
