//! Whiteboard Gatekeeper
//!
//! Capacity policy for board sections ("the Bouncer").
//!
//! The Gatekeeper provides:
//! - Per-section active-item capacities, configurable from TOML
//! - Admission checks before an item is added
//! - Detection of sections left over capacity by a tighter configuration
//!
//! Capacity counts only active items. A section at its limit admits nothing
//! until an item is completed; the archive is always unbounded.
//!
//! # Examples
//!
//! ```
//! use whiteboard_domain::{Board, Section};
//! use whiteboard_gatekeeper::{Admission, Bouncer, CapacityConfig};
//!
//! let bouncer = Bouncer::new(CapacityConfig::default());
//! let board = Board::new();
//!
//! match bouncer.admit(&board, Section::TodaysTasks) {
//!     Admission::Admitted { active, .. } => assert_eq!(active, 0),
//!     Admission::Denied { .. } => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

mod bouncer;
mod config;
mod error;

pub use bouncer::{Admission, Bouncer, CapacityBreach};
pub use config::{Capacity, CapacityConfig};
pub use error::GatekeeperError;
