//! Command implementations.
//!
//! Each command runs against any [`Whiteboard`](whiteboard_ops::Whiteboard)
//! and returns the text to print.

pub mod add;
pub mod clean;
pub mod sections;
pub mod toggle;
pub mod view;

pub use self::add::execute_add;
pub use self::clean::execute_clean;
pub use self::sections::execute_sections;
pub use self::toggle::execute_toggle;
pub use self::view::execute_view;
