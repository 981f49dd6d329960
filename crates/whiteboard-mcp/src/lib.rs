//! Whiteboard MCP Server
//!
//! Model Context Protocol server exposing the whiteboard to AI clients over
//! stdio (newline-delimited JSON-RPC 2.0).
//!
//! Provides 4 MCP tools:
//! - `render_view` - The live board as markdown
//! - `add_item` - Add an item, subject to section capacity
//! - `toggle_status` - Mark an item completed or active
//! - `clean_board` - Move completed items to the Archive
//!
//! and one resource, `whiteboard://main`, holding the same markdown view.
//!
//! # Example
//!
//! ```no_run
//! use whiteboard_mcp::McpServer;
//! use whiteboard_ops::{Whiteboard, WhiteboardConfig};
//!
//! # async fn serve() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WhiteboardConfig::resolve(None)?;
//! let server = McpServer::new(Whiteboard::open(&config));
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;
mod tools;

pub use error::McpError;
pub use protocol::PROTOCOL_VERSION;
pub use server::{McpServer, BOARD_URI};
