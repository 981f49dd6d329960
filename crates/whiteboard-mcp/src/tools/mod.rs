//! MCP tool implementations

mod add_item;
mod clean_board;
mod render_view;
mod toggle_status;

pub use add_item::handle_add_item;
pub use clean_board::handle_clean_board;
pub use render_view::handle_render_view;
pub use toggle_status::handle_toggle_status;

use crate::error::McpError;
use crate::protocol::{ToolCallResult, ToolDefinition};
use std::fmt::Display;
use whiteboard_ops::OpsError;

/// Every tool, in `tools/list` order
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        render_view::definition(),
        add_item::definition(),
        toggle_status::definition(),
        clean_board::definition(),
    ]
}

/// Map an operation result onto a tool result
///
/// Input errors go back to the model as `isError` text it can act on;
/// storage failures become JSON-RPC errors.
pub(crate) fn tool_result<T: Display>(result: Result<T, OpsError>) -> Result<ToolCallResult, McpError> {
    match result {
        Ok(outcome) => Ok(ToolCallResult::text(outcome.to_string())),
        Err(err) if err.is_validation() => Ok(ToolCallResult::error(format!("Error: {}", err))),
        Err(err) => Err(err.into()),
    }
}
