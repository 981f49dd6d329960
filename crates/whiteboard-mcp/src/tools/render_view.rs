//! render_view tool - The board as markdown

use crate::error::McpError;
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::tools::tool_result;
use serde_json::json;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "render_view".to_string(),
        description: "Show the live whiteboard: every section except the Archive, with active/limit \
                      counts, priorities and item IDs."
            .to_string(),
        input_schema: json!({"type": "object", "properties": {}}),
    }
}

/// Handle render_view tool invocation
pub fn handle_render_view<S>(board: &Whiteboard<S>) -> Result<ToolCallResult, McpError>
where
    S: BoardStore<Error = StoreError>,
{
    tool_result(board.render_view())
}
