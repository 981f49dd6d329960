//! toggle_status tool - Mark an item completed or active

use crate::error::McpError;
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::tools::tool_result;
use serde::Deserialize;
use serde_json::json;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Parameters for toggling an item
#[derive(Debug, Deserialize)]
pub struct ToggleStatusParams {
    /// Item id as shown in the view
    pub item_id: u64,
    /// Target state
    pub completed: bool,
}

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "toggle_status".to_string(),
        description: "Mark an item as completed (true) or active (false). Works on archived items too."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "item_id": {"type": "integer", "minimum": 1, "description": "Item ID from the board view"},
                "completed": {"type": "boolean", "description": "New completion state"}
            },
            "required": ["item_id", "completed"]
        }),
    }
}

/// Handle toggle_status tool invocation
pub fn handle_toggle_status<S>(
    board: &Whiteboard<S>,
    params: ToggleStatusParams,
) -> Result<ToolCallResult, McpError>
where
    S: BoardStore<Error = StoreError>,
{
    tool_result(board.toggle_status(params.item_id, params.completed))
}
