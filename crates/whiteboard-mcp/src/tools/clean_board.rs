//! clean_board tool - Archive every completed item

use crate::error::McpError;
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::tools::tool_result;
use serde_json::json;
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "clean_board".to_string(),
        description: "The Janitor. Moves all completed items to the Archive section to clear \
                      visual space and free slots for new items."
            .to_string(),
        input_schema: json!({"type": "object", "properties": {}}),
    }
}

/// Handle clean_board tool invocation
pub fn handle_clean_board<S>(board: &Whiteboard<S>) -> Result<ToolCallResult, McpError>
where
    S: BoardStore<Error = StoreError>,
{
    tool_result(board.clean_board())
}
