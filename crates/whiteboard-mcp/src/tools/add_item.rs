//! add_item tool - Add an item to a section, subject to its capacity

use crate::error::McpError;
use crate::protocol::{ToolCallResult, ToolDefinition};
use crate::tools::tool_result;
use serde::Deserialize;
use serde_json::json;
use whiteboard_domain::{BoardStore, Priority, Section};
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

/// Parameters for adding an item
#[derive(Debug, Deserialize)]
pub struct AddItemParams {
    /// Section display name
    pub section: String,
    /// Item text
    pub content: String,
    /// High, Medium or Low (default Medium)
    #[serde(default)]
    pub priority: Option<String>,
}

pub(crate) fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "add_item".to_string(),
        description: "Add a new item to a section. Enforces limits: the add is denied when the \
                      section already holds its maximum number of active items. \
                      Priorities: High, Medium, Low."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "section": {"type": "string", "enum": Section::names(), "description": "Section to add to"},
                "content": {"type": "string", "description": "Item text"},
                "priority": {"type": "string", "enum": Priority::names(), "default": "Medium"}
            },
            "required": ["section", "content"]
        }),
    }
}

/// Handle add_item tool invocation
///
/// A capacity denial is a normal result; only storage failures are errors.
pub fn handle_add_item<S>(board: &Whiteboard<S>, params: AddItemParams) -> Result<ToolCallResult, McpError>
where
    S: BoardStore<Error = StoreError>,
{
    tool_result(board.add_item(&params.section, &params.content, params.priority.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_params_deserialize() {
        let json = r#"{"section": "Brain Dump", "content": "Buy milk", "priority": "Low"}"#;

        let params: AddItemParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.section, "Brain Dump");
        assert_eq!(params.content, "Buy milk");
        assert_eq!(params.priority.as_deref(), Some("Low"));
    }

    #[test]
    fn test_add_item_priority_optional() {
        let params: AddItemParams = serde_json::from_str(r#"{"section": "Archive", "content": "x"}"#).unwrap();
        assert_eq!(params.priority, None);
    }

    #[test]
    fn test_definition_lists_sections() {
        let definition = definition();
        let sections = &definition.input_schema["properties"]["section"]["enum"];
        assert_eq!(sections.as_array().map(Vec::len), Some(Section::COUNT));
    }
}
