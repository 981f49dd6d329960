//! MCP protocol types (JSON-RPC 2.0)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP protocol revision spoken by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request or notification
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    #[serde(default)]
    pub jsonrpc: String,
    /// Request ID; absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    /// Notifications carry no id and get no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC response (success)
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Result data
    pub result: Value,
}

/// JSON-RPC error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a new success response
    pub fn new(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcError {
    /// Create a new error response
    pub fn new(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            error: ErrorDetail { code, message },
        }
    }
}

/// MCP tool list response
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Available tools
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// One block of tool output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain or markdown text
    Text {
        /// The text
        text: String,
    },
}

/// Result of `tools/call`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallResult {
    /// Output blocks
    pub content: Vec<Content>,
    /// Set when the tool rejected its input
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Successful (or benign negative) result
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Rejected input
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
            is_error: true,
        }
    }
}

/// Resource definition
#[derive(Debug, Serialize)]
pub struct ResourceDefinition {
    /// Resource URI
    pub uri: String,
    /// Human-readable name
    pub name: String,
    /// What the resource holds
    pub description: String,
    /// Content type
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// MCP resource list response
#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    /// Available resources
    pub resources: Vec<ResourceDefinition>,
}

/// Contents of one resource
#[derive(Debug, Serialize)]
pub struct ResourceContents {
    /// Resource URI
    pub uri: String,
    /// Content type
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Body
    pub text: String,
}

/// MCP resource read response
#[derive(Debug, Serialize)]
pub struct ResourceReadResponse {
    /// Resource bodies
    pub contents: Vec<ResourceContents>,
}

/// MCP server info
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Initialize response
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// Protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server info
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Capabilities
    pub capabilities: Capabilities,
}

/// Server capabilities
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tools capability
    pub tools: ListChanged,
    /// Resources capability
    pub resources: ResourcesCapability,
}

/// Capability that may announce list changes
#[derive(Debug, Serialize)]
pub struct ListChanged {
    /// Whether the list can change at runtime
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

/// Resources capability
#[derive(Debug, Serialize)]
pub struct ResourcesCapability {
    /// Whether clients may subscribe to updates
    pub subscribe: bool,
    /// Whether the list can change at runtime
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}
