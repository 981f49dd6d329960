//! Error types for MCP server operations.

use thiserror::Error;
use whiteboard_ops::OpsError;

/// MCP server error types
///
/// Anything that reaches the client as a JSON-RPC error. Tool-level
/// validation problems are tool results with `isError`, not `McpError`s.
#[derive(Error, Debug)]
pub enum McpError {
    /// Malformed JSON on the wire
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Missing or ill-typed parameters
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// Unknown JSON-RPC method
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Unknown tool name
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Unknown resource URI
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The board could not be loaded or saved
    #[error("Whiteboard storage error: {0}")]
    Store(String),

    /// The blocking worker running a request failed
    #[error("Internal error: {0}")]
    Internal(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::Parse(_) => -32700,
            McpError::InvalidParams(_) => -32602,
            McpError::MethodNotFound(_) => -32601,
            McpError::ToolNotFound(_) => -32602,
            McpError::ResourceNotFound(_) => -32002,
            McpError::Store(_) => -32000,
            McpError::Internal(_) | McpError::Json(_) | McpError::Io(_) => -32603,
        }
    }
}

impl From<OpsError> for McpError {
    fn from(err: OpsError) -> Self {
        match err {
            OpsError::Store(store) => McpError::Store(store.to_string()),
            board @ OpsError::Board(_) => McpError::Store(board.to_string()),
            other => McpError::InvalidParams(other.to_string()),
        }
    }
}
