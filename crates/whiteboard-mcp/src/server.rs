//! MCP server implementation

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};
use whiteboard_domain::BoardStore;
use whiteboard_ops::Whiteboard;
use whiteboard_store::StoreError;

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// URI of the live board resource
pub const BOARD_URI: &str = "whiteboard://main";

/// MCP Server
///
/// Handles Model Context Protocol requests via stdio transport. Board
/// operations block on the store lock, so each request runs on tokio's
/// blocking pool; requests are still answered one at a time, in order.
pub struct McpServer<S> {
    board: Arc<Whiteboard<S>>,
}

impl<S> Clone for McpServer<S> {
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
        }
    }
}

impl<S> McpServer<S>
where
    S: BoardStore<Error = StoreError>,
{
    /// Create a server over a board
    pub fn new(board: Whiteboard<S>) -> Self {
        Self {
            board: Arc::new(board),
        }
    }

    /// The board this server operates on
    pub fn board(&self) -> &Whiteboard<S> {
        &self.board
    }

    /// Handle one line of input
    ///
    /// Returns the response to write, or `None` for notifications.
    pub fn handle_message(&self, line: &str) -> Option<Value> {
        let raw: Value = match serde_json::from_str(line) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to parse message: {}", e);
                return Some(error_response(None, &McpError::Parse(e)));
            }
        };

        let id = raw.get("id").cloned().filter(|id| !id.is_null());
        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!("Invalid request: {}", e);
                return Some(envelope(&JsonRpcError::new(
                    id,
                    -32600,
                    format!("Invalid request: {}", e),
                )));
            }
        };

        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        let id = request.id.clone();
        match self.dispatch(&request.method, request.params) {
            Ok(result) => Some(envelope(&JsonRpcResponse::new(id, result))),
            Err(e) => {
                match &e {
                    McpError::Store(_) | McpError::Internal(_) | McpError::Json(_) => {
                        error!("{} failed: {}", request.method, e)
                    }
                    _ => debug!("{} rejected: {}", request.method, e),
                }
                Some(error_response(id, &e))
            }
        }
    }

    fn dispatch(&self, method: &str, params: Value) -> Result<Value, McpError> {
        match method {
            "initialize" => to_value(self.handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => to_value(ToolListResponse {
                tools: tools::definitions(),
            }),
            "tools/call" => self.handle_tool_call(params),
            "resources/list" => to_value(resource_list()),
            "resources/read" => self.handle_resource_read(params),
            _ => Err(McpError::MethodNotFound(method.to_string())),
        }
    }

    fn handle_initialize(&self) -> InitializeResponse {
        info!("Client initialized");
        InitializeResponse {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: "whiteboard-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ListChanged { list_changed: false },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
            },
        }
    }

    /// Handle tools/call request
    fn handle_tool_call(&self, params: Value) -> Result<Value, McpError> {
        let tool_name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| McpError::InvalidParams("Missing tool name".to_string()))?;

        let arguments = match params.get("arguments") {
            Some(Value::Null) | None => json!({}),
            Some(args) => args.clone(),
        };

        debug!("Calling tool {}", tool_name);
        let result = match tool_name {
            "add_item" => tools::handle_add_item(&self.board, parse_arguments(arguments)?),
            "toggle_status" => tools::handle_toggle_status(&self.board, parse_arguments(arguments)?),
            "clean_board" => tools::handle_clean_board(&self.board),
            "render_view" => tools::handle_render_view(&self.board),
            other => return Err(McpError::ToolNotFound(other.to_string())),
        }?;

        to_value(result)
    }

    /// Handle resources/read request
    fn handle_resource_read(&self, params: Value) -> Result<Value, McpError> {
        let uri = params
            .get("uri")
            .and_then(Value::as_str)
            .ok_or_else(|| McpError::InvalidParams("Missing resource uri".to_string()))?;

        if uri != BOARD_URI {
            return Err(McpError::ResourceNotFound(uri.to_string()));
        }

        let text = self.board.render_view()?;
        to_value(ResourceReadResponse {
            contents: vec![ResourceContents {
                uri: BOARD_URI.to_string(),
                mime_type: "text/markdown".to_string(),
                text,
            }],
        })
    }
}

impl<S> McpServer<S>
where
    S: BoardStore<Error = StoreError> + Send + Sync + 'static,
{
    /// Run the MCP server (stdio transport)
    ///
    /// Reads JSON-RPC messages from stdin and writes responses to stdout
    /// until stdin closes.
    pub async fn run(&self) -> Result<(), McpError> {
        info!("MCP server started");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await?;
        info!("MCP server stopped");
        Ok(())
    }

    /// Serve newline-delimited JSON-RPC over any reader/writer pair
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            debug!("Received message: {}", line);

            let server = self.clone();
            let response = tokio::task::spawn_blocking(move || server.handle_message(&line))
                .await
                .map_err(|e| McpError::Internal(format!("Task join error: {}", e)))?;

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        Ok(())
    }
}

/// Write response as one line
async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &Value) -> Result<(), McpError> {
    let response_str = serde_json::to_string(response)?;
    writer.write_all(response_str.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    debug!("Sent response: {}", response_str);
    Ok(())
}

fn resource_list() -> ResourceListResponse {
    ResourceListResponse {
        resources: vec![ResourceDefinition {
            uri: BOARD_URI.to_string(),
            name: "Whiteboard".to_string(),
            description: "The live whiteboard, excluding the Archive".to_string(),
            mime_type: "text/markdown".to_string(),
        }],
    }
}

fn parse_arguments<T: DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn to_value<T: Serialize>(value: T) -> Result<Value, McpError> {
    Ok(serde_json::to_value(value)?)
}

fn error_response(id: Option<Value>, err: &McpError) -> Value {
    envelope(&JsonRpcError::new(id, err.error_code(), err.to_string()))
}

fn envelope<T: Serialize>(message: &T) -> Value {
    serde_json::to_value(message).unwrap_or_else(|e| {
        error!("Failed to encode response: {}", e);
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32603, "message": "Internal error"}
        })
    })
}
