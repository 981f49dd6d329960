//! Integration tests for MCP server
//!
//! These tests drive full JSON-RPC exchanges through the server against an
//! in-memory board, and one session over the async line transport.

use serde_json::{json, Value};
use whiteboard_gatekeeper::CapacityConfig;
use whiteboard_mcp::{McpServer, BOARD_URI, PROTOCOL_VERSION};
use whiteboard_ops::Whiteboard;
use whiteboard_store::MemoryStore;

fn server() -> McpServer<MemoryStore> {
    McpServer::new(Whiteboard::new(MemoryStore::new(), CapacityConfig::default()))
}

fn request(server: &McpServer<MemoryStore>, id: u64, method: &str, params: Value) -> Value {
    let message = json!({"jsonrpc": "2.0", "id": id, "method": method, "params": params});
    server
        .handle_message(&message.to_string())
        .expect("requests always get a response")
}

fn call_tool(server: &McpServer<MemoryStore>, name: &str, arguments: Value) -> Value {
    request(server, 1, "tools/call", json!({"name": name, "arguments": arguments}))
}

fn tool_text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_initialize() {
    let response = request(&server(), 1, "initialize", json!({}));

    assert_eq!(response["jsonrpc"], "2.0");
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(response["result"]["serverInfo"]["name"], "whiteboard-mcp");
    assert!(response["result"]["capabilities"]["tools"].is_object());
    assert!(response["result"]["capabilities"]["resources"].is_object());
}

#[test]
fn test_tools_list() {
    let response = request(&server(), 2, "tools/list", json!({}));
    let tools = response["result"]["tools"].as_array().unwrap();

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["render_view", "add_item", "toggle_status", "clean_board"]);

    let add = &tools[1];
    assert_eq!(add["inputSchema"]["properties"]["priority"]["default"], "Medium");
    assert_eq!(add["inputSchema"]["required"], json!(["section", "content"]));
}

#[test]
fn test_add_and_render() {
    let server = server();

    let added = call_tool(
        &server,
        "add_item",
        json!({"section": "Today's Tasks", "content": "Write report", "priority": "High"}),
    );
    assert_eq!(added["result"]["isError"], false);
    assert!(tool_text(&added).contains("(ID: 1)"));

    let view = call_tool(&server, "render_view", json!({}));
    let text = tool_text(&view);
    assert!(text.contains("### Today's Tasks (1/5)"));
    assert!(text.contains("🔥 **Write report** `[ID: 1]`"));
}

#[test]
fn test_capacity_denial_is_not_an_error() {
    let server = server();
    for n in 0..3 {
        call_tool(
            &server,
            "add_item",
            json!({"section": "Long-Term Goals", "content": format!("goal {n}")}),
        );
    }

    let denied = call_tool(
        &server,
        "add_item",
        json!({"section": "Long-Term Goals", "content": "one too many"}),
    );
    assert!(denied.get("error").is_none());
    assert_eq!(denied["result"]["isError"], false);
    let text = tool_text(&denied);
    assert!(text.starts_with("Denied"));
    assert!(text.contains("3/3"));
}

#[test]
fn test_validation_errors_are_tool_errors() {
    let server = server();

    let response = call_tool(&server, "add_item", json!({"section": "Inbox", "content": "x"}));
    assert_eq!(response["result"]["isError"], true);
    let text = tool_text(&response);
    assert!(text.contains("Inbox"));
    assert!(text.contains("Brain Dump"));

    let response = call_tool(
        &server,
        "add_item",
        json!({"section": "Brain Dump", "content": "x", "priority": "Urgent"}),
    );
    assert_eq!(response["result"]["isError"], true);
    assert!(tool_text(&response).contains("High, Medium, Low"));
}

#[test]
fn test_bad_arguments_are_invalid_params() {
    let server = server();

    let response = call_tool(&server, "add_item", json!({"section": "Brain Dump"}));
    assert_eq!(response["error"]["code"], -32602);

    let response = call_tool(&server, "toggle_status", json!({"item_id": "one", "completed": true}));
    assert_eq!(response["error"]["code"], -32602);

    let response = request(&server, 5, "tools/call", json!({"arguments": {}}));
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_toggle_and_clean() {
    let server = server();
    call_tool(&server, "add_item", json!({"section": "Brain Dump", "content": "Buy milk"}));

    let missing = call_tool(&server, "toggle_status", json!({"item_id": 99, "completed": true}));
    assert_eq!(missing["result"]["isError"], false);
    assert_eq!(tool_text(&missing), "Item 99 not found.");

    let toggled = call_tool(&server, "toggle_status", json!({"item_id": 1, "completed": true}));
    assert!(tool_text(&toggled).contains("completed"));

    let cleaned = call_tool(&server, "clean_board", json!({}));
    assert!(tool_text(&cleaned).contains("Moved 1 completed items"));

    let view = call_tool(&server, "render_view", json!({}));
    assert!(!tool_text(&view).contains("Buy milk"));
}

#[test]
fn test_reactivation_in_full_section_is_denied() {
    let server = server();
    for n in 0..5 {
        call_tool(
            &server,
            "add_item",
            json!({"section": "Today's Tasks", "content": format!("task {n}")}),
        );
    }
    call_tool(&server, "toggle_status", json!({"item_id": 1, "completed": true}));
    call_tool(&server, "add_item", json!({"section": "Today's Tasks", "content": "task 5"}));

    let denied = call_tool(&server, "toggle_status", json!({"item_id": 1, "completed": false}));
    assert!(denied.get("error").is_none());
    assert_eq!(denied["result"]["isError"], false);
    let text = tool_text(&denied);
    assert!(text.starts_with("Denied"));
    assert!(text.contains("5/5"));

    let view = call_tool(&server, "render_view", json!({}));
    assert!(tool_text(&view).contains("### Today's Tasks (5/5)"));
    assert!(!tool_text(&view).contains("over capacity"));
}

#[test]
fn test_resources() {
    let server = server();
    call_tool(&server, "add_item", json!({"section": "Healthy Habits", "content": "Walk"}));

    let list = request(&server, 1, "resources/list", json!({}));
    assert_eq!(list["result"]["resources"][0]["uri"], BOARD_URI);

    let read = request(&server, 2, "resources/read", json!({"uri": BOARD_URI}));
    let contents = &read["result"]["contents"][0];
    assert_eq!(contents["mimeType"], "text/markdown");
    assert!(contents["text"].as_str().unwrap().contains("Walk"));

    let unknown = request(&server, 3, "resources/read", json!({"uri": "whiteboard://archive"}));
    assert_eq!(unknown["error"]["code"], -32002);
}

#[test]
fn test_store_failure_is_jsonrpc_error() {
    let server = McpServer::new(Whiteboard::new(
        MemoryStore::with_text("{\"next_id\": \"one\"}"),
        CapacityConfig::default(),
    ));

    let response = call_tool(&server, "render_view", json!({}));
    assert_eq!(response["error"]["code"], -32000);
    assert!(response["error"]["message"].as_str().unwrap().contains("Corrupt board state"));

    let response = call_tool(&server, "add_item", json!({"section": "Brain Dump", "content": "x"}));
    assert_eq!(response["error"]["code"], -32000);
}

#[test]
fn test_unknown_method() {
    let response = request(&server(), 9, "prompts/list", json!({}));
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["id"], 9);
}

#[tokio::test]
async fn test_serve_over_line_transport() {
    let server = server();
    let input = [
        json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}).to_string(),
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
        String::new(),
        json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call",
               "params": {"name": "add_item", "arguments": {"section": "Project Ideas", "content": "Robot"}}})
        .to_string(),
        "garbage".to_string(),
    ]
    .join("\n");

    let mut output = Vec::new();
    server.serve(input.as_bytes(), &mut output).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3, "notification and blank line get no response");
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[1]["id"], 2);
    assert_eq!(lines[1]["result"]["isError"], false);
    assert_eq!(lines[2]["error"]["code"], -32700);
    assert_eq!(server.board().load().unwrap().len(), 1);
}
