//! Whiteboard MCP Server - Main entry point

use tracing_subscriber::EnvFilter;
use whiteboard_mcp::McpServer;
use whiteboard_ops::{Whiteboard, WhiteboardConfig};

#[tokio::main]
async fn main() {
    // Log to stderr; stdout carries protocol frames only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match WhiteboardConfig::resolve(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load whiteboard config: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Using board at {}", config.data_file.display());

    let server = McpServer::new(Whiteboard::open(&config));

    // Run server (returns when stdin closes)
    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {}", e);
        std::process::exit(1);
    }
}
