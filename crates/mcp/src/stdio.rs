use crate::McpServer;
use heroscope_api::IconService;
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing::info;

/// Serve the icon tools over stdin/stdout until the client disconnects.
pub async fn run_stdio_server(
    service: Arc<dyn IconService>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting MCP server on stdio");
    let running = McpServer::new(service).serve(stdio()).await?;
    running.waiting().await?;
    info!("MCP client disconnected");
    Ok(())
}
