use heroscope_api::{IconService, RetrievedIcon, Style};
use heroscope_core::features::{format_list_text, format_search_text};
use rmcp::{
    ErrorData as McpError,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, InitializeResult, ServerCapabilities},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

pub mod stdio;

pub use stdio::run_stdio_server;

#[derive(Clone)]
pub struct McpServer {
    pub(crate) tool_router: ToolRouter<Self>,
    pub(crate) service: Arc<dyn IconService>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListIconsArgs {
    /// Filter icon variants by style
    pub style: Option<Style>,
}

#[derive(Deserialize, JsonSchema)]
pub struct SearchIconsArgs {
    /// Search query
    pub query: String,
    /// Filter icon variants by style
    pub style: Option<Style>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RetrieveIconArgs {
    /// Icon name
    pub name: String,
    /// Icon style
    pub style: Style,
}

fn internal_error(message: String) -> McpError {
    McpError::new(rmcp::model::ErrorCode(-32000), message, None)
}

/// Tool-level failure: reported to the client with `isError` set, the
/// connection stays up.
fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

#[tool_router]
impl McpServer {
    pub fn new(service: Arc<dyn IconService>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service,
        }
    }

    /// Run an engine call on the blocking pool; the engine may hit the disk.
    pub(crate) async fn execute<T, F>(&self, op: F) -> Result<heroscope_api::Result<T>, McpError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn IconService) -> heroscope_api::Result<T> + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        tokio::task::spawn_blocking(move || op(service.as_ref()))
            .await
            .map_err(|e| internal_error(e.to_string()))
    }

    /// Text rendering plus the full result as structured content.
    pub(crate) fn respond<T: Serialize>(
        tool: &str,
        outcome: heroscope_api::Result<T>,
        render: impl FnOnce(&T) -> String,
    ) -> Result<CallToolResult, McpError> {
        let value = match outcome {
            Ok(value) => value,
            Err(e) => {
                warn!("{} failed: {}", tool, e);
                return Ok(tool_error(e.to_string()));
            }
        };

        let structured =
            serde_json::to_value(&value).map_err(|e| internal_error(e.to_string()))?;
        let mut result = CallToolResult::success(vec![Content::text(render(&value))]);
        result.structured_content = Some(structured);
        Ok(result)
    }

    #[tool(
        description = "Lists all available Heroicons, optionally filtered by style (outline, solid, mini, micro)."
    )]
    pub async fn list_icons(
        &self,
        params: Parameters<ListIconsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let style = params.0.style;
        let outcome = self
            .execute(move |service| service.list_icons(style))
            .await?;
        Self::respond("list_icons", outcome, format_list_text)
    }

    #[tool(description = "Searches for Heroicons by name or keywords across all styles.")]
    pub async fn search_icons(
        &self,
        params: Parameters<SearchIconsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let SearchIconsArgs { query, style } = params.0;
        let query = query.trim().to_string();
        if query.is_empty() {
            return Ok(tool_error("Search query must not be empty."));
        }

        let outcome = self
            .execute(move |service| service.search_icons(&query, style))
            .await?;
        Self::respond("search_icons", outcome, format_search_text)
    }

    #[tool(description = "Retrieves the source of the icon in SVG format.")]
    pub async fn retrieve_icon(
        &self,
        params: Parameters<RetrieveIconArgs>,
    ) -> Result<CallToolResult, McpError> {
        let RetrieveIconArgs { name, style } = params.0;
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(tool_error("Icon name must not be empty."));
        }

        let outcome = self
            .execute(move |service| service.retrieve_icon(&name, Some(style)))
            .await?;
        Self::respond("retrieve_icon", outcome, |icon: &RetrievedIcon| {
            icon.svg.clone()
        })
    }
}

#[tool_handler]
impl rmcp::ServerHandler for McpServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: rmcp::model::ProtocolVersion::V_2024_11_05,
            server_info: Implementation {
                name: "heroscope".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
