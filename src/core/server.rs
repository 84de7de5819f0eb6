//! MCP Server implementation and lifecycle management.
//!
//! This module contains the server handler that answers MCP requests by
//! routing tool calls to the definitions in `domains/tools/definitions/`.
//! Adding a tool only touches `domains/tools`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error;
use crate::domains::{sessions::HarmonicaClient, tools::build_tool_router};

/// The main MCP server handler.
///
/// Holds only immutable shared state, so concurrent tool calls need no
/// coordination.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client shared by every tool.
    client: Arc<HarmonicaClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, building the API client from the configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = HarmonicaClient::new(&config.api)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing client.
    pub fn with_client(config: Config, client: HarmonicaClient) -> Self {
        let client = Arc::new(client);
        Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            config: Arc::new(config),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the API client.
    pub fn client(&self) -> &Arc<HarmonicaClient> {
        &self.client
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Tools for Harmonica deliberation sessions: list, search and inspect sessions, \
                 read participant responses and AI summaries, and create new sessions."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
