//! Harmonica MCP Server Library
//!
//! Exposes the Harmonica deliberation API (sessions, responses, summaries)
//! as Model Context Protocol tools served over stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transport
//! - **domains**: business logic organized by bounded contexts
//!   - **sessions**: typed HTTP client for the Harmonica REST API
//!   - **tools**: MCP tools, one per client capability
//!
//! # Example
//!
//! ```rust,no_run
//! use harmonica_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::sessions::{ApiError, HarmonicaClient};
