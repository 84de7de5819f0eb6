//! MCP Server Entry Point
//!
//! Loads configuration, initializes logging and serves the Harmonica tools
//! over stdio.

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use harmonica_mcp_server::core::{Config, Error, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment; nothing is served without an API key
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Generate one at https://app.harmonica.chat (Profile → API Keys)");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.logging.level);

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    info!(
        "Starting {} v{} against {}",
        config.server.name, config.server.version, config.api.base_url
    );

    let server = McpServer::new(config)?;

    info!("Server initialized with {} tools", server.tool_names().len());

    if let Err(e) = StdioTransport::run(server).await.map_err(Error::from) {
        error!("Fatal error: {}", e);
        return Err(e.into());
    }

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
