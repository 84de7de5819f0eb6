//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for startup and serving
//! failures, wrapping the domain and transport errors that can reach `main`.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the Harmonica API client.
    #[error(transparent)]
    Api(#[from] crate::domains::sessions::ApiError),

    /// Error raised while serving over a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;
    use crate::domains::sessions::ApiError;

    #[test]
    fn test_api_error_is_transparent() {
        let err: Error = ApiError::invalid_url("nope").into();
        assert_eq!(err.to_string(), "Invalid base URL: nope");
    }

    #[test]
    fn test_transport_error_is_prefixed() {
        let err: Error = TransportError::init("connection closed").into();
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: connection closed"
        );
    }
}
