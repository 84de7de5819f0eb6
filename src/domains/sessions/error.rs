//! API client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Harmonica API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the Harmonica API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    ///
    /// `message` is the backend's `error.message` when present, otherwise
    /// `HTTP <status>`.
    #[error("Harmonica API error: {message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not valid JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("Failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The configured base URL cannot be used to build endpoint URLs.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build an API error from a status and the raw response body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = extract_error_message(body)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Self::Api { status, message }
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// The message shown to tool callers.
    ///
    /// Backend rejections surface their extracted message unchanged; every
    /// other kind uses the full error display.
    pub fn caller_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a backend rejection, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// Pull `error.message` out of a JSON error body.
fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
