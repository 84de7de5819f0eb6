//! Common utilities shared across Harmonica tools.
//!
//! Argument parsing, result construction and the session line format used
//! by both listing tools.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::domains::sessions::{ApiError, Session};
use crate::domains::tools::ToolError;

/// Checks on tool arguments that the JSON schema declares but serde cannot enforce.
pub trait ValidateParams {
    fn validate(&self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Deserialize and validate raw tool arguments.
///
/// Failures never reach a tool handler, so no API request is made.
pub fn parse_params<T>(arguments: Option<JsonObject>) -> Result<T, ToolError>
where
    T: DeserializeOwned + ValidateParams,
{
    let args = arguments.unwrap_or_default();
    let params: T = serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
    params.validate()?;
    Ok(params)
}

/// Reject empty or whitespace-only required strings.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Treat blank optional strings as absent.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a success result carrying `data` both as pretty JSON text and as
/// structured content.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_value(data) {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            let mut result = CallToolResult::success(vec![Content::text(text)]);
            result.structured_content = Some(value);
            result
        }
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Turn a client failure into a tool failure.
///
/// Backend rejections carry the backend's message unchanged.
pub fn api_error_result(err: &ApiError) -> CallToolResult {
    warn!("Harmonica API call failed: {}", err);
    CallToolResult::error(vec![Content::text(err.caller_message())])
}

/// One line of a session listing: `[status] topic (N participants) — id`.
pub fn format_session_line(session: &Session) -> String {
    format!(
        "[{}] {} ({} participants) — {}",
        session.status, session.topic, session.participant_count, session.id
    )
}

/// First text block of a result, if any.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        rmcp::model::RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}
