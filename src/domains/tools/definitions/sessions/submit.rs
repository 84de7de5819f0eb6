//! Submit response tool definition.
//!
//! Posts a message into a session on behalf of the API key's account.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::sessions::{HarmonicaClient, SubmittedResponse};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    ValidateParams, api_error_result, parse_params, require_non_empty, success_result,
};

/// Parameters for the submit response tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitResponseParams {
    /// Session ID (UUID).
    #[schemars(description = "Session ID (UUID)")]
    pub session_id: String,

    /// Text of the response.
    #[schemars(description = "Response text to submit")]
    pub content: String,
}

impl ValidateParams for SubmitResponseParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("session_id", &self.session_id)?;
        require_non_empty("content", &self.content)
    }
}

/// Submit response tool.
pub struct SubmitResponseTool;

impl SubmitResponseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "submit_response";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Submit a response message to a Harmonica session";

    #[instrument(skip_all, fields(session_id = %params.session_id))]
    pub async fn execute(
        params: &SubmitResponseParams,
        client: &HarmonicaClient,
    ) -> CallToolResult {
        info!("Submit response tool called");

        match client
            .submit_response(&params.session_id, &params.content)
            .await
        {
            Ok(response) => success_result(render(&params.session_id, &response)),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SubmitResponseParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given client.
    pub fn create_route<S>(client: Arc<HarmonicaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let client = client.clone();
            async move {
                let params: SubmitResponseParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

fn render(session_id: &str, response: &SubmittedResponse) -> String {
    format!(
        "Response submitted to session {}.\nResponse ID: {}\nSubmitted: {}",
        session_id, response.id, response.created_at
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_required() {
        let args = serde_json::json!({"session_id": "s-1", "content": " "});
        assert!(parse_params::<SubmitResponseParams>(args.as_object().cloned()).is_err());
    }

    #[test]
    fn test_render() {
        let response = SubmittedResponse {
            id: "m-7".to_string(),
            session_id: "s-1".to_string(),
            content: "More benches".to_string(),
            created_at: "2026-03-03T09:30:00Z".to_string(),
        };
        assert_eq!(
            render("s-1", &response),
            "Response submitted to session s-1.\nResponse ID: m-7\nSubmitted: 2026-03-03T09:30:00Z"
        );
    }
}
