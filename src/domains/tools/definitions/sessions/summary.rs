//! Get summary tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::get::SessionIdParams;
use crate::domains::sessions::{HarmonicaClient, SessionSummary};
use crate::domains::tools::definitions::common::{api_error_result, parse_params, success_result};

/// Shown when the backend has not generated a summary yet.
pub const NO_SUMMARY: &str = "No summary available yet (session may still be active).";

/// Get summary tool.
pub struct GetSummaryTool;

impl GetSummaryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_summary";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the AI-generated summary for a Harmonica session";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(session_id = %params.session_id))]
    pub async fn execute(params: &SessionIdParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Get summary tool called");

        match client.get_session_summary(&params.session_id).await {
            Ok(summary) => success_result(render(summary)),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SessionIdParams>(),
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
                let params: SessionIdParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

fn render(summary: SessionSummary) -> String {
    summary
        .summary
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_SUMMARY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_verbatim() {
        let summary = SessionSummary {
            session_id: "s".to_string(),
            summary: Some("## Themes\n- shade\n".to_string()),
            generated_at: Some("2026-03-02T00:00:00Z".to_string()),
        };
        assert_eq!(render(summary), "## Themes\n- shade\n");
    }

    #[test]
    fn test_missing_summary_placeholder() {
        assert_eq!(render(SessionSummary::default()), NO_SUMMARY);
    }
}
