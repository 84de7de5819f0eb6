//! Get session tool definition.
//!
//! Renders one session as a short card.

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

use crate::domains::sessions::{HarmonicaClient, Session};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    ValidateParams, api_error_result, parse_params, require_non_empty, success_result,
};

/// Parameters shared by every tool that addresses a single session.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SessionIdParams {
    /// Session ID (UUID).
    #[schemars(description = "Session ID (UUID)")]
    pub session_id: String,
}

impl ValidateParams for SessionIdParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("session_id", &self.session_id)
    }
}

/// Get session tool.
pub struct GetSessionTool;

impl GetSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific Harmonica session";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(session_id = %params.session_id))]
    pub async fn execute(params: &SessionIdParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Get session tool called");

        match client.get_session(&params.session_id).await {
            Ok(session) => success_result(render(&session)),
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

/// Render a session card. Null or empty optional fields produce no line at all.
fn render(session: &Session) -> String {
    let present = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

    let mut lines = vec![
        format!("**{}**", session.topic),
        format!(
            "Status: {} | Participants: {}",
            session.status, session.participant_count
        ),
        format!("Goal: {}", session.goal),
    ];

    if let Some(critical) = present(&session.critical) {
        lines.push(format!("Critical: {}", critical));
    }
    if let Some(context) = present(&session.context) {
        lines.push(format!("Context: {}", context));
    }
    if let Some(summary) = present(&session.summary) {
        lines.push(format!("\nSummary:\n{}", summary));
    }
    lines.push(format!("\nCreated: {}", session.created_at));

    lines.join("\n")
}
