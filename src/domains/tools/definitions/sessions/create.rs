//! Create session tool definition.
//!
//! Creates a new deliberation session and hands back its join URL.

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

use crate::domains::sessions::{CreateSessionRequest, CreatedSession, HarmonicaClient};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    ValidateParams, api_error_result, non_blank, parse_params, require_non_empty,
    success_result,
};

/// Parameters for the create session tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateSessionParams {
    /// Session topic.
    #[schemars(description = "Session topic (what the deliberation is about)")]
    pub topic: String,

    /// Session goal.
    #[schemars(description = "What the session should achieve")]
    pub goal: String,

    /// Background shared with participants.
    #[schemars(description = "Background context for participants")]
    #[serde(default)]
    pub context: Option<String>,

    /// Key question or constraint.
    #[schemars(description = "Critical question or constraint the session must address")]
    #[serde(default)]
    pub critical: Option<String>,

    /// Custom facilitation prompt.
    #[schemars(description = "Custom facilitation prompt for the AI facilitator")]
    #[serde(default)]
    pub prompt: Option<String>,

    /// Template to start from.
    #[schemars(description = "ID of a session template to start from")]
    #[serde(default)]
    pub template_id: Option<String>,

    /// Let participants see excerpts of each other's contributions.
    #[schemars(description = "Show participants excerpts of other participants' contributions")]
    #[serde(default)]
    pub cross_pollination: Option<bool>,
}

impl ValidateParams for CreateSessionParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("topic", &self.topic)?;
        require_non_empty("goal", &self.goal)
    }
}

impl From<&CreateSessionParams> for CreateSessionRequest {
    fn from(params: &CreateSessionParams) -> Self {
        Self {
            topic: params.topic.clone(),
            goal: params.goal.clone(),
            context: non_blank(params.context.as_deref()),
            critical: non_blank(params.critical.as_deref()),
            prompt: non_blank(params.prompt.as_deref()),
            template_id: non_blank(params.template_id.as_deref()),
            cross_pollination: params.cross_pollination,
        }
    }
}

/// Create session tool.
pub struct CreateSessionTool;

impl CreateSessionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_session";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new Harmonica deliberation session. Returns the session ID and a join URL to share with participants.";

    #[instrument(skip_all, fields(topic = %params.topic))]
    pub async fn execute(params: &CreateSessionParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Create session tool called");

        match client.create_session(&CreateSessionRequest::from(params)).await {
            Ok(session) => {
                info!("Created session {}", session.id);
                success_result(render(&session))
            }
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateSessionParams>(),
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
                let params: CreateSessionParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Confirmation card. Values are shown exactly as the backend returned them.
fn render(session: &CreatedSession) -> String {
    format!(
        "Session created successfully!\n\n\
         **{}**\n\
         ID: {}\n\
         Status: {}\n\
         Join URL: {}\n\n\
         Share the join URL with participants so they can take part.",
        session.topic, session.id, session.status, session.join_url
    )
}
