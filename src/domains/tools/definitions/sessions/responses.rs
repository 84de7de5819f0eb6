//! Get responses tool definition.
//!
//! Returns every participant's thread as structured JSON, including both
//! participant input and AI facilitation messages.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::get::SessionIdParams;
use crate::domains::sessions::{HarmonicaClient, Message, ParticipantResponses};
use crate::domains::tools::definitions::common::{
    api_error_result, parse_params, structured_result, success_result,
};

/// Structured output of the get responses tool.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponses {
    pub session_id: String,
    pub participant_count: usize,
    pub participants: Vec<ParticipantThread>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantThread {
    pub participant_id: String,
    pub participant_name: String,
    pub active: bool,
    pub message_count: usize,
    pub messages: Vec<Message>,
}

impl From<ParticipantResponses> for ParticipantThread {
    fn from(p: ParticipantResponses) -> Self {
        Self {
            participant_name: p.display_name().to_string(),
            participant_id: p.participant_id,
            active: p.active,
            message_count: p.messages.len(),
            messages: p.messages,
        }
    }
}

/// Get responses tool.
pub struct GetResponsesTool;

impl GetResponsesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_responses";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get participant responses for a Harmonica session. Returns structured data per participant: id, name, active flag, message count and the full conversation (participant and AI facilitator messages).";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(session_id = %params.session_id))]
    pub async fn execute(params: &SessionIdParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Get responses tool called");

        match client.get_session_responses(&params.session_id).await {
            Ok(participants) if participants.is_empty() => success_result("No responses yet."),
            Ok(participants) => structured_result(&build(&params.session_id, participants)),
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

fn build(session_id: &str, participants: Vec<ParticipantResponses>) -> SessionResponses {
    let participants: Vec<ParticipantThread> =
        participants.into_iter().map(ParticipantThread::from).collect();
    SessionResponses {
        session_id: session_id.to_string(),
        participant_count: participants.len(),
        participants,
    }
}
