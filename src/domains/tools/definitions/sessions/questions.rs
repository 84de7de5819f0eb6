//! Get questions tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::get::SessionIdParams;
use crate::domains::sessions::{HarmonicaClient, Question};
use crate::domains::tools::definitions::common::{api_error_result, parse_params, success_result};

/// Get questions tool.
pub struct GetQuestionsTool;

impl GetQuestionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_questions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the questions participants are asked in a Harmonica session, in order";

    #[instrument(skip_all, fields(session_id = %params.session_id))]
    pub async fn execute(params: &SessionIdParams, client: &HarmonicaClient) -> CallToolResult {
        info!("Get questions tool called");

        match client.get_session_questions(&params.session_id).await {
            Ok(questions) => success_result(render(&questions)),
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

/// Numbered list; questions arrive already sorted by position.
fn render(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions defined for this session.".to_string();
    }

    let lines: Vec<String> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q.text))
        .collect();
    format!("{} questions:\n\n{}", questions.len(), lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_questions() {
        let questions = vec![
            Question {
                id: "q1".to_string(),
                text: "What works today?".to_string(),
                position: 0,
            },
            Question {
                id: "q2".to_string(),
                text: "What should change?".to_string(),
                position: 1,
            },
        ];
        assert_eq!(
            render(&questions),
            "2 questions:\n\n1. What works today?\n2. What should change?"
        );
    }

    #[test]
    fn test_render_no_questions() {
        assert_eq!(render(&[]), "No questions defined for this session.");
    }
}
