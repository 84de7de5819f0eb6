//! Search sessions tool definition.
//!
//! Keyword search over session topics and goals.

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

use crate::domains::sessions::{HarmonicaClient, ListSessionsQuery, SessionList, SessionStatus};
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::{
    ValidateParams, api_error_result, format_session_line, parse_params, require_non_empty,
    success_result,
};

/// Page size used for search results.
const SEARCH_LIMIT: u32 = 20;

/// Parameters for the search sessions tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchSessionsParams {
    /// Keywords matched against topic and goal.
    #[schemars(description = "Search keywords")]
    pub query: String,

    /// Filter by status.
    #[schemars(description = "Filter by status")]
    #[serde(default)]
    pub status: Option<SessionStatus>,
}

impl ValidateParams for SearchSessionsParams {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("query", &self.query)
    }
}

/// Search sessions tool.
pub struct SearchSessionsTool;

impl SearchSessionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_sessions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search Harmonica sessions by topic or goal keywords";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(
        params: &SearchSessionsParams,
        client: &HarmonicaClient,
    ) -> CallToolResult {
        info!("Search sessions tool called for: {}", params.query);

        let query = ListSessionsQuery {
            status: params.status,
            q: Some(params.query.clone()),
            limit: Some(SEARCH_LIMIT),
            offset: None,
        };

        match client.list_sessions(&query).await {
            Ok(list) => success_result(render(&params.query, &list)),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchSessionsParams>(),
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
                let params: SearchSessionsParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

fn render(query: &str, list: &SessionList) -> String {
    if list.data.is_empty() {
        return format!("No sessions match \"{}\".", query);
    }

    let lines: Vec<String> = list.data.iter().map(format_session_line).collect();
    format!(
        "Found {} sessions matching \"{}\":\n\n{}",
        list.pagination.total,
        query,
        lines.join("\n")
    )
}
