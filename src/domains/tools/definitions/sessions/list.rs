//! List sessions tool definition.
//!
//! Lists the deliberation sessions visible to the API key, optionally
//! filtered by status or keywords.

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
    ValidateParams, api_error_result, format_session_line, non_blank, parse_params,
    success_result,
};

/// Largest page size accepted by the backend.
pub const MAX_LIMIT: u32 = 100;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list sessions tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListSessionsParams {
    /// Filter by status.
    #[schemars(description = "Filter by status")]
    #[serde(default)]
    pub status: Option<SessionStatus>,

    /// Search by topic or goal.
    #[schemars(description = "Search by topic or goal")]
    #[serde(default)]
    pub query: Option<String>,

    /// Results per page (1-100).
    #[schemars(description = "Results per page (default 20)", range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u32>,

    /// Number of sessions to skip.
    #[schemars(description = "Number of sessions to skip (for paging)")]
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ValidateParams for ListSessionsParams {
    fn validate(&self) -> Result<(), ToolError> {
        match self.limit {
            Some(limit) if !(1..=MAX_LIMIT).contains(&limit) => Err(ToolError::invalid_arguments(
                format!("'limit' must be between 1 and {}, got {}", MAX_LIMIT, limit),
            )),
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List sessions tool.
pub struct ListSessionsTool;

impl ListSessionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_sessions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List Harmonica deliberation sessions you have access to";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(params: &ListSessionsParams, client: &HarmonicaClient) -> CallToolResult {
        info!("List sessions tool called");

        let query = ListSessionsQuery {
            status: params.status,
            q: non_blank(params.query.as_deref()),
            limit: params.limit,
            offset: params.offset,
        };

        match client.list_sessions(&query).await {
            Ok(list) => success_result(render(&list)),
            Err(e) => api_error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListSessionsParams>(),
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
                let params: ListSessionsParams = parse_params(args).map_err(McpError::from)?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

/// Render a page of sessions, one line each.
fn render(list: &SessionList) -> String {
    if list.data.is_empty() {
        return "No sessions found.".to_string();
    }

    let lines: Vec<String> = list.data.iter().map(format_session_line).collect();
    format!(
        "{} sessions found:\n\n{}",
        list.pagination.total,
        lines.join("\n")
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::sessions::{Pagination, Session};

    fn session(id: &str, topic: &str, status: &str, participants: u64) -> Session {
        Session {
            id: id.to_string(),
            topic: topic.to_string(),
            status: status.to_string(),
            participant_count: participants,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_empty() {
        let list = SessionList {
            data: vec![],
            pagination: Pagination {
                total: 12,
                limit: 20,
                offset: 40,
            },
        };
        assert_eq!(render(&list), "No sessions found.");
    }

    #[test]
    fn test_render_uses_backend_total() {
        let list = SessionList {
            data: vec![
                session("a1", "Park redesign", "active", 3),
                session("b2", "Team offsite", "completed", 8),
            ],
            pagination: Pagination {
                total: 57,
                limit: 2,
                offset: 0,
            },
        };
        assert_eq!(
            render(&list),
            "57 sessions found:\n\n\
             [active] Park redesign (3 participants) — a1\n\
             [completed] Team offsite (8 participants) — b2"
        );
    }

    #[test]
    fn test_limit_bounds() {
        let mut params = ListSessionsParams::default();
        assert!(params.validate().is_ok());
        params.limit = Some(1);
        assert!(params.validate().is_ok());
        params.limit = Some(100);
        assert!(params.validate().is_ok());
        params.limit = Some(0);
        assert!(params.validate().is_err());
        params.limit = Some(101);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let args = serde_json::json!({"status": "archived"});
        let result = parse_params::<ListSessionsParams>(args.as_object().cloned());
        assert!(result.is_err());
    }

    #[test]
    fn test_params_deserialization() {
        let args = serde_json::json!({"status": "active", "query": "parks", "limit": 5});
        let params: ListSessionsParams = parse_params(args.as_object().cloned()).unwrap();
        assert_eq!(params.status, Some(SessionStatus::Active));
        assert_eq!(params.query.as_deref(), Some("parks"));
        assert_eq!(params.limit, Some(5));
    }
}
