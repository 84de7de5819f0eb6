//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only binds
//! them to the shared client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::sessions::HarmonicaClient;

use super::definitions::{
    CreateSessionTool, GetAccountTool, GetQuestionsTool, GetResponsesTool, GetSessionTool,
    GetSummaryTool, ListSessionsTool, SearchSessionsTool, SubmitResponseTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<HarmonicaClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListSessionsTool::create_route(client.clone()))
        .with_route(GetSessionTool::create_route(client.clone()))
        .with_route(GetResponsesTool::create_route(client.clone()))
        .with_route(GetSummaryTool::create_route(client.clone()))
        .with_route(SearchSessionsTool::create_route(client.clone()))
        .with_route(CreateSessionTool::create_route(client.clone()))
        .with_route(GetQuestionsTool::create_route(client.clone()))
        .with_route(SubmitResponseTool::create_route(client.clone()))
        .with_route(GetAccountTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ApiConfig;

    struct TestServer {}

    fn test_client() -> Arc<HarmonicaClient> {
        Arc::new(HarmonicaClient::new(&ApiConfig::new("http://localhost:9", "test-key")).unwrap())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_client());
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        for expected in [
            "list_sessions",
            "get_session",
            "get_responses",
            "get_summary",
            "search_sessions",
            "create_session",
            "get_questions",
            "submit_response",
            "get_account",
        ] {
            assert!(names.contains(&expected), "missing tool {}", expected);
        }
    }

    #[test]
    fn test_list_sessions_schema_declares_limit_bounds() {
        let schema = ListSessionsTool::to_tool().input_schema;
        let limit = serde_json::to_string(&schema["properties"]["limit"]).unwrap();
        assert!(limit.contains("\"minimum\":1"), "{}", limit);
        assert!(limit.contains("\"maximum\":100"), "{}", limit);
    }

    #[test]
    fn test_session_id_is_required_in_schema() {
        let schema = GetSessionTool::to_tool().input_schema;
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "session_id"));
    }
}
