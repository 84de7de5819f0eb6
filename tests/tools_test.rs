//! Tool-level tests: argument handling, one backend call per invocation and
//! the rendered text returned to the MCP host.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use harmonica_mcp_server::core::ApiConfig;
use harmonica_mcp_server::domains::sessions::{HarmonicaClient, SessionStatus};
use harmonica_mcp_server::domains::tools::definitions::common::result_text;
use harmonica_mcp_server::domains::tools::definitions::sessions::{
    CreateSessionParams, CreateSessionTool, GetResponsesTool, GetSessionTool, GetSummaryTool,
    ListSessionsParams, ListSessionsTool, SearchSessionsParams, SearchSessionsTool,
    SessionIdParams,
};

fn make_client(server: &MockServer) -> HarmonicaClient {
    HarmonicaClient::new(&ApiConfig::new(server.uri(), "hm_test_key")).expect("valid client")
}

fn session_id(id: &str) -> SessionIdParams {
    SessionIdParams {
        session_id: id.to_string(),
    }
}

#[tokio::test]
async fn test_list_sessions_empty_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": {"total": 0, "limit": 20, "offset": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = ListSessionsTool::execute(&ListSessionsParams::default(), &client).await;
    assert_eq!(result.is_error, Some(false));
    assert_eq!(result_text(&result), Some("No sessions found."));
}

#[tokio::test]
async fn test_list_sessions_renders_lines() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "s-1",
                "topic": "Library hours",
                "goal": "Agree on weekend hours",
                "status": "completed",
                "participant_count": 9,
                "created_at": "2026-01-01T00:00:00Z",
                "updated_at": "2026-01-02T00:00:00Z"
            }],
            "pagination": {"total": 14, "limit": 20, "offset": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let params = ListSessionsParams {
        status: Some(SessionStatus::Completed),
        ..Default::default()
    };
    let result = ListSessionsTool::execute(&params, &client).await;
    assert_eq!(
        result_text(&result),
        Some("14 sessions found:\n\n[completed] Library hours (9 participants) — s-1")
    );
}

#[tokio::test]
async fn test_search_sessions_no_match_mentions_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions"))
        .and(query_param("q", "climate"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": {"total": 0, "limit": 20, "offset": 0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let params = SearchSessionsParams {
        query: "climate".to_string(),
        status: None,
    };
    let result = SearchSessionsTool::execute(&params, &client).await;
    let text = result_text(&result).unwrap();
    assert!(text.contains("climate"));
}

#[tokio::test]
async fn test_get_session_omits_null_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "s-1",
            "topic": "Library hours",
            "goal": "Agree on weekend hours",
            "critical": null,
            "context": "Budget is flat",
            "status": "active",
            "summary": null,
            "participant_count": 2,
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-02T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetSessionTool::execute(&session_id("s-1"), &client).await;
    let text = result_text(&result).unwrap();
    assert!(text.starts_with("**Library hours**"));
    assert!(text.contains("Context: Budget is flat"));
    assert!(!text.contains("Critical"));
    assert!(!text.contains("Summary"));
    assert!(text.ends_with("Created: 2026-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_get_responses_structured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "participant_id": "p-1",
                    "participant_name": "Grace",
                    "active": true,
                    "messages": [
                        {"id": "m1", "role": "assistant", "content": "Welcome", "created_at": "t1"},
                        {"id": "m2", "role": "user", "content": "Open later", "created_at": "t2"}
                    ]
                },
                {
                    "participant_id": "p-2",
                    "participant_name": null,
                    "active": false,
                    "messages": []
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetResponsesTool::execute(&session_id("s-1"), &client).await;
    assert_eq!(result.is_error, Some(false));

    let data = result.structured_content.clone().expect("structured content");
    assert_eq!(data["session_id"], "s-1");
    assert_eq!(data["participant_count"], 2);
    assert_eq!(data["participants"][0]["participant_name"], "Grace");
    assert_eq!(data["participants"][0]["message_count"], 2);
    assert_eq!(data["participants"][0]["messages"][0]["role"], "assistant");
    assert_eq!(data["participants"][1]["participant_name"], "Anonymous");
    assert_eq!(data["participants"][1]["message_count"], 0);

    let text: serde_json::Value = serde_json::from_str(result_text(&result).unwrap()).unwrap();
    assert_eq!(text, data);
}

#[tokio::test]
async fn test_get_responses_empty_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetResponsesTool::execute(&session_id("s-1"), &client).await;
    assert_eq!(result_text(&result), Some("No responses yet."));
}

#[tokio::test]
async fn test_get_summary_placeholder_when_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "s-1",
            "summary": null,
            "generated_at": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetSummaryTool::execute(&session_id("s-1"), &client).await;
    assert_eq!(
        result_text(&result),
        Some("No summary available yet (session may still be active).")
    );
}

#[tokio::test]
async fn test_create_session_confirmation_echoes_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sessions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "new-42",
            "topic": "T",
            "goal": "G",
            "status": "draft",
            "participant_count": 0,
            "created_at": "2026-02-01T12:00:00Z",
            "updated_at": "2026-02-01T12:00:00Z",
            "join_url": "https://app.harmonica.chat/chat?s=new-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let params = CreateSessionParams {
        topic: "T".to_string(),
        goal: "G".to_string(),
        ..Default::default()
    };
    let result = CreateSessionTool::execute(&params, &client).await;
    let text = result_text(&result).unwrap();
    assert!(text.contains("T"));
    assert!(text.contains("new-42"));
    assert!(text.contains("draft"));
    assert!(text.contains("https://app.harmonica.chat/chat?s=new-42"));
}

#[tokio::test]
async fn test_backend_error_becomes_tool_failure_with_exact_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"error": {"message": "X"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetSessionTool::execute(&session_id("s-1"), &client).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(result_text(&result), Some("X"));
}

#[tokio::test]
async fn test_backend_error_without_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sessions/s-1/summary"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"ok": false})))
        .expect(1)
        .mount(&server)
        .await;

    let client = make_client(&server);
    let result = GetSummaryTool::execute(&session_id("s-1"), &client).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(result_text(&result), Some("HTTP 500"));
}
