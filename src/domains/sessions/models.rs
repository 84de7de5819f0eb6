//! Request and response shapes for the Harmonica API.
//!
//! Response structs are decoded leniently: a field the backend leaves out
//! takes its default value instead of failing the whole call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lifecycle state used to filter session listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// The account that owns the API key (`GET /me`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub subscription_status: String,
}

/// A deliberation session as returned by list and get.
///
/// `critical`, `context` and `summary` are only populated by `GET /sessions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub topic: String,
    pub goal: String,
    pub critical: Option<String>,
    pub context: Option<String>,
    pub status: String,
    pub summary: Option<String>,
    pub participant_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Pagination block attached to listings. Totals come from the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// One page of sessions (`GET /sessions`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionList {
    pub data: Vec<Session>,
    pub pagination: Pagination,
}

/// Filters for `GET /sessions`. Absent values are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListSessionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// A question asked to participants (`GET /sessions/{id}/questions`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub position: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct QuestionList {
    pub data: Vec<Question>,
}

/// One message in a participant thread.
///
/// `role` is passed through as the backend sends it: `user` for participant
/// input, `assistant` for AI facilitation, anything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub id: String,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

/// All messages of one participant (`GET /sessions/{id}/responses`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticipantResponses {
    pub participant_id: String,
    pub participant_name: Option<String>,
    pub active: bool,
    pub messages: Vec<Message>,
}

impl ParticipantResponses {
    /// Display name, falling back to "Anonymous" for unnamed participants.
    pub fn display_name(&self) -> &str {
        self.participant_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Anonymous")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ResponseList {
    pub data: Vec<ParticipantResponses>,
}

/// Body of `POST /sessions/{id}/responses`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SubmitResponseRequest<'a> {
    pub content: &'a str,
}

/// The message stored by `POST /sessions/{id}/responses`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmittedResponse {
    pub id: String,
    pub session_id: String,
    pub content: String,
    pub created_at: String,
}

/// Body of `POST /sessions`. Unset optionals are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSessionRequest {
    pub topic: String,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_pollination: Option<bool>,
}

/// A freshly created session, including its shareable join link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreatedSession {
    pub id: String,
    pub topic: String,
    pub goal: String,
    pub status: String,
    pub participant_count: u64,
    pub created_at: String,
    pub updated_at: String,
    pub join_url: String,
}

/// AI-generated summary (`GET /sessions/{id}/summary`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionSummary {
    pub session_id: String,
    pub summary: Option<String>,
    pub generated_at: Option<String>,
}
