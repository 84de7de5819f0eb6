//! HTTP client for the Harmonica REST API v1.

use reqwest::{Method, RequestBuilder, Url, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::models::{
    Account, CreateSessionRequest, CreatedSession, ListSessionsQuery, ParticipantResponses,
    Question, QuestionList, ResponseList, Session, SessionList, SessionSummary,
    SubmitResponseRequest, SubmittedResponse,
};
use crate::core::config::ApiConfig;

/// Path prefix shared by every endpoint.
const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Typed client for the Harmonica API.
///
/// The base URL, API key and timeout are fixed at construction. The client
/// keeps no other state, so one instance can serve concurrent tool calls.
#[derive(Clone)]
pub struct HarmonicaClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for HarmonicaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarmonicaClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HarmonicaClient {
    /// Create a client from the API configuration.
    ///
    /// Trailing slashes are stripped from the base URL before use.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let trimmed = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(trimmed)
            .map_err(|e| ApiError::invalid_url(format!("{}: {}", trimmed, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::invalid_url(trimmed));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the profile of the account owning the API key.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> ApiResult<Account> {
        let url = self.endpoint(&["me"])?;
        self.send(self.http.request(Method::GET, url)).await
    }

    /// List sessions visible to the account.
    #[instrument(skip(self))]
    pub async fn list_sessions(&self, query: &ListSessionsQuery) -> ApiResult<SessionList> {
        let mut url = self.endpoint(&["sessions"])?;
        let encoded = serde_urlencoded::to_string(query)?;
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }
        self.send(self.http.request(Method::GET, url)).await
    }

    /// Fetch one session by id.
    #[instrument(skip(self))]
    pub async fn get_session(&self, session_id: &str) -> ApiResult<Session> {
        let url = self.endpoint(&["sessions", session_id])?;
        self.send(self.http.request(Method::GET, url)).await
    }

    /// Fetch the questions of a session, ordered by position.
    #[instrument(skip(self))]
    pub async fn get_session_questions(&self, session_id: &str) -> ApiResult<Vec<Question>> {
        let url = self.endpoint(&["sessions", session_id, "questions"])?;
        let list: QuestionList = self.send(self.http.request(Method::GET, url)).await?;
        let mut questions = list.data;
        questions.sort_by_key(|q| q.position);
        Ok(questions)
    }

    /// Fetch every participant's message thread for a session.
    #[instrument(skip(self))]
    pub async fn get_session_responses(
        &self,
        session_id: &str,
    ) -> ApiResult<Vec<ParticipantResponses>> {
        let url = self.endpoint(&["sessions", session_id, "responses"])?;
        let list: ResponseList = self.send(self.http.request(Method::GET, url)).await?;
        Ok(list.data)
    }

    /// Submit a new response message to a session.
    #[instrument(skip(self, content))]
    pub async fn submit_response(
        &self,
        session_id: &str,
        content: &str,
    ) -> ApiResult<SubmittedResponse> {
        let url = self.endpoint(&["sessions", session_id, "responses"])?;
        let body = SubmitResponseRequest { content };
        self.send(self.http.request(Method::POST, url).json(&body)).await
    }

    /// Create a new session.
    #[instrument(skip(self, request), fields(topic = %request.topic))]
    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> ApiResult<CreatedSession> {
        let url = self.endpoint(&["sessions"])?;
        self.send(self.http.request(Method::POST, url).json(request)).await
    }

    /// Fetch the AI-generated summary of a session.
    #[instrument(skip(self))]
    pub async fn get_session_summary(&self, session_id: &str) -> ApiResult<SessionSummary> {
        let url = self.endpoint(&["sessions", session_id, "summary"])?;
        self.send(self.http.request(Method::GET, url)).await
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// Build `<base_url>/api/v1/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_url(self.base_url.as_str()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Send one authenticated request and decode the JSON reply.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = request
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await?;
        debug!("{} <- {} ({} bytes)", status, url.path(), body.len());

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            warn!("Request to {} failed: {}", url.path(), err);
            return Err(err);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
