//! Sessions domain module.
//!
//! This module wraps the Harmonica REST API (v1) behind a typed async client.
//! Every method issues exactly one authenticated HTTP request and either
//! returns the decoded response or an [`ApiError`].
//!
//! ## Architecture
//!
//! - `client.rs` - `HarmonicaClient`, one method per endpoint
//! - `models.rs` - Request and response shapes exchanged with the backend
//! - `error.rs` - API-specific error types

mod client;
mod error;
pub mod models;

pub use client::HarmonicaClient;
pub use error::{ApiError, ApiResult};
pub use models::{
    Account, CreateSessionRequest, CreatedSession, ListSessionsQuery, Message, Pagination,
    ParticipantResponses, Question, Session, SessionList, SessionStatus, SessionSummary,
    SubmittedResponse,
};
