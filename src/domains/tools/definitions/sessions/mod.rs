//! Session tools.
//!
//! One file per tool, each backed by exactly one `HarmonicaClient` call:
//! - `list` / `search`: session listings
//! - `get`: a single session card
//! - `responses`, `questions`, `summary`: session content
//! - `submit`, `create`: write operations

pub mod create;
pub mod get;
pub mod list;
pub mod questions;
pub mod responses;
pub mod search;
pub mod submit;
pub mod summary;

pub use create::{CreateSessionParams, CreateSessionTool};
pub use get::{GetSessionTool, SessionIdParams};
pub use list::{ListSessionsParams, ListSessionsTool};
pub use questions::GetQuestionsTool;
pub use responses::GetResponsesTool;
pub use search::{SearchSessionsParams, SearchSessionsTool};
pub use submit::{SubmitResponseParams, SubmitResponseTool};
pub use summary::GetSummaryTool;
