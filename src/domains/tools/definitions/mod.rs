//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file.

pub mod account;
pub mod common;
pub mod sessions;

pub use account::GetAccountTool;
pub use sessions::{
    CreateSessionTool, GetQuestionsTool, GetResponsesTool, GetSessionTool, GetSummaryTool,
    ListSessionsTool, SearchSessionsTool, SubmitResponseTool,
};
