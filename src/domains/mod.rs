//! Domains module containing business logic organized by bounded contexts.
//!
//! - **sessions**: typed client for the Harmonica REST API
//! - **tools**: MCP tools built on top of that client

pub mod sessions;
pub mod tools;
