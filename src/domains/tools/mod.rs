//! Tools domain module.
//!
//! Tools are the operations MCP clients can call. Each one validates its
//! arguments, makes a single Harmonica API call and renders the result as
//! text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Builds the rmcp ToolRouter
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()`,
//!    `to_tool()` and `create_route()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add its route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
