//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. Stdout is reserved for
//! protocol frames; logs go to stderr.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
