//! Account tools.

pub mod me;

pub use me::GetAccountTool;
