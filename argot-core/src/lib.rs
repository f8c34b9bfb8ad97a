//! Core parsing functionality for the argot system.
//!
//! This crate provides a strict command line argument parser: tokens are
//! validated as `--flag value` pairs and collected into a JSON object, an
//! optional leading command is matched against an allow-list, and
//! `--help`/`--version` short-circuit parsing immediately.

mod error;
mod parser;

// Re-export core types
pub use error::{ParseError, Result};
pub use parser::{parse, ArgParser};

/// Re-export the value type results are built from
pub use serde_json::Value;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{parse, ArgParser, ParseError, Result, Value};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
