//! Error types for argument parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing an argument sequence.
///
/// Every variant belongs to the `"cannot parse"` group and carries a stable
/// identifier available through [`ParseError::kind`], so callers can match on
/// identifiers without string-comparing messages.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParseError {
    /// A command allow-list was configured but no arguments were given.
    ///
    /// Kept so the taxonomy is complete for callers matching on [`kind`];
    /// `parse` skips command extraction on empty input and never constructs
    /// this variant.
    ///
    /// [`kind`]: ParseError::kind
    #[error("No command given")]
    NoCommandGiven,

    /// The first token did not match any configured command.
    #[error("Command \"{command}\" not found\n\nValid commands are: {}", .commands.join(", "))]
    CommandNotFound {
        /// The token that was expected to be a command.
        command: String,
        /// The configured commands, in the order they were given.
        commands: Vec<String>,
    },

    /// A token in name position did not start with `--`.
    #[error("Expected a named argument (--flag) but found \"{argument}\"\n\nArguments given: {}", .args.join(" "))]
    ExpectedNamedArgument {
        /// The offending token.
        argument: String,
        /// The full argument sequence as originally given.
        args: Vec<String>,
    },

    /// A name token was the last token, so its value is missing.
    #[error("Named argument \"{argument}\" is missing its value")]
    DanglingNamedArgument {
        /// The name token with no value after it.
        argument: String,
    },
}

impl ParseError {
    /// Stable identifier for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::NoCommandGiven => "no-command-given",
            ParseError::CommandNotFound { .. } => "command-not-found",
            ParseError::ExpectedNamedArgument { .. } => "expected-named-argument",
            ParseError::DanglingNamedArgument { .. } => "dangling-named-argument",
        }
    }

    /// Classification shared by all parse errors.
    pub fn group(&self) -> &'static str {
        "cannot parse"
    }
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
