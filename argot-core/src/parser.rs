//! Strict parser for command line arguments.
//!
//! This module parses a flat sequence of tokens into a structured JSON
//! object. Arguments are strictly named (`--flag value`); the only
//! positional token allowed is an optional leading command drawn from a
//! configured allow-list. `--help` and `--version` short-circuit parsing
//! as soon as they are seen in first position.

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};

/// Tokens that stop parsing immediately when found in first position.
const HELP_OR_VERSION: [&str; 2] = ["--help", "--version"];

/// Result key holding the extracted leading command.
const COMMAND_KEY: &str = "_command";

/// Parser for strictly named command line arguments.
///
/// Configuration is given up front; [`parse`](ArgParser::parse) is then a
/// pure function of its input and can be called any number of times, from
/// any thread, without coordination.
#[derive(Debug, Clone, Default)]
pub struct ArgParser {
    allow_multiple: Vec<String>,
    commands: Vec<String>,
}

impl ArgParser {
    /// Create a parser with no commands and no always-multiple flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare flags (in `--kebab-case` form) whose result keys always hold
    /// an array of values, even when given zero or one times.
    pub fn allow_multiple<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_multiple.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Declare the valid leading commands. When non-empty, the first token
    /// of a non-empty input must match one of them (unless it is `--help`
    /// or `--version`).
    pub fn commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    /// Parse an argument sequence into a JSON object.
    ///
    /// Keys are flag names converted from `--kebab-case` to `camelCase`.
    /// Values are raw strings, arrays of raw strings (for flags declared
    /// via [`allow_multiple`](ArgParser::allow_multiple)), or `true` for
    /// the reserved `help`/`version` keys. The extracted command, if any,
    /// is stored under `_command`.
    ///
    /// A repeated flag that was not declared in `allow_multiple` keeps the
    /// last value given; earlier occurrences are overwritten.
    ///
    /// # Arguments
    /// * `all_args` - The raw argument tokens, program name excluded
    ///
    /// # Returns
    /// * `Value` - Object mapping camelCase keys to parsed values
    pub fn parse(&self, all_args: &[String]) -> Result<Value> {
        let mut result = Map::new();
        let mut args = all_args;

        // 1. Extract the leading command, unless the input is empty or the
        //    first token is a help/version request.
        if !self.commands.is_empty()
            && !args.is_empty()
            && !HELP_OR_VERSION.contains(&args[0].as_str())
        {
            let first = &args[0];
            if !self.commands.iter().any(|c| c == first) {
                return Err(ParseError::CommandNotFound {
                    command: first.clone(),
                    commands: self.commands.clone(),
                });
            }
            result.insert(COMMAND_KEY.to_string(), Value::String(first.clone()));
            args = &args[1..];
        }

        // 2. Short-circuit on --help/--version: everything after is ignored.
        match args.first().map(|s| s.as_str()) {
            Some("--help") => {
                result.insert("help".to_string(), Value::Bool(true));
                return Ok(Value::Object(result));
            }
            Some("--version") => {
                result.insert("version".to_string(), Value::Bool(true));
                return Ok(Value::Object(result));
            }
            _ => {}
        }

        // 3. Seed always-multiple keys so they come out as arrays even when
        //    the flag was never given.
        for flag in &self.allow_multiple {
            result.insert(camel_case_key(flag), Value::Array(Vec::new()));
        }

        // 4. Scan strict --name value pairs.
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if !arg.starts_with("--") {
                return Err(ParseError::ExpectedNamedArgument {
                    argument: arg.clone(),
                    args: all_args.to_vec(),
                });
            }
            if i + 1 >= args.len() {
                return Err(ParseError::DanglingNamedArgument {
                    argument: arg.clone(),
                });
            }

            // The next token is the value, whatever it looks like.
            let value = args[i + 1].clone();
            let key = camel_case_key(arg);
            match result.get_mut(&key) {
                Some(Value::Array(values)) => values.push(Value::String(value)),
                _ => {
                    result.insert(key, Value::String(value));
                }
            }

            i += 2;
        }

        Ok(Value::Object(result))
    }
}

/// Parse an argument sequence with no configured commands or multi-value
/// flags.
pub fn parse(args: &[String]) -> Result<Value> {
    ArgParser::new().parse(args)
}

/// Convert a `--kebab-case` flag name into its `camelCase` result key.
///
/// The leading `--` is stripped; every remaining `-` uppercases the
/// character that follows it. `--allow-multiple` becomes `allowMultiple`.
fn camel_case_key(flag: &str) -> String {
    let name = flag.strip_prefix("--").unwrap_or(flag);
    let mut key = String::with_capacity(name.len());
    let mut upper_next = false;

    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            key.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            key.push(c);
        }
    }

    key
}
