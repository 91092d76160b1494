//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use transpo_core::Rejection;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Config file could not be used
    Config { message: String, hint: String },

    /// Encryption request rejected by validation
    Rejected(Rejection),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::Rejected(rejection) => {
                let messages: Vec<String> =
                    rejection.errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("\n"))
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<Rejection> for CliError {
    fn from(rejection: Rejection) -> Self {
        CliError::Rejected(rejection)
    }
}

impl CliError {
    /// Create a Config error with message and hint.
    pub fn config(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::Config {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::Config { .. } => exit_codes::CONFIG,
            CliError::Rejected(_) => exit_codes::INVALID_INPUT,
        }
    }
}
