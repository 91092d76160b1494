//! Error types for Transpo core operations.
//!
//! The encoders themselves never fail. Everything here is raised by the
//! validation step that runs before an encoder is built, and every message
//! is written to be shown to the user as-is.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type alias for validation steps.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Why a rail fence key was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RailCountProblem {
    /// Key did not parse as an integer
    #[error("Rail Fence key must be a valid number.")]
    NotANumber,

    /// Fewer than two rails
    #[error("Rail Fence key must be at least 2.")]
    TooFew,

    /// More rails than message characters
    #[error("Rail Fence key cannot be greater than message length.")]
    ExceedsMessage,
}

/// User-facing validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Message is empty or blank after trimming
    #[error("Please enter a message to encrypt.")]
    EmptyMessage,

    /// Rail fence key is non-numeric or out of range
    #[error(transparent)]
    InvalidRailCount(#[from] RailCountProblem),

    /// Row transposition key contains something other than letters
    #[error("Row Transposition key must contain only letters.")]
    InvalidKeyFormat,

    /// No cipher could be run for this request
    #[error("Please provide at least one valid key for encryption.")]
    NoValidCipherRequested,
}

impl ValidationError {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyMessage => "empty_message",
            ValidationError::InvalidRailCount(_) => "invalid_rail_count",
            ValidationError::InvalidKeyFormat => "invalid_key_format",
            ValidationError::NoValidCipherRequested => "no_valid_cipher_requested",
        }
    }
}

// Serialized as `{ "code": ..., "message": ... }` so JSON clients get both.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rail_problem_messages() {
        let err = ValidationError::from(RailCountProblem::TooFew);
        assert_eq!(err.to_string(), "Rail Fence key must be at least 2.");
        assert_eq!(err.code(), "invalid_rail_count");
    }

    #[test]
    fn test_serialize_includes_code_and_message() {
        let value = serde_json::to_value(ValidationError::InvalidKeyFormat).unwrap();
        assert_eq!(value["code"], "invalid_key_format");
        assert_eq!(
            value["message"],
            "Row Transposition key must contain only letters."
        );
    }
}
