//! Validation of raw user input before any cipher is built.
//!
//! Each function takes the string exactly as the user supplied it and either
//! returns a validated value or a [`ValidationError`] whose message can be
//! shown directly.

use std::num::{IntErrorKind, ParseIntError};

use crate::cipher::normalize_message;
use crate::error::{RailCountProblem, Result, ValidationError};

/// Smallest usable rail count.
pub const MIN_RAILS: usize = 2;

/// A message that is non-blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    /// The trimmed message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count once spaces are removed.
    pub fn stripped_len(&self) -> usize {
        normalize_message(&self.0).chars().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A rail count known to fit the message it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailCount(usize);

impl RailCount {
    pub fn get(&self) -> usize {
        self.0
    }
}

/// An uppercase, letters-only row transposition keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Trim the message and reject it if nothing is left.
pub fn validate_message(raw: &str) -> Result<Message> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(Message(trimmed.to_string()))
}

/// Parse a rail fence key and check it against the message length.
pub fn parse_rail_count(raw: &str, message: &Message) -> Result<RailCount> {
    let rails: i64 = raw.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        // Still a whole number, just outside i64.
        IntErrorKind::PosOverflow => RailCountProblem::ExceedsMessage,
        IntErrorKind::NegOverflow => RailCountProblem::TooFew,
        _ => RailCountProblem::NotANumber,
    })?;

    if rails < MIN_RAILS as i64 {
        return Err(RailCountProblem::TooFew.into());
    }

    let rails = usize::try_from(rails).map_err(|_| RailCountProblem::ExceedsMessage)?;
    if rails > message.stripped_len() {
        return Err(RailCountProblem::ExceedsMessage.into());
    }

    Ok(RailCount(rails))
}

/// Check a row transposition keyword and normalize it to uppercase.
pub fn parse_column_key(raw: &str) -> Result<ColumnKey> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidKeyFormat);
    }
    Ok(ColumnKey(trimmed.to_ascii_uppercase()))
}

/// Treat missing and blank optional fields the same way.
pub(crate) fn supplied(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}
