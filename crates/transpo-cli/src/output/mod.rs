//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying encryption
//! results in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{outcome_json, rejection_json};
pub use text::{print_outcome, print_warnings};
