//! JSON output formatting for encryption results.

use transpo_core::{EncryptionOutcome, Rejection};

/// Convert an accepted request's outcome to JSON for output.
pub fn outcome_json(outcome: &EncryptionOutcome) -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "message": outcome.message,
        "results": outcome.results,
        "warnings": outcome.warnings,
    })
}

/// Convert a rejected request to JSON for output.
pub fn rejection_json(rejection: &Rejection) -> serde_json::Value {
    serde_json::json!({
        "status": "rejected",
        "errors": rejection.errors,
    })
}
