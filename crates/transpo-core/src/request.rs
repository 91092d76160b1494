//! Running every requested cipher over a single message.
//!
//! A request names one message and up to two keys. Each cipher is validated
//! and run independently: a bad rail fence key does not stop a good row
//! transposition key from producing a result. The request as a whole is
//! only rejected when the message is blank or no cipher could run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cipher::{Cipher, CipherKind, RailFenceCipher, RowTranspositionCipher};
use crate::error::ValidationError;
use crate::validation::{parse_column_key, parse_rail_count, supplied, validate_message};

/// Raw input as received from a form, a JSON body or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rail_fence_key: Option<String>,
    #[serde(default)]
    pub row_transposition_key: Option<String>,
}

/// Key that produced a result, echoed back for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CipherKey {
    Rails(usize),
    Keyword(String),
}

impl std::fmt::Display for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherKey::Rails(rails) => write!(f, "{}", rails),
            CipherKey::Keyword(keyword) => f.write_str(keyword),
        }
    }
}

/// One cipher's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherResult {
    pub cipher: CipherKind,
    pub key: CipherKey,
    pub encrypted: String,
}

/// Everything produced for an accepted request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptionOutcome {
    /// The trimmed message that was encrypted
    pub message: String,
    /// Results in a fixed order: rail fence first, then row transposition
    pub results: Vec<CipherResult>,
    /// Per-cipher problems that were skipped while others succeeded
    pub warnings: Vec<ValidationError>,
}

impl EncryptionOutcome {
    /// Look up the result for a given cipher.
    pub fn result(&self, cipher: CipherKind) -> Option<&CipherResult> {
        self.results.iter().find(|result| result.cipher == cipher)
    }
}

/// A request that produced no ciphertext at all.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("request rejected: {}", summary(.errors))]
pub struct Rejection {
    pub errors: Vec<ValidationError>,
}

fn summary(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<ValidationError> for Rejection {
    fn from(err: ValidationError) -> Self {
        Rejection { errors: vec![err] }
    }
}

/// Validate the request and run each cipher whose key was supplied.
pub fn encrypt_request(request: &EncryptionRequest) -> Result<EncryptionOutcome, Rejection> {
    let message = validate_message(&request.message)?;

    let mut results = Vec::new();
    let mut problems = Vec::new();

    if let Some(raw) = supplied(request.rail_fence_key.as_deref()) {
        match parse_rail_count(raw, &message) {
            Ok(rails) => {
                let cipher = RailFenceCipher::new(rails.get());
                results.push(CipherResult {
                    cipher: cipher.kind(),
                    key: CipherKey::Rails(cipher.rails()),
                    encrypted: cipher.encrypt(message.as_str()),
                });
            }
            Err(err) => problems.push(err),
        }
    }

    if let Some(raw) = supplied(request.row_transposition_key.as_deref()) {
        match parse_column_key(raw) {
            Ok(key) => {
                let cipher = RowTranspositionCipher::new(key.as_str());
                results.push(CipherResult {
                    cipher: cipher.kind(),
                    key: CipherKey::Keyword(cipher.key().to_string()),
                    encrypted: cipher.encrypt(message.as_str()),
                });
            }
            Err(err) => problems.push(err),
        }
    }

    if results.is_empty() {
        problems.push(ValidationError::NoValidCipherRequested);
        return Err(Rejection { errors: problems });
    }

    Ok(EncryptionOutcome {
        message: message.into_inner(),
        results,
        warnings: problems,
    })
}
