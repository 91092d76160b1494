//! Cipher abstraction and implementations.
//!
//! Both encoders are one-shot pure transforms: build one per request, call
//! [`Cipher::encrypt`], drop it. They assume validated input (see
//! [`crate::validation`]) and never fail.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod rail_fence;
pub mod row_transposition;

pub use rail_fence::RailFenceCipher;
pub use row_transposition::{key_order, RowTranspositionCipher, PADDING_CHAR};

/// Which cipher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    RailFence,
    RowTransposition,
}

impl CipherKind {
    /// Human-readable cipher name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RailFence => "Rail Fence",
            Self::RowTransposition => "Row Transposition",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An encryption-only transposition cipher.
pub trait Cipher: Send + Sync {
    /// The kind of cipher this is.
    fn kind(&self) -> CipherKind;

    /// Encrypt a message. Spaces are dropped and letters uppercased first.
    fn encrypt(&self, message: &str) -> String;
}

/// Strip space characters and uppercase the remainder.
///
/// Only `' '` is removed; other whitespace is kept as message content.
pub fn normalize_message(message: &str) -> String {
    message
        .chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}
