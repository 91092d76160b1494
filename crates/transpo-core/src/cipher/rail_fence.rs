//! Rail Fence cipher.
//!
//! Characters are written in a zig-zag across `rails` rows, then the rows
//! are read out top to bottom:
//!
//! ```text
//! W . . . E . . . C . . . R . . . L . . . T . . . E
//! . E . R . D . S . O . E . E . F . E . A . O . C .
//! . . A . . . I . . . V . . . D . . . E . . . N . .
//! ```

use super::{normalize_message, Cipher, CipherKind};

/// Zig-zag transposition over a fixed number of rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    /// Create a cipher with `rails` rows.
    ///
    /// Callers are expected to validate `2 <= rails <= message length`
    /// beforehand. Zero or one rail yields the normalized message unchanged.
    pub fn new(rails: usize) -> Self {
        Self { rails }
    }

    /// Number of rails.
    pub fn rails(&self) -> usize {
        self.rails
    }
}

impl Cipher for RailFenceCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::RailFence
    }

    fn encrypt(&self, message: &str) -> String {
        let message = normalize_message(message);
        if self.rails <= 1 {
            return message;
        }

        let bottom = self.rails - 1;
        let mut fence: Vec<String> = vec![String::new(); self.rails];
        let mut rail = 0usize;
        let mut descending = true;

        for c in message.chars() {
            fence[rail].push(c);
            if descending {
                rail += 1;
            } else {
                rail -= 1;
            }
            if rail == bottom || rail == 0 {
                descending = !descending;
            }
        }

        fence.concat()
    }
}
