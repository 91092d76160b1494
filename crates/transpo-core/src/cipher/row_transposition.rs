//! Row (columnar) Transposition cipher.
//!
//! The message is padded with [`PADDING_CHAR`] to fill a rectangular grid
//! with one column per key letter, written row by row. Columns are then read
//! top to bottom in the alphabetical order of the key letters.
//!
//! For key `ZEBRA` the read order is `A(4) B(2) E(1) R(3) Z(0)`:
//!
//! ```text
//!  Z E B R A
//!  ---------
//!  M E E T M
//!  E A T T H
//!  E P A R K      -> MHK ETA EAP TTR MEE
//! ```

use super::{normalize_message, Cipher, CipherKind};

/// Filler appended until the message fills whole rows.
///
/// Padding is not reversible when the plaintext itself ends in `X`.
pub const PADDING_CHAR: char = 'X';

/// Keyword-ordered columnar transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTranspositionCipher {
    key: String,
    key_order: Vec<usize>,
}

impl RowTranspositionCipher {
    /// Create a cipher from a keyword.
    ///
    /// The key is uppercased and its column order derived once here.
    /// Callers are expected to reject empty or non-alphabetic keys.
    pub fn new(key: &str) -> Self {
        let key = key.to_uppercase();
        let key_order = key_order(&key);
        Self { key, key_order }
    }

    /// The normalized (uppercase) keyword.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Column read order as original column indices.
    pub fn key_order(&self) -> &[usize] {
        &self.key_order
    }

    /// Number of grid columns.
    pub fn columns(&self) -> usize {
        self.key_order.len()
    }
}

/// Derive the column read order for a keyword.
///
/// Sorts `(letter, position)` pairs, so repeated letters are ordered by
/// position explicitly rather than by any stability guarantee of the sort.
/// `"ABA"` yields `[0, 2, 1]`.
pub fn key_order(key: &str) -> Vec<usize> {
    let mut indexed: Vec<(char, usize)> = key
        .chars()
        .enumerate()
        .map(|(index, c)| (c, index))
        .collect();
    indexed.sort_unstable();
    indexed.into_iter().map(|(_, index)| index).collect()
}

impl Cipher for RowTranspositionCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::RowTransposition
    }

    fn encrypt(&self, message: &str) -> String {
        let mut grid: Vec<char> = normalize_message(message).chars().collect();
        let columns = self.columns();
        if columns == 0 {
            return grid.into_iter().collect();
        }

        let remainder = grid.len() % columns;
        if remainder != 0 {
            grid.resize(grid.len() + columns - remainder, PADDING_CHAR);
        }

        let rows = grid.len() / columns;
        let mut encrypted = String::with_capacity(grid.len());
        for &column in &self.key_order {
            for row in 0..rows {
                encrypted.push(grid[row * columns + column]);
            }
        }
        encrypted
    }
}
