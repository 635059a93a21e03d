//! Error types for the ADFGVX library.

use std::fmt;

/// Errors produced by the ADFGVX library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdfgvxError {
    /// Key is empty.
    InvalidKey,
    /// Plaintext is empty after sanitization.
    EmptyInput,
    /// Plaintext character is outside the 36-symbol alphabet.
    UnknownSymbol(char),
    /// Ciphertext token count does not match the key length.
    MalformedCiphertext {
        /// Token count required by the key.
        expected: usize,
        /// Token count found in the ciphertext.
        found: usize,
    },
    /// Letter pair does not name a cell of the Polybius square.
    InvalidCoordinate(char, char),
    /// Coordinate stream has an odd number of letters.
    TruncatedStream,
}

impl fmt::Display for AdfgvxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdfgvxError::InvalidKey => write!(f, "Key must be at least 1 character long"),
            AdfgvxError::EmptyInput => write!(f, "Input is empty after sanitization"),
            AdfgvxError::UnknownSymbol(c) => {
                write!(f, "Character {:?} is not in the ADFGVX alphabet", c)
            }
            AdfgvxError::MalformedCiphertext { expected, found } => {
                write!(
                    f,
                    "Ciphertext has {} groups but the key requires {}",
                    found, expected
                )
            }
            AdfgvxError::InvalidCoordinate(row, col) => {
                write!(f, "Pair {:?}{:?} is not a valid coordinate", row, col)
            }
            AdfgvxError::TruncatedStream => {
                write!(f, "Coordinate stream has an odd number of letters")
            }
        }
    }
}

impl std::error::Error for AdfgvxError {}
