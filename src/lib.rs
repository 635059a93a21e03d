//! ADFGVX field cipher engine.
//!
//! ADFGVX is a fractionating substitution-transposition cipher. Every
//! plaintext symbol (`a`..`z`, `0`..`9`) is replaced by its row and column
//! in a 6×6 Polybius square, both named by one of the letters A, D, F, G,
//! V and X. The resulting letter stream is then scattered by a keyed
//! columnar transposition.
//!
//! This is a deterministic, reversible transform, not a hardened
//! cryptographic primitive.
//!
//! # Architecture
//!
//! ```text
//! sanitize       (strip whitespace/punctuation, lower-case)
//!     ↓
//! PolybiusTable  (symbol ↔ Coordinate, one pass, bijective)
//!     ↓ flat letter stream
//! transposition  (matrix as wide as the Key, columns read in key order)
//!     ↓
//! Adfgvx         (immutable Table + Key, encrypt / decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the default key `PRIVACY`:
//!
//! ```
//! use adfgvx::Adfgvx;
//!
//! let cipher = Adfgvx::new();
//!
//! let encrypted = cipher.encrypt("attack at 12am").unwrap();
//! assert_eq!(encrypted.split(' ').count(), 7);
//!
//! let decrypted = cipher.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, "attackat12am");
//! ```
//!
//! Use a custom key:
//!
//! ```
//! use adfgvx::Adfgvx;
//!
//! let cipher = Adfgvx::with_key("GERMAN").unwrap();
//! let encrypted = cipher.encrypt("defend the east wall").unwrap();
//! assert_eq!(cipher.decrypt(&encrypted).unwrap(), "defendtheeastwall");
//! ```

#![deny(clippy::all)]

pub mod error;

mod adfgvx;
mod key;
mod polybius;
mod sanitize;
pub(crate) mod transposition;

pub use adfgvx::Adfgvx;
pub use error::AdfgvxError;
pub use key::{Key, DEFAULT_KEY};
pub use polybius::{CipherLetter, Coordinate, PolybiusTable};
pub use sanitize::sanitize;
