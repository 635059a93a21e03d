//! Adfgvx: the cipher engine.
//!
//! Bundles a [`PolybiusTable`] and a [`Key`] into one immutable value and
//! runs sanitize → substitute → transpose for encryption, and the exact
//! inverse for decryption.

use log::debug;

use crate::error::AdfgvxError;
use crate::key::Key;
use crate::polybius::{CipherLetter, PolybiusTable};
use crate::sanitize::sanitize;
use crate::transposition::{gather, scatter};

/// Separator between column groups in ciphertext.
const GROUP_SEPARATOR: char = ' ';

/// ADFGVX cipher configured with a fixed table and key.
///
/// Holds no mutable state, so one instance can serve any number of calls,
/// including from several threads at once.
///
/// A decryptor using a different key than the encryptor produces wrong
/// plaintext (or a decoding error) rather than a key-mismatch error; the
/// ciphertext carries no integrity tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Adfgvx {
    table: PolybiusTable,
    key: Key,
}

impl Adfgvx {
    /// Creates a cipher with the default key `PRIVACY`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::Adfgvx;
    ///
    /// let cipher = Adfgvx::new();
    /// assert_eq!(cipher.key().to_string(), "PRIVACY");
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cipher with a caller-supplied key.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::Adfgvx;
    ///
    /// assert!(Adfgvx::with_key("GERMAN").is_ok());
    /// assert!(Adfgvx::with_key("").is_err());
    /// ```
    pub fn with_key(key: &str) -> Result<Self, AdfgvxError> {
        Ok(Adfgvx {
            table: PolybiusTable::new(),
            key: Key::new(key)?,
        })
    }

    /// Returns the transposition key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns the substitution table.
    pub fn table(&self) -> &PolybiusTable {
        &self.table
    }

    /// Encrypts plaintext.
    ///
    /// The text is sanitized first (see [`sanitize`]), so spaces,
    /// punctuation and case are not preserved. The result holds exactly
    /// `key.columns()` groups separated by single spaces; a group is empty
    /// when the text is too short to reach its column.
    ///
    /// # Errors
    /// - [`AdfgvxError::EmptyInput`] if nothing is left after sanitizing.
    /// - [`AdfgvxError::UnknownSymbol`] for a character outside `a-z0-9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::Adfgvx;
    ///
    /// let cipher = Adfgvx::new();
    /// let encrypted = cipher.encrypt("attack at 12am").unwrap();
    /// assert_eq!(encrypted, "DGD DAG DGAX ADDD DADD DVF ADA");
    /// ```
    pub fn encrypt(&self, plaintext: &str) -> Result<String, AdfgvxError> {
        let symbols = sanitize(plaintext)?;
        debug!("Encrypting text : {}", symbols);
        debug!("Length of text : {}", symbols.chars().count());

        let mut stream: Vec<CipherLetter> = Vec::with_capacity(symbols.len() * 2);
        for c in symbols.chars() {
            let p = self.table.symbol_to_coordinate(c)?;
            stream.push(p.row);
            stream.push(p.col);
        }
        debug!("Coordinate stream length : {}", stream.len());

        let groups = scatter(&stream, &self.key);

        let mut ciphertext = String::with_capacity(stream.len() + groups.len());
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                ciphertext.push(GROUP_SEPARATOR);
            }
            ciphertext.extend(group.iter().map(|l| l.as_char()));
        }
        Ok(ciphertext)
    }

    /// Decrypts ciphertext produced by [`encrypt`](Self::encrypt) under the
    /// same key.
    ///
    /// Groups are split on every single whitespace character, so the empty
    /// groups of a short message are kept. Trailing line terminators are
    /// ignored.
    ///
    /// # Errors
    /// - [`AdfgvxError::MalformedCiphertext`] if the group count is not the
    ///   key length.
    /// - [`AdfgvxError::EmptyInput`] if every group is empty.
    /// - [`AdfgvxError::InvalidCoordinate`] for the first letter pair that is
    ///   not in the square.
    /// - [`AdfgvxError::TruncatedStream`] if every pair resolves but one
    ///   letter is left over.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::Adfgvx;
    ///
    /// let cipher = Adfgvx::new();
    /// let decrypted = cipher.decrypt("DGD DAG DGAX ADDD DADD DVF ADA").unwrap();
    /// assert_eq!(decrypted, "attackat12am");
    /// ```
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, AdfgvxError> {
        debug!("Decrypting : {}", ciphertext);
        debug!("With key : {}", self.key);

        let groups: Vec<Vec<char>> = ciphertext
            .trim_end_matches(&['\r', '\n'][..])
            .split(char::is_whitespace)
            .map(|group| group.chars().collect())
            .collect();
        let stream = gather(groups, &self.key)?;
        debug!("Coordinate stream length : {}", stream.len());

        if stream.is_empty() {
            return Err(AdfgvxError::EmptyInput);
        }

        let mut plaintext = String::with_capacity(stream.len() / 2);
        for pair in stream.chunks(2) {
            match *pair {
                [row, col] => plaintext.push(self.table.decode_pair(row, col)?),
                _ => return Err(AdfgvxError::TruncatedStream),
            }
        }
        Ok(plaintext)
    }
}
