//! Transposition key.
//!
//! The key fixes the number of transposition columns and the order in
//! which those columns are read out. Columns are ranked by key character
//! ascending; repeated characters keep their left-to-right order.

use std::fmt;
use std::str::FromStr;

use crate::error::AdfgvxError;

/// Key used when none is supplied.
pub const DEFAULT_KEY: &str = "PRIVACY";

/// Immutable columnar transposition key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    chars: Vec<char>,
    order: Vec<usize>,
}

impl Default for Key {
    fn default() -> Self {
        Self::from_chars(DEFAULT_KEY.chars().collect())
    }
}

impl Key {
    /// Creates a key from a string.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::Key;
    ///
    /// let key = Key::new("BAB").unwrap();
    /// assert_eq!(key.columns(), 3);
    /// assert_eq!(key.sorted_order(), &[1, 0, 2]);
    /// assert!(Key::new("").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, AdfgvxError> {
        let chars: Vec<char> = key.chars().collect();
        if chars.is_empty() {
            return Err(AdfgvxError::InvalidKey);
        }
        Ok(Self::from_chars(chars))
    }

    fn from_chars(chars: Vec<char>) -> Self {
        let mut order: Vec<usize> = (0..chars.len()).collect();
        // sort_by_key is stable: equal characters keep column order
        order.sort_by_key(|&j| chars[j]);
        Key { chars, order }
    }

    /// Returns the number of transposition columns (the key length).
    pub fn columns(&self) -> usize {
        self.chars.len()
    }

    /// Returns the key characters in original order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns original column indices in read-out order.
    ///
    /// Entry `i` is the column whose key character has rank `i`.
    pub fn sorted_order(&self) -> &[usize] {
        &self.order
    }
}

impl FromStr for Key {
    type Err = AdfgvxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let key = Key::default();
        assert_eq!(key.columns(), 7);
        assert_eq!(key.to_string(), DEFAULT_KEY);
    }

    #[test]
    fn test_default_key_order() {
        // P R I V A C Y -> A C I P R V Y
        let key = Key::default();
        assert_eq!(key.sorted_order(), &[4, 5, 2, 0, 1, 3, 6]);
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(Key::new(""), Err(AdfgvxError::InvalidKey));
        assert_eq!("".parse::<Key>(), Err(AdfgvxError::InvalidKey));
    }

    #[test]
    fn test_single_char_key() {
        let key = Key::new("Z").unwrap();
        assert_eq!(key.columns(), 1);
        assert_eq!(key.sorted_order(), &[0]);
    }

    #[test]
    fn test_repeated_chars_keep_position() {
        let key = Key::new("BAB").unwrap();
        assert_eq!(key.sorted_order(), &[1, 0, 2]);

        let key = Key::new("AAAA").unwrap();
        assert_eq!(key.sorted_order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_order_is_permutation() {
        let key = Key::new("MISSISSIPPI").unwrap();
        let mut seen = key.sorted_order().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_ascii_key() {
        let key: Key = "žab".parse().unwrap();
        assert_eq!(key.columns(), 3);
        assert_eq!(key.chars(), &['ž', 'a', 'b']);
        assert_eq!(key.sorted_order(), &[1, 2, 0]);
    }
}
