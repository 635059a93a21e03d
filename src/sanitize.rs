//! Plaintext pre-processing.
//!
//! Strips whitespace, a fixed set of punctuation and the UTF-8 byte order
//! mark, then lower-cases what remains. The step is lossy: decryption never
//! restores punctuation or case.

use crate::error::AdfgvxError;

/// Characters removed in addition to whitespace.
const REMOVED: [char; 6] = [':', ',', '.', '-', '"', '\u{FEFF}'];

/// Normalizes plaintext into a candidate symbol sequence.
///
/// Characters outside the cipher alphabet that are not in the removal set
/// are kept, so encryption can report them. A character whose lowercase
/// form is more than one character stays as typed.
///
/// # Errors
/// Returns [`AdfgvxError::EmptyInput`] if nothing is left.
///
/// # Examples
///
/// ```
/// use adfgvx::sanitize;
///
/// assert_eq!(sanitize("Attack at 12AM.").unwrap(), "attackat12am");
/// assert!(sanitize(" - ").is_err());
/// ```
pub fn sanitize(text: &str) -> Result<String, AdfgvxError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && !REMOVED.contains(c))
        .map(lower_single)
        .collect();

    if cleaned.is_empty() {
        return Err(AdfgvxError::EmptyInput);
    }
    Ok(cleaned)
}

/// Lower-cases `c` when its lowercase form is a single character.
///
/// Characters that expand (`İ` → `i` + U+0307) are kept as typed, so an
/// unknown symbol is reported the way the user wrote it.
fn lower_single(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
