//! Polybius square: the substitution half of ADFGVX.
//!
//! Maps each of the 36 plaintext symbols (`a`..`z`, `0`..`9`) to a
//! [`Coordinate`] whose row and column are named by the letters
//! A, D, F, G, V and X, and maps coordinates back to symbols.
//!
//! The forward and inverse lookups are filled in a single pass over the
//! fixed grid, so they cannot disagree.

use std::fmt;

use crate::error::AdfgvxError;

/// Side length of the square.
pub(crate) const SQUARE_SIZE: usize = 6;

/// Number of plaintext symbols (26 letters + 10 digits).
pub(crate) const NUM_SYMBOLS: usize = SQUARE_SIZE * SQUARE_SIZE;

/// Fixed substitution grid, row-major. Rows and columns are both indexed
/// in [`CipherLetter::ALL`] order.
const GRID: [[char; SQUARE_SIZE]; SQUARE_SIZE] = [
    ['n', 'a', '1', 'c', '3', 'h'],
    ['8', 't', 'b', '2', 'o', 'm'],
    ['e', '5', 'y', 'r', 'p', 'd'],
    ['4', 'f', '6', 'g', '7', 'i'],
    ['9', 'j', '0', 'k', 'l', 'q'],
    ['s', 'u', 'v', 'w', 'x', 'z'],
];

/// One of the six letters that make up ADFGVX ciphertext.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CipherLetter {
    A,
    D,
    F,
    G,
    V,
    X,
}

impl CipherLetter {
    /// All letters in grid index order.
    pub const ALL: [CipherLetter; SQUARE_SIZE] = [
        CipherLetter::A,
        CipherLetter::D,
        CipherLetter::F,
        CipherLetter::G,
        CipherLetter::V,
        CipherLetter::X,
    ];

    /// Returns the row/column index of this letter (0..6).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the uppercase ASCII character for this letter.
    pub fn as_char(self) -> char {
        match self {
            CipherLetter::A => 'A',
            CipherLetter::D => 'D',
            CipherLetter::F => 'F',
            CipherLetter::G => 'G',
            CipherLetter::V => 'V',
            CipherLetter::X => 'X',
        }
    }

    /// Parses an uppercase ciphertext character.
    ///
    /// # Returns
    /// `None` for anything other than `A`, `D`, `F`, `G`, `V` or `X`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(CipherLetter::A),
            'D' => Some(CipherLetter::D),
            'F' => Some(CipherLetter::F),
            'G' => Some(CipherLetter::G),
            'V' => Some(CipherLetter::V),
            'X' => Some(CipherLetter::X),
            _ => None,
        }
    }
}

impl fmt::Display for CipherLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Position of a symbol in the Polybius square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Row letter, emitted first.
    pub row: CipherLetter,
    /// Column letter, emitted second.
    pub col: CipherLetter,
}

impl Coordinate {
    /// Creates a coordinate from its row and column letters.
    pub fn new(row: CipherLetter, col: CipherLetter) -> Self {
        Coordinate { row, col }
    }

    /// Parses a coordinate from two raw ciphertext characters.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::InvalidCoordinate`] carrying both characters if
    /// either is not an ADFGVX letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::{CipherLetter, Coordinate};
    ///
    /// let p = Coordinate::parse('A', 'D').unwrap();
    /// assert_eq!(p, Coordinate::new(CipherLetter::A, CipherLetter::D));
    /// assert!(Coordinate::parse('A', 'B').is_err());
    /// ```
    pub fn parse(row: char, col: char) -> Result<Self, AdfgvxError> {
        match (CipherLetter::from_char(row), CipherLetter::from_char(col)) {
            (Some(r), Some(c)) => Ok(Coordinate::new(r, c)),
            _ => Err(AdfgvxError::InvalidCoordinate(row, col)),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

/// Returns the dense index of a plaintext symbol: `a..z` → 0..26,
/// `0..9` → 26..36.
fn symbol_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        '0'..='9' => Some(26 + c as usize - '0' as usize),
        _ => None,
    }
}

/// Bijective lookup between plaintext symbols and coordinates.
///
/// Immutable after construction and cheap to copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusTable {
    forward: [Coordinate; NUM_SYMBOLS],
    inverse: [[char; SQUARE_SIZE]; SQUARE_SIZE],
}

impl Default for PolybiusTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PolybiusTable {
    /// Builds the table from the fixed grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use adfgvx::PolybiusTable;
    ///
    /// let table = PolybiusTable::new();
    /// let p = table.symbol_to_coordinate('a').unwrap();
    /// assert_eq!(p.to_string(), "AD");
    /// assert_eq!(table.coordinate_to_symbol(p), 'a');
    /// ```
    pub fn new() -> Self {
        let placeholder = Coordinate::new(CipherLetter::A, CipherLetter::A);
        let mut forward = [placeholder; NUM_SYMBOLS];
        let mut inverse = [[' '; SQUARE_SIZE]; SQUARE_SIZE];

        for (i, &row) in CipherLetter::ALL.iter().enumerate() {
            for (j, &col) in CipherLetter::ALL.iter().enumerate() {
                let symbol = GRID[i][j];
                // GRID holds only alphabet symbols
                if let Some(idx) = symbol_index(symbol) {
                    forward[idx] = Coordinate::new(row, col);
                }
                inverse[i][j] = symbol;
            }
        }

        PolybiusTable { forward, inverse }
    }

    /// Looks up the coordinate of a plaintext symbol.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::UnknownSymbol`] if `c` is not a lowercase ASCII
    /// letter or a digit.
    pub fn symbol_to_coordinate(&self, c: char) -> Result<Coordinate, AdfgvxError> {
        symbol_index(c)
            .map(|idx| self.forward[idx])
            .ok_or(AdfgvxError::UnknownSymbol(c))
    }

    /// Looks up the symbol at a coordinate.
    ///
    /// Every well-formed [`Coordinate`] names a cell, so this cannot fail.
    /// Raw ciphertext goes through [`decode_pair`](Self::decode_pair).
    pub fn coordinate_to_symbol(&self, p: Coordinate) -> char {
        self.inverse[p.row.index()][p.col.index()]
    }

    /// Resolves a raw (row, column) character pair to its symbol.
    ///
    /// # Errors
    /// Returns [`AdfgvxError::InvalidCoordinate`] if the pair is not one of
    /// the 36 valid coordinates.
    pub fn decode_pair(&self, row: char, col: char) -> Result<char, AdfgvxError> {
        Coordinate::parse(row, col).map(|p| self.coordinate_to_symbol(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> impl Iterator<Item = char> {
        ('a'..='z').chain('0'..='9')
    }

    #[test]
    fn test_letter_roundtrip() {
        for letter in CipherLetter::ALL {
            assert_eq!(CipherLetter::from_char(letter.as_char()), Some(letter));
        }
        assert_eq!(CipherLetter::from_char('a'), None);
        assert_eq!(CipherLetter::from_char('B'), None);
    }

    #[test]
    fn test_letter_index_matches_all_order() {
        for (i, letter) in CipherLetter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn test_known_coordinates() {
        let table = PolybiusTable::new();
        let cases = [
            ('n', "AA"),
            ('a', "AD"),
            ('h', "AX"),
            ('t', "DD"),
            ('1', "AF"),
            ('2', "DG"),
            ('z', "XX"),
            ('0', "VF"),
        ];
        for (symbol, expected) in cases {
            let p = table.symbol_to_coordinate(symbol).unwrap();
            assert_eq!(p.to_string(), expected, "coordinate of {:?}", symbol);
        }
    }

    #[test]
    fn test_symbol_bijection() {
        let table = PolybiusTable::new();
        for s in alphabet() {
            let p = table.symbol_to_coordinate(s).unwrap();
            assert_eq!(table.coordinate_to_symbol(p), s);
        }
    }

    #[test]
    fn test_coordinate_bijection() {
        let table = PolybiusTable::new();
        for row in CipherLetter::ALL {
            for col in CipherLetter::ALL {
                let p = Coordinate::new(row, col);
                let s = table.coordinate_to_symbol(p);
                assert_eq!(table.symbol_to_coordinate(s).unwrap(), p);
            }
        }
    }

    #[test]
    fn test_all_coordinates_distinct() {
        let table = PolybiusTable::new();
        let mut seen = std::collections::HashSet::new();
        for s in alphabet() {
            assert!(seen.insert(table.symbol_to_coordinate(s).unwrap()));
        }
        assert_eq!(seen.len(), NUM_SYMBOLS);
    }

    #[test]
    fn test_unknown_symbol() {
        let table = PolybiusTable::new();
        for c in ['A', '!', ' ', 'é', '\0'] {
            assert_eq!(
                table.symbol_to_coordinate(c),
                Err(AdfgvxError::UnknownSymbol(c))
            );
        }
    }

    #[test]
    fn test_decode_pair() {
        let table = PolybiusTable::new();
        assert_eq!(table.decode_pair('X', 'X'), Ok('z'));
        assert_eq!(
            table.decode_pair('A', 'B'),
            Err(AdfgvxError::InvalidCoordinate('A', 'B'))
        );
        assert_eq!(
            table.decode_pair('a', 'd'),
            Err(AdfgvxError::InvalidCoordinate('a', 'd'))
        );
    }
}
