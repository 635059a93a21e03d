//! Keyed columnar transposition: the fractionating half of ADFGVX.
//!
//! The coordinate letter stream is laid row-major into a
//! [`TranspositionMatrix`] as wide as the key. Its columns are then read out
//! in key order. Unfilled cells of the last row hold [`Cell::Empty`], which
//! is a separate variant and so can never be confused with a real letter.
//!
//! ```text
//! key      B A B          read-out order: A(1) B(0) B(2)
//! stream   A D D
//!          D D D          column 1: DDDV
//!          A D A          column 0: ADAG
//!          G V G          column 2: DDAG
//! ```

use log::debug;

use crate::error::AdfgvxError;
use crate::key::Key;

/// One cell of the transposition matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell<T> {
    /// A letter of the coordinate stream.
    Letter(T),
    /// Padding that fills out the final row.
    Empty,
}

impl<T: Copy> Cell<T> {
    /// Returns the letter, or `None` for padding.
    pub(crate) fn letter(self) -> Option<T> {
        match self {
            Cell::Letter(t) => Some(t),
            Cell::Empty => None,
        }
    }
}

/// Row-major grid of cells with a fixed column count.
///
/// Every row has exactly `columns` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TranspositionMatrix<T> {
    columns: usize,
    cells: Vec<Cell<T>>,
}

impl<T: Copy> TranspositionMatrix<T> {
    /// Lays a letter stream into rows of `columns` cells.
    ///
    /// A non-empty stream shorter than one row becomes a single padded row;
    /// otherwise the last row is padded up to full width. The matrix has
    /// `ceil(stream.len() / columns)` rows.
    ///
    /// # Parameters
    /// - `stream`: Letters in encryption order.
    /// - `columns`: Row width (the key length, at least 1).
    pub(crate) fn from_stream(stream: &[T], columns: usize) -> Self {
        let rows = stream.len().div_ceil(columns);
        let mut cells: Vec<Cell<T>> = Vec::with_capacity(rows * columns);
        cells.extend(stream.iter().map(|&t| Cell::Letter(t)));
        cells.resize(rows * columns, Cell::Empty);
        TranspositionMatrix { columns, cells }
    }

    /// Rebuilds a matrix from top-aligned columns.
    ///
    /// The row count is the length of the longest column. Shorter columns
    /// are padded at the bottom.
    ///
    /// # Parameters
    /// - `columns`: Column contents in original (unsorted) column order.
    pub(crate) fn from_columns(columns: &[Vec<T>]) -> Self {
        let width = columns.len();
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = vec![Cell::Empty; rows * width];
        for (j, column) in columns.iter().enumerate() {
            for (i, &t) in column.iter().enumerate() {
                cells[i * width + j] = Cell::Letter(t);
            }
        }
        TranspositionMatrix {
            columns: width,
            cells,
        }
    }

    /// Returns the number of rows.
    pub(crate) fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cells.len() / self.columns
        }
    }

    /// Iterates column `j` from top to bottom, padding included.
    pub(crate) fn column(&self, j: usize) -> impl Iterator<Item = Cell<T>> + '_ {
        self.cells.iter().skip(j).step_by(self.columns).copied()
    }

    /// Iterates the letters in row-major order, skipping padding.
    pub(crate) fn letters(&self) -> impl Iterator<Item = T> + '_ {
        self.cells.iter().filter_map(|c| c.letter())
    }
}

/// Transposes a letter stream into key-ordered column groups.
///
/// Group `i` is the column whose key character has rank `i`, read top to
/// bottom with padding removed. Exactly `key.columns()` groups are
/// returned; some may be empty when the stream is shorter than the key.
pub(crate) fn scatter<T: Copy>(stream: &[T], key: &Key) -> Vec<Vec<T>> {
    let matrix = TranspositionMatrix::from_stream(stream, key.columns());
    debug!("Transposition matrix : {} x {}", matrix.rows(), key.columns());
    key.sorted_order()
        .iter()
        .map(|&j| matrix.column(j).filter_map(Cell::letter).collect())
        .collect()
}

/// Inverts [`scatter`]: restores the letter stream from key-ordered groups.
///
/// # Errors
/// Returns [`AdfgvxError::MalformedCiphertext`] if the number of groups is
/// not the key length.
pub(crate) fn gather<T: Copy>(groups: Vec<Vec<T>>, key: &Key) -> Result<Vec<T>, AdfgvxError> {
    if groups.len() != key.columns() {
        return Err(AdfgvxError::MalformedCiphertext {
            expected: key.columns(),
            found: groups.len(),
        });
    }

    let mut columns: Vec<Vec<T>> = vec![Vec::new(); key.columns()];
    for (group, &j) in groups.into_iter().zip(key.sorted_order()) {
        columns[j] = group;
    }

    let matrix = TranspositionMatrix::from_columns(&columns);
    debug!("Transposition matrix : {} x {}", matrix.rows(), key.columns());
    Ok(matrix.letters().collect())
}
