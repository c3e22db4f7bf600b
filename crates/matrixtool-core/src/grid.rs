//! Rectangular numeric grids.
//!
//! ## Learning: Newtypes
//!
//! `Grid` wraps `nalgebra::DMatrix<f64>` instead of exposing it directly.
//! The wrapper is the only way to build a grid from user data, so every
//! `Grid` in the program is known to be rectangular and non-empty.
//! Arithmetic is still delegated to nalgebra through [`Grid::as_matrix`].

use nalgebra::DMatrix;
use std::fmt;

use crate::parser::ParseError;

/// Dimensions of a grid as `(rows, cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns true when the grid has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// A rectangular table of real numbers with at least one row and one column.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    matrix: DMatrix<f64>,
}

impl Grid {
    /// Builds a grid from rows of values.
    ///
    /// Rows must all have the same, non-zero length. Ragged input is
    /// rejected rather than padded.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ParseError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(ParseError::EmptyInput),
        };

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(ParseError::RaggedRows {
                expected,
                row: index + 1,
                found: row.len(),
            });
        }

        let row_count = rows.len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Self {
            matrix: DMatrix::from_row_slice(row_count, expected, &data),
        })
    }

    /// Wraps a matrix produced by nalgebra arithmetic on existing grids.
    ///
    /// Callers only pass results of operations on non-empty grids, which
    /// are themselves non-empty.
    pub(crate) fn from_matrix(matrix: DMatrix<f64>) -> Self {
        debug_assert!(matrix.nrows() > 0 && matrix.ncols() > 0);
        Self { matrix }
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.matrix.nrows(), self.matrix.ncols())
    }

    pub fn rows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn cols(&self) -> usize {
        self.matrix.ncols()
    }

    /// Returns the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.matrix.get((row, col)).copied()
    }

    /// Returns one row as an owned vector.
    pub fn row(&self, index: usize) -> Option<Vec<f64>> {
        (index < self.rows()).then(|| self.matrix.row(index).iter().copied().collect())
    }

    /// Iterates over the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        self.matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
    }

    /// Converts the grid back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().collect()
    }

    /// Borrows the underlying nalgebra matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

impl TryFrom<Vec<Vec<f64>>> for Grid {
    type Error = ParseError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
