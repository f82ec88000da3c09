//! Dense matrices and the random generator that feeds the sweep.
//!
//! Storage is column-major so that every column is one contiguous slice.
//! Both statistic variants walk the matrix column by column, so this keeps
//! the comparison about the iteration idiom and not about strided access.

pub mod generate;
pub mod transpose;

pub use generate::{MatrixGenerator, ValueRange};

use crate::error::{BenchError, Result};

/// An `rows × cols` matrix of `f64`, column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Wrap a column-major buffer.
    ///
    /// Fails if either dimension is zero or the buffer length doesn't match.
    pub fn from_columns(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BenchError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(BenchError::InvalidConfig(format!(
                "matrix buffer holds {} values, expected {}x{}={}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from a row-major buffer, which reads naturally in test literals.
    pub fn from_rows(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BenchError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(BenchError::InvalidConfig(format!(
                "matrix buffer holds {} values, expected {}x{}={}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        let data = transpose::row_major_to_column_major(data, rows, cols);
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows × columns, the size metric on the sweep's x-axis.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Element at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows, "row {} out of bounds ({})", row, self.rows);
        self.data[col * self.rows + row]
    }

    /// Column `col` as a contiguous slice.
    #[inline]
    pub fn column(&self, col: usize) -> &[f64] {
        let start = col * self.rows;
        &self.data[start..start + self.rows]
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.rows)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
