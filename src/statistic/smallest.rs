//! Mean of the smallest values in each column.
//!
//! Each column is sorted ascending and the first [`SMALLEST_COUNT`] entries
//! are averaged. Columns shorter than that average every value they have.

use crate::matrix::Matrix;

/// How many of the smallest values go into each column's mean.
pub const SMALLEST_COUNT: usize = 6;

/// Explicit-loop version.
///
/// The result vector and one scratch column are allocated up front and
/// reused; the scratch buffer is overwritten for every column.
#[allow(clippy::needless_range_loop)]
pub fn column_smallest_mean_loop(matrix: &Matrix) -> Vec<f64> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let take = SMALLEST_COUNT.min(rows);

    let mut out = vec![0.0; cols];
    let mut scratch = vec![0.0; rows];

    for j in 0..cols {
        for i in 0..rows {
            scratch[i] = matrix.get(i, j);
        }
        scratch.sort_unstable_by(f64::total_cmp);

        let mut sum = 0.0;
        for i in 0..take {
            sum += scratch[i];
        }
        out[j] = sum / take as f64;
    }
    out
}

/// Higher-order version: [`smallest_mean`] mapped over the columns.
pub fn column_smallest_mean_apply(matrix: &Matrix) -> Vec<f64> {
    matrix.columns().map(smallest_mean).collect()
}

/// Mean of the `SMALLEST_COUNT` smallest values of a non-empty slice.
pub fn smallest_mean(column: &[f64]) -> f64 {
    let mut sorted = column.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let smallest = &sorted[..SMALLEST_COUNT.min(sorted.len())];
    smallest.iter().sum::<f64>() / smallest.len() as f64
}
