//! Column means.

use crate::matrix::Matrix;

/// Column means with an explicit index loop.
///
/// The result vector is allocated once at full length and filled by index.
/// Each column is summed element by element through [`Matrix::get`].
#[allow(clippy::needless_range_loop)]
pub fn column_means_loop(matrix: &Matrix) -> Vec<f64> {
    let rows = matrix.rows();
    let cols = matrix.cols();
    let mut out = vec![0.0; cols];

    for j in 0..cols {
        let mut sum = 0.0;
        for i in 0..rows {
            sum += matrix.get(i, j);
        }
        out[j] = sum / rows as f64;
    }
    out
}

/// Column means by mapping [`mean`] over the columns.
pub fn column_means_apply(matrix: &Matrix) -> Vec<f64> {
    matrix.columns().map(mean).collect()
}

/// Arithmetic mean of a non-empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
