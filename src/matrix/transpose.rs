/// Convert a row-major buffer into column-major order.
///
/// Column j of the input becomes the contiguous run
/// `dst[j * rows..(j + 1) * rows]`, which is how [`Matrix`](super::Matrix)
/// stores its data.
///
/// # Example
///
/// ```
/// use colstat::matrix::transpose::row_major_to_column_major;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3, written row by row
///                4.0, 5.0, 6.0];
///
/// let dst = row_major_to_column_major(&src, 2, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // column 0
///                      2.0, 5.0,   // column 1
///                      3.0, 6.0]); // column 2
/// ```
///
/// # Panics
///
/// Panics if `src.len() != rows * cols`.
pub fn row_major_to_column_major(src: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    assert_eq!(
        src.len(),
        rows * cols,
        "expected {}x{}={} elements",
        rows,
        cols,
        rows * cols
    );

    let mut dst = vec![0.0; rows * cols];
    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
    dst
}
