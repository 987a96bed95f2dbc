/// Naive matrix transpose: `dst = src^T`.
///
/// The textbook double loop. Reads of `src` are sequential but writes to
/// `dst` jump by `rows` elements every iteration, so for matrices larger
/// than cache one line is evicted per write. Use as a correctness baseline.
///
/// # Arguments
///
/// * `src` - Source matrix (rows × cols), row-major
/// * `dst` - Destination matrix (cols × rows), row-major
/// * `rows` - Number of rows in src
/// * `cols` - Number of columns in src
///
/// # Panics
///
/// Panics if the slice lengths don't match `rows * cols`.
///
/// # Example
///
/// ```
/// use cache_oblivious::naive_transpose;
///
/// let src = vec![1, 2, 3,   // 2×3 matrix
///                4, 5, 6];
/// let mut dst = vec![0; 6]; // will be 3×2
///
/// naive_transpose(&src, &mut dst, 2, 3);
///
/// assert_eq!(dst, vec![1, 4,
///                      2, 5,
///                      3, 6]);
/// ```
pub fn naive_transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), cols * rows, "dst: expected {}x{}={} elements", cols, rows, cols * rows);

    for i in 0..rows {
        for j in 0..cols {
            dst[j * rows + i] = src[i * cols + j];
        }
    }
}
