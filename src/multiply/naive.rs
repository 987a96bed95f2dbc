use crate::element::Element;

/// Naive matrix multiplication using i-j-k loop order.
///
/// The textbook triple loop. The innermost loop reads `b` with stride `n`
/// (column-wise), missing cache on every iteration once the matrices
/// outgrow it. Use as a correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, accumulated into (C += A * B)
/// * `m` - Rows of A and C
/// * `k` - Columns of A, rows of B
/// * `n` - Columns of B and C
///
/// # Panics
///
/// Panics if the slice sizes don't match m, k, n.
pub fn naive_multiply<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    k: usize,
    n: usize,
) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    for i in 0..m {
        for j in 0..n {
            for p in 0..k {
                c[i * n + j] += a[i * k + p] * b[p * n + j];
            }
        }
    }
}
