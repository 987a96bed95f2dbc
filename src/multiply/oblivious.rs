//! Cache-oblivious multiplication by recursive halving of the largest
//! dimension.

use crate::element::Element;

/// Recursion cutoff: once m, k and n are all at or below this, the naive
/// triple loop finishes the block. A leaf touches three blocks of at most
/// 16×16 elements, cache-resident on anything this crate will run on.
const LEAF: usize = 16;

/// Cache-oblivious matrix multiplication: `C += A * B`.
///
/// Each level of the recursion halves whichever of `m`, `k`, `n` is
/// currently largest:
///
/// - splitting `m` or `n` yields two sub-products writing disjoint halves
///   of `c`, recursed independently;
/// - splitting `k` yields two half-depth products that both accumulate into
///   the *same* region of `c`, run one after the other - the `+=` contract
///   means their contributions simply sum, with nothing double-counted.
///
/// Always attacking the largest dimension keeps the recursion tree balanced
/// no matter the aspect ratio, which is what makes the algorithm oblivious:
/// sub-problems shrink toward cache residency without the code knowing any
/// cache geometry.
///
/// Same layout contract as [`naive_multiply`](crate::naive_multiply):
/// `a` is m × k, `b` is k × n, `c` is m × n, all row-major, `c` disjoint
/// from both inputs.
///
/// # Panics
///
/// Panics if the slice sizes don't match m, k, n.
pub fn multiply<T: Element>(a: &[T], b: &[T], c: &mut [T], m: usize, k: usize, n: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert_eq!(c.len(), m * n, "C: expected {}x{}={} elements", m, n, m * n);

    rec(a, b, c, 0, m, 0, k, 0, n, k, n);
}

/// Multiply the sub-block `A[i0..i1][p0..p1] * B[p0..p1][j0..j1]` into
/// `C[i0..i1][j0..j1]`.
///
/// `lda` and `ldn` are the row strides of the full A matrix and of the full
/// B/C matrices; sub-blocks are addressed in place through them.
#[allow(clippy::too_many_arguments)]
fn rec<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    i0: usize,
    i1: usize,
    p0: usize,
    p1: usize,
    j0: usize,
    j1: usize,
    lda: usize,
    ldn: usize,
) {
    let m = i1 - i0;
    let k = p1 - p0;
    let n = j1 - j0;

    if m <= LEAF && k <= LEAF && n <= LEAF {
        for i in i0..i1 {
            for p in p0..p1 {
                let a_ip = a[i * lda + p];
                for j in j0..j1 {
                    c[i * ldn + j] += a_ip * b[p * ldn + j];
                }
            }
        }
        return;
    }

    if m >= k && m >= n {
        // Split rows of A and C: disjoint output halves.
        let mid = i0 + m / 2;
        rec(a, b, c, i0, mid, p0, p1, j0, j1, lda, ldn);
        rec(a, b, c, mid, i1, p0, p1, j0, j1, lda, ldn);
    } else if n >= k {
        // Split columns of B and C: disjoint output halves.
        let mid = j0 + n / 2;
        rec(a, b, c, i0, i1, p0, p1, j0, mid, lda, ldn);
        rec(a, b, c, i0, i1, p0, p1, mid, j1, lda, ldn);
    } else {
        // Split the inner dimension: both halves accumulate into the same
        // region of C, so they run sequentially.
        let mid = p0 + k / 2;
        rec(a, b, c, i0, i1, p0, mid, j0, j1, lda, ldn);
        rec(a, b, c, i0, i1, mid, p1, j0, j1, lda, ldn);
    }
}
