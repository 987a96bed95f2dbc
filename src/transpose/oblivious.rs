//! Cache-oblivious transpose by recursive halving.

/// Below this many rows *and* columns the recursion stops and the plain
/// double loop finishes the block. Small enough that a leaf's working set
/// (two blocks of at most 16×16 elements) sits in any L1 worth the name,
/// large enough that call overhead doesn't dominate.
const LEAF: usize = 16;

/// Cache-oblivious matrix transpose: `dst = src^T`.
///
/// Splits the larger of the two remaining dimensions in half and recurses
/// on the two sub-matrices. The two halves touch disjoint ranges of both
/// buffers, so the order between them doesn't matter. For any matrix bigger
/// than the cache, some level of the recursion produces blocks that fit
/// entirely in it - without the code ever knowing the cache size. That's
/// the whole trick; there are no tuning constants to get wrong besides the
/// leaf cutoff.
///
/// Same contract as [`naive_transpose`](crate::naive_transpose): `src` is
/// rows × cols row-major, `dst` is cols × rows row-major, and the two must
/// be distinct buffers (the borrow checker enforces that for you).
///
/// # Panics
///
/// Panics if the slice lengths don't match `rows * cols`.
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "src: expected {}x{}={} elements", rows, cols, rows * cols);
    assert_eq!(dst.len(), cols * rows, "dst: expected {}x{}={} elements", cols, rows, cols * rows);

    split(src, dst, 0, rows, 0, cols, rows, cols);
}

/// Transpose the sub-block `[r0, r1) × [c0, c1)` of the full matrix.
///
/// `rows` and `cols` are the *full* matrix extents; sub-blocks are addressed
/// through the original row strides, never copied out.
fn split<T: Copy>(
    src: &[T],
    dst: &mut [T],
    r0: usize,
    r1: usize,
    c0: usize,
    c1: usize,
    rows: usize,
    cols: usize,
) {
    let h = r1 - r0;
    let w = c1 - c0;

    if h <= LEAF && w <= LEAF {
        for i in r0..r1 {
            for j in c0..c1 {
                dst[j * rows + i] = src[i * cols + j];
            }
        }
        return;
    }

    // Halve whichever dimension is larger so the recursion tree stays
    // balanced regardless of the input's aspect ratio.
    if h >= w {
        let mid = r0 + h / 2;
        split(src, dst, r0, mid, c0, c1, rows, cols);
        split(src, dst, mid, r1, c0, c1, rows, cols);
    } else {
        let mid = c0 + w / 2;
        split(src, dst, r0, r1, c0, mid, rows, cols);
        split(src, dst, r0, r1, mid, c1, rows, cols);
    }
}
