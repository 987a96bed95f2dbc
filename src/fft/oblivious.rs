//! Cache-oblivious FFT via the six-step factorization.

use num_complex::Complex;
use num_traits::Zero;

use crate::element::{FftScalar, twiddle};
use crate::fft::naive::naive_fft;
use crate::transpose::transpose;

/// At or below this length the six-step machinery costs more than the
/// strided gathers it avoids; hand the buffer to the naive recursion.
const LEAF: usize = 32;

/// Cache-oblivious forward FFT, in place.
///
/// Factors `n = R·C` (both powers of two, `R ≥ C`) and views the buffer as
/// an R × C row-major matrix. The transform then becomes:
///
/// 1. transpose to C × R, so each of the C column-DFTs of length R runs on
///    a contiguous row;
/// 2. FFT each row recursively;
/// 3. transpose back to R × C;
/// 4. scale entry `(c, b)` by the twiddle `ω_n^{bc}`;
/// 5. FFT each length-C row recursively;
/// 6. transpose once more, which lands the spectrum in natural order.
///
/// Every recursive call works on a contiguous sub-range roughly √n long, so
/// some level of the recursion always fits in cache - the transposes
/// themselves are the cache-oblivious [`transpose`] from this crate. One
/// n-element scratch buffer is allocated per level and dropped on return.
///
/// Produces the same spectrum as [`naive_fft`] (within 1e-12 per component
/// for floating scalars). `x.len()` must be a power of two.
pub fn forward_fft<T: FftScalar>(x: &mut [Complex<T>]) {
    let n = x.len();
    debug_assert!(n.is_power_of_two() || n <= 1, "FFT length must be a power of two, got {}", n);

    if n <= LEAF {
        naive_fft(x);
        return;
    }

    let log_n = n.trailing_zeros() as usize;
    let rows = 1 << (log_n - log_n / 2);
    let cols = n / rows;

    let mut scratch = vec![Complex::zero(); n];

    // Step 1+2: columns of the rows×cols view become contiguous rows of
    // scratch; transform each. scratch[b*rows + c] is then the c-th DFT
    // coefficient of column b.
    transpose(x, &mut scratch, rows, cols);
    for row in scratch.chunks_exact_mut(rows) {
        forward_fft(row);
    }

    // Step 3+4: back to rows×cols so the next batch of DFT inputs is
    // contiguous, then twiddle entry (c, b) by ω_n^{bc}.
    transpose(&scratch, x, cols, rows);
    for c in 0..rows {
        for b in 0..cols {
            x[c * cols + b] = x[c * cols + b] * twiddle::<T>(b * c, n);
        }
    }

    // Step 5: length-cols DFT of each row.
    for row in x.chunks_exact_mut(cols) {
        forward_fft(row);
    }

    // Step 6: the spectrum index is q*rows + c for row c, column q of the
    // current view, so one last transpose puts it in natural order.
    transpose(x, &mut scratch, rows, cols);
    x.copy_from_slice(&scratch);
}
