use num_complex::Complex;

use crate::element::{FftScalar, twiddle};

/// Naive radix-2 decimation-in-time FFT, in place.
///
/// Splits the buffer into even- and odd-indexed halves, transforms each
/// recursively, and joins them with the twiddle-factor butterfly. The
/// even/odd gather reads with stride 2 at every level, which is what makes
/// this variant cache-hostile for large `n`; it's the correctness baseline
/// the six-step variant is checked against.
///
/// `x.len()` must be a power of two. Length 1 is the identity transform;
/// length 2 is the two-point butterfly `[x0+x1, x0-x1]`.
pub fn naive_fft<T: FftScalar>(x: &mut [Complex<T>]) {
    let n = x.len();
    debug_assert!(n.is_power_of_two() || n <= 1, "FFT length must be a power of two, got {}", n);

    if n <= 1 {
        return;
    }
    if n == 2 {
        let (x0, x1) = (x[0], x[1]);
        x[0] = x0 + x1;
        x[1] = x0 - x1;
        return;
    }

    let half = n / 2;
    let mut even: Vec<Complex<T>> = x.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex<T>> = x.iter().skip(1).step_by(2).copied().collect();

    naive_fft(&mut even);
    naive_fft(&mut odd);

    for k in 0..half {
        let t = twiddle::<T>(k, n) * odd[k];
        x[k] = even[k] + t;
        x[k + half] = even[k] - t;
    }
}
