//! Random input generation for the benchmarks and tests.
//!
//! The kernels themselves never allocate or generate anything; this module
//! is the collaborator that hands them freshly filled buffers. Integer
//! samples are kept small so that repeated multiply-accumulate doesn't
//! overflow the narrow widths in debug builds.

use num_complex::Complex;
use rand::Rng;

/// Types we can fill a buffer with.
pub trait Sample {
    fn sample<R: Rng>(rng: &mut R) -> Self;
}

impl Sample for f32 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-1.0..1.0)
    }
}

impl Sample for f64 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-1.0..1.0)
    }
}

impl Sample for i8 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-2..2)
    }
}

impl Sample for i16 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-100..100)
    }
}

impl Sample for i32 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-100..100)
    }
}

impl Sample for i64 {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        rng.random_range(-100..100)
    }
}

impl<T: Sample> Sample for Complex<T> {
    fn sample<R: Rng>(rng: &mut R) -> Self {
        Complex::new(T::sample(rng), T::sample(rng))
    }
}

/// Freshly allocated rows × cols matrix of pseudo-random values.
pub fn random_matrix<T: Sample>(rng: &mut impl Rng, rows: usize, cols: usize) -> Vec<T> {
    (0..rows * cols).map(|_| T::sample(rng)).collect()
}

/// Freshly allocated length-n vector of pseudo-random values.
pub fn random_vector<T: Sample>(rng: &mut impl Rng, n: usize) -> Vec<T> {
    (0..n).map(|_| T::sample(rng)).collect()
}
