//! Element-type traits shared by the three engines.
//!
//! Every kernel has a single generic body that gets monomorphized per
//! concrete type. The bounds here are the minimum the recursions need:
//! add, subtract, multiply, and a zero value.

use num_complex::Complex;
use num_traits::{Num, Zero};
use std::ops::{AddAssign, Mul, Sub};

/// Anything the transpose and multiply engines can work on: the four signed
/// integer widths, floats, and `Complex` built over any of them.
///
/// `Zero` already implies `Add`, so the full ring surface is covered.
pub trait Element:
    Copy + Zero + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
}

impl<T> Element for T where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + AddAssign
{
}

/// Scalar types usable as the real/imaginary parts of an FFT buffer.
///
/// The twiddle factors `e^{-2πik/n}` are computed in f64 and then converted
/// into the element's scalar type. For f32/f64 that's the obvious rounding;
/// for integer scalars the conversion truncates, matching what instantiating
/// the transform over `Complex<i32>` and friends means in the first place.
pub trait FftScalar: Copy + Num {
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_fft_scalar {
    ($($t:ty),*) => {
        $(impl FftScalar for $t {
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        })*
    };
}

impl_fft_scalar!(f32, f64, i8, i16, i32, i64);

/// Twiddle factor `ω_n^k = e^{-2πik/n}` in the buffer's scalar type.
#[inline]
pub(crate) fn twiddle<T: FftScalar>(k: usize, n: usize) -> Complex<T> {
    let angle = -2.0 * std::f64::consts::PI * k as f64 / n as f64;
    Complex::new(T::from_f64(angle.cos()), T::from_f64(angle.sin()))
}
