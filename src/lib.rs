//! Cache-oblivious numeric kernels in Rust, built from scratch.
//!
//! I built this to understand why recursive divide-and-conquer beats plain
//! loops on big arrays without knowing anything about the machine's caches.
//! Three classic operations, each in two flavors: a textbook baseline and a
//! cache-oblivious version that recursively halves its largest dimension
//! until the working set fits in *whatever* cache is there.
//!
//! ## Usage
//!
//! ```
//! use cache_oblivious::transpose;
//!
//! let a: Vec<i32> = (0..256 * 512).collect();
//! let mut b = vec![0i32; 512 * 256];
//!
//! transpose(&a, &mut b, 256, 512);
//! ```
//!
//! The FFT works in place on a complex buffer of power-of-two length:
//!
//! ```
//! use cache_oblivious::forward_fft;
//! use num_complex::Complex;
//!
//! let mut x = vec![Complex::new(1.0f64, 0.0); 1024];
//! forward_fft(&mut x);
//! ```
//!
//! ## What's inside
//!
//! - Transpose: recursive halving of the larger dimension
//! - Multiply: recursive halving of the largest of m, k, n
//! - FFT: six-step Cooley-Tukey over a √n × √n view of the buffer
//! - All generic over i8/i16/i32/i64, `Complex` of each, and f32/f64
//!
//! Everything is a pure function over caller-owned row-major buffers. No
//! state, no allocation beyond recursion-local scratch, no cache-size
//! probing anywhere.

pub mod data;
pub mod element;
pub mod fft;
pub mod multiply;
pub mod transpose;

pub use element::{Element, FftScalar};
pub use fft::naive::naive_fft;
pub use fft::oblivious::forward_fft;
pub use multiply::naive::naive_multiply;
pub use multiply::oblivious::multiply;
pub use transpose::naive::naive_transpose;
pub use transpose::oblivious::transpose;
