//! Forward discrete Fourier transform, naive and cache-oblivious.
//!
//! Both variants implement the same Cooley-Tukey recurrence
//! `X[k] = E[k] + ω_n^k·O[k]`, `X[k+n/2] = E[k] - ω_n^k·O[k]` with
//! `ω_n = e^{-2πi/n}`, in place, for power-of-two lengths. They differ only
//! in memory access pattern: the naive decimation-in-time recursion gathers
//! even/odd elements (stride 2) at every level, while the six-step variant
//! rearranges the work so every recursive call sees a contiguous sub-range.
//! For floating scalars the two agree to within 1e-12 per component.

pub mod naive;
pub mod oblivious;

pub use naive::naive_fft;
pub use oblivious::forward_fft;
