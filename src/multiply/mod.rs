//! Matrix multiplication, naive and cache-oblivious.
//!
//! Both variants compute `C += A * B` with `a` m × k, `b` k × n and
//! `c` m × n, all row-major. The accumulate contract (rather than
//! overwrite) is what lets the recursive variant's k-split run its two
//! halves into the same output region without extra bookkeeping; callers
//! wanting `C = A * B` pass a zeroed `c`.

pub mod naive;
pub mod oblivious;

pub use naive::naive_multiply;
pub use oblivious::multiply;
