//! Matrix transposition, naive and cache-oblivious.
//!
//! Both variants move `src` (rows × cols, row-major) into `dst`
//! (cols × rows, row-major). The naive double loop walks one of the two
//! buffers with stride `cols` the whole way; the recursive variant splits
//! the matrix until the sub-blocks of both buffers fit in cache, whatever
//! size that cache happens to be.

pub mod naive;
pub mod oblivious;

pub use naive::naive_transpose;
pub use oblivious::transpose;
