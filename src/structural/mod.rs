//! Structural algorithms over ordered sequences
//!
//! All of these return new vectors and leave their input untouched:
//! - [`flatten`]: arbitrary-depth flattening, depth-first, left to right
//! - [`zip`]: position-wise tuples padded to the longest input
//! - [`intersection`] / [`difference`]: multi-sequence set operations that
//!   keep the first sequence's order
//! - [`shuffle`]: uniform random permutation (Fisher–Yates)
//! - [`sort_by`] / [`sort_by_key`]: stable ordering by a derived key

mod flatten;
mod sets;
mod shuffle;
mod sort;
mod zip;

pub use flatten::{flatten, Nest, Nested, Shape};
pub use sets::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_key, SortKey};
pub use zip::zip;
