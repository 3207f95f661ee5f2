//! # Functional collection primitives and function decorators
//!
//! Small, composable building blocks over ordered sequences and keyed
//! mappings.
//!
//! ## Components
//!
//! 1. **Iteration kernel**: [`Collection`] and [`each`], visiting every element
//!    (sequence) or entry (mapping) exactly once, in order
//! 2. **Combinators**: locate, filter/reject, dedupe, project, reduce, merge
//! 3. **Decorators**: [`once`], [`memoize`], [`delay`], [`throttle`], each
//!    owning private retained state
//! 4. **Structural algorithms**: [`flatten`], [`zip`], [`intersection`],
//!    [`difference`], [`shuffle`], [`sort_by`]
//!
//! Structural algorithms never mutate their input; they return new vectors.
//!
//! ## Usage Example
//!
//! ```
//! use underbar::{difference, intersection, memoize, once};
//!
//! assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]]), vec![3]);
//! assert_eq!(difference(&[vec![1, 2, 3, 4], vec![2, 4]]), vec![1, 3]);
//!
//! let mut init = once(|(n,): (u32,)| n * 10);
//! assert_eq!(init.call((1,)), 10);
//! assert_eq!(init.call((2,)), 10);
//!
//! let mut add = memoize(|(a, b): (i64, i64)| a + b);
//! assert_eq!(add.call((2, 3)), 5);
//! assert_eq!(add.cached_len(), 1);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod collection; // Iteration kernel and combinators
pub mod decorators; // Stateful function wrappers
pub mod structural; // Flatten, zip, set operations, shuffle, sort
pub mod value; // Dynamic values and records

// Re-exports for convenience
pub use collection::{each, Collection};
pub use decorators::{
    delay, memoize, once, throttle, try_memoize, try_once, DelayHandle, Memoized, Once,
    ThrottleConfig, Throttled,
};
pub use structural::{
    difference, flatten, intersection, shuffle, shuffle_with, sort_by, sort_by_key, zip, Nest,
    Nested, Shape, SortKey,
};
pub use value::{Fields, Record, Value};

use thiserror::Error;

/// Errors raised by the library.
///
/// Every failure is local to the call that produced it; caller-owned
/// collections are never left partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnderbarError {
    /// A scalar was supplied where an ordered sequence or mapping is required.
    #[error("{operation} expects a collection, got {found}")]
    NotACollection {
        /// Operation that rejected the input.
        operation: &'static str,
        /// Type name of the offending value.
        found: &'static str,
    },

    /// Decorator configuration rejected (e.g. a zero throttle window).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `delay` was called outside of a running tokio runtime.
    #[error("no scheduler available: delay must be called from within a tokio runtime")]
    NoScheduler,
}

impl UnderbarError {
    /// Helper for constructing the invalid-input error from a dynamic value.
    pub fn not_a_collection(operation: &'static str, found: &Value) -> Self {
        UnderbarError::NotACollection {
            operation,
            found: found.type_name(),
        }
    }
}
