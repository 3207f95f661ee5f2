//! Function decorators
//!
//! Each factory wraps a function and returns a value owning the retained
//! state for that one wrapper:
//!
//! | Factory | Wrapper | Retained state |
//! |---|---|---|
//! | [`once`] | [`Once`] | pending function or cached result |
//! | [`memoize`] | [`Memoized`] | argument key → result table |
//! | [`delay`] | [`DelayHandle`] | scheduled task |
//! | [`throttle`] | [`Throttled`] | idle / active window |
//!
//! State is never global: two wrappers around the same function are
//! independent.
//!
//! ## Arity
//!
//! A wrapped function receives its whole argument list as one tuple, so a
//! two-argument function is written `|(a, b): (i64, i64)| ...` and called as
//! `wrapper.call((1, 2))`.
//!
//! ## Failures
//!
//! A panic inside the wrapped function propagates to the caller unchanged.
//! The `try_call` variants of [`Once`] and [`Memoized`] return an `Err`
//! unchanged and do not cache it, so the next call retries.

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::{delay, DelayHandle};
pub use memoize::{memoize, try_memoize, Memoized};
pub use once::{once, try_once, Once};
pub use throttle::{throttle, ThrottleConfig, Throttled};
