//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use underbar::{Record, Value};

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=underbar=trace cargo test`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Record with a name field `n` and an age field `a`.
pub fn person(name: &str, age: i64) -> Record {
    Record::from_iter([("n", Value::from(name)), ("a", Value::from(age))])
}

/// Integer list value.
pub fn ints(items: &[i64]) -> Value {
    items.iter().copied().collect()
}
