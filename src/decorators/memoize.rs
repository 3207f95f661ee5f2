use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::trace;

/// Memoizing wrapper keyed on the full argument list.
///
/// The argument tuple itself is the cache key, compared structurally through
/// `Hash + Eq`: equal arguments hit the cache even when they are distinct
/// instances. Use [`Value`](crate::Value) for dynamically typed arguments.
///
/// The table only grows. Entries live as long as the wrapper; there is no
/// eviction.
pub struct Memoized<F, A, R> {
    func: F,
    cache: HashMap<A, R>,
}

/// Wrap `func` so each distinct argument list is computed once.
pub fn memoize<F, A, R>(func: F) -> Memoized<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoized {
        func,
        cache: HashMap::new(),
    }
}

/// Like [`memoize`] for fallible functions: only `Ok` results are stored, so a
/// failed call is retried next time.
pub fn try_memoize<F, A, R, E>(func: F) -> Memoized<F, A, R>
where
    F: FnMut(A) -> Result<R, E>,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoized {
        func,
        cache: HashMap::new(),
    }
}

impl<F, A, R> Memoized<F, A, R>
where
    A: Hash + Eq + Clone,
    R: Clone,
{
    /// Return the cached result for `args`, computing and storing it on a miss.
    pub fn call(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        if let Some(hit) = self.cache.get(&args) {
            trace!(entries = self.cache.len(), "memoize: cache hit");
            return hit.clone();
        }
        let result = (self.func)(args.clone());
        self.cache.insert(args, result.clone());
        trace!(entries = self.cache.len(), "memoize: cache miss, stored");
        result
    }

    /// Fallible variant of [`call`](Self::call). Errors are not cached.
    pub fn try_call<E>(&mut self, args: A) -> Result<R, E>
    where
        F: FnMut(A) -> Result<R, E>,
    {
        if let Some(hit) = self.cache.get(&args) {
            trace!(entries = self.cache.len(), "memoize: cache hit");
            return Ok(hit.clone());
        }
        let result = (self.func)(args.clone())?;
        self.cache.insert(args, result.clone());
        trace!(entries = self.cache.len(), "memoize: cache miss, stored");
        Ok(result)
    }

    /// Cached result for `args`, without computing anything.
    pub fn cached(&self, args: &A) -> Option<&R> {
        self.cache.get(args)
    }

    /// Number of distinct argument lists cached so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<F, A, R> fmt::Debug for Memoized<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("entries", &self.cache.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Record, Value};
    use std::cell::Cell;

    #[test]
    fn test_equal_arguments_hit_cache() {
        let calls = Cell::new(0);
        let mut add = memoize(|(a, b): (i64, i64)| {
            calls.set(calls.get() + 1);
            a + b
        });

        assert_eq!(add.call((2, 3)), 5);
        assert_eq!(add.call((2, 3)), 5);
        assert_eq!(calls.get(), 1);

        // Same first argument, different second: a new key
        assert_eq!(add.call((2, 4)), 6);
        assert_eq!(calls.get(), 2);
        assert_eq!(add.cached_len(), 2);
    }

    #[test]
    fn test_distinct_instances_with_equal_value() {
        let calls = Cell::new(0);
        let mut describe = memoize(|(record,): (Value,)| {
            calls.set(calls.get() + 1);
            record.as_map().map_or(0, Record::len)
        });

        let a = Value::Map(Record::from_iter([("x", 1), ("y", 2)]));
        let b = Value::Map(Record::from_iter([("y", 2), ("x", 1)]));
        assert_eq!(describe.call((a,)), 2);
        assert_eq!(describe.call((b,)), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_wrappers_keep_separate_caches() {
        let calls = Cell::new(0);
        let square = |(n,): (i64,)| {
            calls.set(calls.get() + 1);
            n * n
        };
        let mut left = memoize(square);
        let mut right = memoize(square);

        assert_eq!(left.call((3,)), 9);
        assert_eq!(left.call((3,)), 9);
        assert_eq!(calls.get(), 1);

        // A fresh wrapper around the same function starts empty
        assert_eq!(right.cached(&(3,)), None);
        assert_eq!(right.call((3,)), 9);
        assert_eq!(calls.get(), 2);
        assert_eq!((left.cached_len(), right.cached_len()), (1, 1));
    }

    #[test]
    fn test_errors_are_retried() {
        let calls = Cell::new(0);
        let mut parse = try_memoize(|(s,): (String,)| {
            calls.set(calls.get() + 1);
            s.parse::<i32>()
        });

        assert!(parse.try_call(("x".to_string(),)).is_err());
        assert!(parse.try_call(("x".to_string(),)).is_err());
        assert_eq!(calls.get(), 2);
        assert_eq!(parse.cached_len(), 0);

        assert_eq!(parse.try_call(("42".to_string(),)), Ok(42));
        assert_eq!(parse.try_call(("42".to_string(),)), Ok(42));
        assert_eq!(calls.get(), 3);
        assert_eq!(parse.cached(&("42".to_string(),)), Some(&42));
    }
}
