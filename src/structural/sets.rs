//! Multi-sequence set operations
//!
//! Both operations keep the order of the first sequence and compare elements
//! by value (`PartialEq`), so they work for unhashable element types such as
//! floats. Membership checks are linear: O(n · m) for n elements in the first
//! sequence and m elements across the rest.

use crate::collection::{contains, every, filter, some, uniq};

/// Distinct elements of the first sequence that appear in every other one.
///
/// First-occurrence order is preserved. With a single sequence this is its
/// deduplicated form; with none, the result is empty.
pub fn intersection<T, S>(seqs: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    let candidates = uniq(head.as_ref());
    filter(&candidates, |item| every(rest, |other| contains(other.as_ref(), item)))
        .into_iter()
        .cloned()
        .collect()
}

/// Elements of the first sequence that appear in none of the others.
///
/// Order and duplicates of the first sequence are kept as-is.
pub fn difference<T, S>(seqs: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    filter(head.as_ref(), |item| !some(rest, |other| contains(other.as_ref(), item)))
        .into_iter()
        .cloned()
        .collect()
}
