//! Combinators built directly on the iteration kernel.
//!
//! None of these mutate their input, except [`extend`] and [`defaults`] which
//! write into the target record the caller passes explicitly.

use super::{each, Collection};
use crate::value::{Fields, Record, Value};

/// First element of a sequence.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// First `n` elements (the whole sequence if it is shorter than `n`).
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Last element of a sequence.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Last `n` elements, in their original order.
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[seq.len().saturating_sub(n)..]
}

/// Index of the first element equal to `target`.
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(seq, |item, index, _| {
        if found.is_none() && item == target {
            found = Some(index);
        }
    });
    found
}

/// First element passing `predicate`.
pub fn find<'a, C, P>(collection: &'a C, mut predicate: P) -> Option<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut found = None;
    collection.visit(|item, _| {
        if found.is_none() && predicate(item) {
            found = Some(item);
        }
    });
    found
}

/// Elements passing `predicate`, in order.
pub fn filter<'a, C, P>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    collection.visit(|item, _| {
        if predicate(item) {
            kept.push(item);
        }
    });
    kept
}

/// Elements failing `predicate`, in order.
pub fn reject<'a, C, P>(collection: &'a C, mut predicate: P) -> Vec<&'a C::Item>
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |item| !predicate(item))
}

/// First occurrence of every distinct element, in order.
pub fn uniq<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    each(seq, |item, _, _| {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    });
    unique
}

/// Apply `f` to every element, collecting the results in order.
pub fn map<C, U, F>(collection: &C, mut f: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut out = Vec::with_capacity(collection.size());
    collection.visit(|item, _| out.push(f(item)));
    out
}

/// Value of the named field of every element (`None` where it is missing).
pub fn pluck<C>(collection: &C, field: &str) -> Vec<Option<Value>>
where
    C: Collection + ?Sized,
    C::Item: Fields,
{
    map(collection, |item| item.field(field))
}

/// Call a method-like function on every element.
///
/// Dispatch by method name has no static counterpart, so the method is passed
/// as a function value, e.g. `invoke(&words, String::len)`.
pub fn invoke<C, U, F>(collection: &C, method: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    map(collection, method)
}

/// Fold every element into an accumulator, starting from `initial`.
pub fn reduce<C, A, F>(collection: &C, initial: A, mut f: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    let mut total = Some(initial);
    collection.visit(|item, _| {
        total = total.take().map(|acc| f(acc, item));
    });
    // Only a panic inside `f` leaves the slot empty, and that unwinds past here
    match total {
        Some(total) => total,
        None => unreachable!("accumulator is restored after every step"),
    }
}

/// True if any element equals `target`.
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(collection, false, |found, item| found || item == target)
}

/// True if every element passes `predicate` (vacuously true when empty).
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(collection, true, |all, item| all && predicate(item))
}

/// True if at least one element passes `predicate`.
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |item| !predicate(item))
}

/// Copy every entry of `sources` into `target`; later sources win.
pub fn extend<'r>(target: &'r mut Record, sources: &[&Record]) -> &'r mut Record {
    for source in sources {
        each(*source, |value, key, _| {
            target.insert(key, value.clone());
        });
    }
    target
}

/// Copy entries of `sources` into `target` only where `target` lacks the key;
/// earlier sources win.
pub fn defaults<'r>(target: &'r mut Record, sources: &[&Record]) -> &'r mut Record {
    for source in sources {
        each(*source, |value, key, _| {
            if !target.contains_key(key) {
                target.insert(key, value.clone());
            }
        });
    }
    target
}
