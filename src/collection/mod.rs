//! Iteration kernel
//!
//! Everything in this crate that walks a collection goes through
//! [`Collection::visit`], directly or via [`each`]:
//! - Ordered sequences yield `(element, index)`
//! - Keyed mappings yield `(value, &key)` in the mapping's own order
//!
//! Each element is visited exactly once. Mutating a collection while it is
//! being visited is ruled out by the shared borrow.

mod combinators;

pub use combinators::{
    contains, defaults, every, extend, filter, find, first, first_n, index_of, invoke, last,
    last_n, map, pluck, reduce, reject, some, uniq,
};

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use crate::value::{Record, Value};

/// A container that can be visited element by element, in order.
pub trait Collection {
    /// Element (sequence) or value (mapping) type.
    type Item;

    /// Position handed to the visitor: an index or a borrowed key.
    type Key<'a>
    where
        Self: 'a;

    /// Call `f(item, key)` once per element, in order.
    fn visit<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>);

    /// Number of elements.
    fn size(&self) -> usize;
}

/// Call `f(value, index_or_key, collection)` for every element of
/// `collection`. Return values of `f` are ignored.
pub fn each<'a, C, F>(collection: &'a C, mut f: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.visit(|item, key| f(item, key, collection));
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn visit<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        self.as_slice().visit(f);
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn visit<'a, F>(&'a self, f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        self.as_slice().visit(f);
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        for (index, item) in self.iter().enumerate() {
            f(item, index);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a> = &'a K where Self: 'a;

    fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        for (key, value) in self {
            f(value, key);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a> = &'a K where Self: 'a;

    fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        for (key, value) in self {
            f(value, key);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Collection for Record {
    type Item = Value;
    type Key<'a> = &'a str;

    fn visit<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>),
    {
        for (key, value) in self.iter() {
            f(value, key);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_visits_sequence_in_order() {
        let seq = vec!['a', 'b', 'c'];
        let mut seen = Vec::new();
        each(&seq, |item, index, coll| {
            assert_eq!(coll.len(), 3);
            seen.push((*item, index));
        });
        assert_eq!(seen, [('a', 0), ('b', 1), ('c', 2)]);
    }

    #[test]
    fn test_each_visits_mapping_keys() {
        let map = BTreeMap::from([("x", 1), ("y", 2)]);
        let mut seen = Vec::new();
        each(&map, |value, key, _| seen.push((*key, *value)));
        assert_eq!(seen, [("x", 1), ("y", 2)]);
    }

    #[test]
    fn test_each_on_record_follows_insertion_order() {
        let record = Record::from_iter([("z", 1), ("a", 2)]);
        let mut keys = Vec::new();
        each(&record, |_, key, _| keys.push(key.to_string()));
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn test_each_on_empty_is_noop() {
        let empty: Vec<u8> = Vec::new();
        let mut calls = 0;
        each(&empty, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(empty.size(), 0);
    }
}
