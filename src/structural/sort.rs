use std::fmt;

use crate::collection::Collection;
use crate::value::{Fields, Value};

/// How [`sort_by`] derives each element's sort key.
pub enum SortKey<'a, T> {
    /// Read the named field; a missing field sorts as [`Value::Null`].
    Field(&'a str),
    /// Call a function on the element.
    Func(Box<dyn Fn(&T) -> Value + 'a>),
}

impl<'a, T> SortKey<'a, T> {
    /// Key by the named field.
    pub fn field(name: &'a str) -> Self {
        SortKey::Field(name)
    }

    /// Key by a function of the element.
    pub fn by<K, F>(f: F) -> Self
    where
        K: Into<Value>,
        F: Fn(&T) -> K + 'a,
    {
        SortKey::Func(Box::new(move |item: &T| -> Value { f(item).into() }))
    }

    fn key_of(&self, item: &T) -> Value
    where
        T: Fields,
    {
        match self {
            SortKey::Field(name) => item.field(name).unwrap_or(Value::Null),
            SortKey::Func(f) => f(item),
        }
    }
}

impl<T> fmt::Debug for SortKey<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            SortKey::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Elements of `collection` sorted ascending by `key`, as a new vector.
///
/// The sort is stable: elements with equal keys keep their original relative
/// order. Keys are derived exactly once per element. Mappings are sorted by
/// their values.
pub fn sort_by<C>(collection: &C, key: SortKey<'_, C::Item>) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Fields + Clone,
{
    sort_by_key(collection, |item| key.key_of(item))
}

/// Typed variant of [`sort_by`]: stable ascending sort by any `Ord` key.
pub fn sort_by_key<C, K, F>(collection: &C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&C::Item) -> K,
{
    let mut keyed = Vec::with_capacity(collection.size());
    collection.visit(|item, _| keyed.push((key(item), item)));
    // slice::sort_by is stable
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}
