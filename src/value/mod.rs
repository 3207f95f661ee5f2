//! Dynamic values
//!
//! A small tagged value model for heterogeneous data: the kind of records a
//! caller sorts by field name, plucks from, or nests arbitrarily deep.
//!
//! Equality, ordering and hashing are structural and mutually consistent, so a
//! `Value` (or a tuple of them) is a canonical memoization key.

mod ops;
mod record;

pub use record::Record;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No value. Also used as the explicit "absent" marker (e.g. zip padding).
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Insertion-ordered keyed mapping.
    Map(Record),
}

impl Value {
    /// Short lowercase name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// True for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the elements if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the record if this is a map.
    pub fn as_map(&self) -> Option<&Record> {
        match self {
            Value::Map(record) => Some(record),
            _ => None,
        }
    }

    /// Integer payload, if any.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// String payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            Value::List(_) => 4,
            Value::Map(_) => 5,
        }
    }
}

/// Collapse `-0.0` onto `0.0` and every NaN onto one payload.
fn canonical_float(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x.is_nan() {
        f64::NAN
    } else {
        x
    }
}

/// Exact numeric comparison of an integer with a float.
///
/// `a as f64` rounds above 2^53, so a tie after the cast is settled on the
/// integer side. Rounding is monotonic, which makes any non-tie exact.
fn cmp_int_float(a: i64, b: f64) -> Ordering {
    match (a as f64).total_cmp(&canonical_float(b)) {
        // A tie means `b` is whole and within one rounding step of `a`
        Ordering::Equal if b >= 9_223_372_036_854_775_808.0 => Ordering::Less,
        Ordering::Equal => a.cmp(&(b as i64)),
        unequal => unequal,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => {
                canonical_float(*a).total_cmp(&canonical_float(*b))
            }
            // Mixed numbers compare numerically; ints sort first on a tie
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b).then(Ordering::Less),
            (Value::Float(a), Value::Int(b)) => {
                cmp_int_float(*b, *a).reverse().then(Ordering::Greater)
            }
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Float(x) => canonical_float(*x).to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) => items.hash(state),
            Value::Map(record) => record.hash(state),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Map(record)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

/// Named-field access, used by key-name sorting and plucking.
///
/// Implement this for your own record types to sort them with
/// [`SortKey::field`](crate::SortKey::field).
pub trait Fields {
    /// Value of the named field, or `None` if it does not exist.
    fn field(&self, name: &str) -> Option<Value>;
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Fields for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_map().and_then(|record| record.field(name))
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}
