//! Structural algorithms over dynamic values.
//!
//! These validate their input before doing any work: a scalar where a
//! collection is required fails with [`UnderbarError::NotACollection`]
//! instead of producing an empty or partial result.

use rand::Rng;

use super::Value;
use crate::structural::{self, SortKey};
use crate::UnderbarError;

impl Value {
    fn expect_list(&self, operation: &'static str) -> Result<&[Value], UnderbarError> {
        self.as_list()
            .ok_or_else(|| UnderbarError::not_a_collection(operation, self))
    }

    fn expect_lists<'a>(
        seqs: &'a [Value],
        operation: &'static str,
    ) -> Result<Vec<&'a [Value]>, UnderbarError> {
        seqs.iter().map(|seq| seq.expect_list(operation)).collect()
    }

    /// Flatten a list of arbitrarily nested lists into one list.
    pub fn flatten(&self) -> Result<Value, UnderbarError> {
        let items = self.expect_list("flatten")?;
        Ok(Value::List(structural::flatten(items)))
    }

    /// Zip lists into a list of lists, padding with [`Value::Null`].
    pub fn zip(seqs: &[Value]) -> Result<Value, UnderbarError> {
        let lists = Self::expect_lists(seqs, "zip")?;
        Ok(structural::zip::<Value, _>(&lists)
            .into_iter()
            .map(|row| Value::List(row.into_iter().map(Value::from).collect()))
            .collect())
    }

    /// Distinct elements of the first list present in every other list.
    pub fn intersection(seqs: &[Value]) -> Result<Value, UnderbarError> {
        let lists = Self::expect_lists(seqs, "intersection")?;
        Ok(Value::List(structural::intersection(&lists)))
    }

    /// Elements of the first list present in none of the others.
    pub fn difference(seqs: &[Value]) -> Result<Value, UnderbarError> {
        let lists = Self::expect_lists(seqs, "difference")?;
        Ok(Value::List(structural::difference(&lists)))
    }

    /// Random permutation of a list.
    pub fn shuffled(&self) -> Result<Value, UnderbarError> {
        self.shuffled_with(&mut rand::thread_rng())
    }

    /// Random permutation of a list using the supplied RNG.
    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Value, UnderbarError> {
        let items = self.expect_list("shuffle")?;
        Ok(Value::List(structural::shuffle_with(items, rng)))
    }

    /// Stable sort of a list, or of a map's values, by `key`.
    pub fn sort_by(&self, key: SortKey<'_, Value>) -> Result<Value, UnderbarError> {
        let sorted = match self {
            Value::List(items) => structural::sort_by(items, key),
            Value::Map(record) => structural::sort_by(record, key),
            other => return Err(UnderbarError::not_a_collection("sort_by", other)),
        };
        Ok(Value::List(sorted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Fields, Record};

    fn list<const N: usize>(items: [i64; N]) -> Value {
        Value::from_iter(items)
    }

    #[test]
    fn test_scalars_are_rejected() {
        let scalar = Value::from("abc");
        let expected = |operation| UnderbarError::NotACollection {
            operation,
            found: "string",
        };
        assert_eq!(scalar.flatten(), Err(expected("flatten")));
        assert_eq!(scalar.shuffled(), Err(expected("shuffle")));
        assert_eq!(scalar.sort_by(SortKey::field("n")), Err(expected("sort_by")));
        assert_eq!(
            Value::zip(&[list([1]), scalar.clone()]),
            Err(expected("zip"))
        );
        assert_eq!(
            Value::difference(&[list([1]), scalar.clone()]),
            Err(expected("difference"))
        );
        assert_eq!(
            Value::intersection(&[scalar, list([1])]),
            Err(expected("intersection"))
        );
    }

    #[test]
    fn test_empty_inputs_are_neutral() {
        assert_eq!(Value::List(vec![]).flatten(), Ok(Value::List(vec![])));
        assert_eq!(
            Value::difference(&[Value::List(vec![]), list([1, 2])]),
            Ok(Value::List(vec![]))
        );
    }

    #[test]
    fn test_zip_pads_with_null() {
        let letters = Value::from_iter(["a", "b"]);
        let zipped = Value::zip(&[letters, list([1])]).expect("lists");
        assert_eq!(
            zipped,
            Value::from_iter([
                Value::from_iter([Value::from("a"), Value::Int(1)]),
                Value::from_iter([Value::from("b"), Value::Null]),
            ])
        );
    }

    #[test]
    fn test_sort_map_values_by_field() {
        let mut inventory = Record::new();
        inventory.insert("x", Record::from_iter([("qty", 3)]));
        inventory.insert("y", Record::from_iter([("qty", 1)]));
        let sorted = Value::Map(inventory)
            .sort_by(SortKey::field("qty"))
            .expect("map is a collection");
        let quantities: Vec<_> = sorted
            .as_list()
            .expect("sort returns a list")
            .iter()
            .map(|v| v.field("qty"))
            .collect();
        assert_eq!(quantities, vec![Some(Value::Int(1)), Some(Value::Int(3))]);
    }
}
