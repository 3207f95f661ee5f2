//! Arbitrary-depth flattening
//!
//! Walks the nesting with an explicit stack of slice iterators, so depth is
//! bounded by heap memory rather than the native call stack. The stack holds
//! one iterator per open level: O(depth) space.

use crate::value::Value;

/// View of one element of a nested sequence.
#[derive(Debug)]
pub enum Shape<'a, S, L> {
    /// A nested sequence to descend into.
    Seq(&'a [S]),
    /// A leaf to emit.
    Leaf(&'a L),
}

/// Element type of a possibly nested sequence.
pub trait Nested: Sized {
    /// Type of the non-sequence elements.
    type Leaf: Clone;

    /// Classify this element as a nested sequence or a leaf.
    fn shape(&self) -> Shape<'_, Self, Self::Leaf>;
}

/// Typed nested sequence: a leaf value or a sequence of further nests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nest<T> {
    /// Non-sequence element.
    Leaf(T),
    /// Nested sequence (possibly empty).
    Seq(Vec<Nest<T>>),
}

impl<T> From<T> for Nest<T> {
    fn from(value: T) -> Self {
        Nest::Leaf(value)
    }
}

impl<T: Clone> Nested for Nest<T> {
    type Leaf = T;

    fn shape(&self) -> Shape<'_, Self, T> {
        match self {
            Nest::Leaf(value) => Shape::Leaf(value),
            Nest::Seq(items) => Shape::Seq(items),
        }
    }
}

/// Lists are sequences; every other value (maps included) is a leaf.
impl Nested for Value {
    type Leaf = Value;

    fn shape(&self) -> Shape<'_, Self, Value> {
        match self {
            Value::List(items) => Shape::Seq(items),
            other => Shape::Leaf(other),
        }
    }
}

/// Flatten `seq` into its leaves, depth-first and left to right.
///
/// Empty nested sequences contribute nothing.
pub fn flatten<N: Nested>(seq: &[N]) -> Vec<N::Leaf> {
    let mut leaves = Vec::with_capacity(seq.len());
    let mut stack = vec![seq.iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(item) => match item.shape() {
                Shape::Leaf(leaf) => leaves.push(leaf.clone()),
                Shape::Seq(children) => stack.push(children.iter()),
            },
            None => {
                stack.pop();
            }
        }
    }

    leaves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq<T>(items: Vec<Nest<T>>) -> Nest<T> {
        Nest::Seq(items)
    }

    #[test]
    fn test_flatten_mixed_depths() {
        let input = vec![
            Nest::Leaf(1),
            seq(vec![Nest::Leaf(2), seq(vec![Nest::Leaf(3), seq(vec![Nest::Leaf(4)])])]),
            Nest::Leaf(5),
        ];
        assert_eq!(flatten(&input), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_nested_sequences_contribute_nothing() {
        let input = vec![seq(vec![]), Nest::Leaf('a'), seq(vec![seq(vec![])]), Nest::Leaf('b')];
        assert_eq!(flatten(&input), vec!['a', 'b']);

        let empty: Vec<Nest<u8>> = vec![];
        assert!(flatten(&empty).is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let input = vec![seq(vec![Nest::Leaf(1), Nest::Leaf(2)]), Nest::Leaf(3)];
        let before = input.clone();
        let _ = flatten(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut nest = Nest::Leaf(7u32);
        for _ in 0..100_000 {
            nest = seq(vec![nest]);
        }
        assert_eq!(flatten(std::slice::from_ref(&nest)), vec![7]);
        // Nest's derived Drop recurses; unwind it iteratively.
        let mut current = nest;
        while let Nest::Seq(mut items) = current {
            current = items.pop().unwrap_or(Nest::Leaf(0));
        }
    }

    #[test]
    fn test_value_lists_flatten_maps_stay_whole() {
        let record = crate::value::Record::from_iter([("k", 1)]);
        let input = vec![
            Value::from_iter([Value::Int(1), Value::from_iter([2, 3])]),
            Value::Map(record.clone()),
        ];
        assert_eq!(
            flatten(&input),
            vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Map(record)]
        );
    }
}
