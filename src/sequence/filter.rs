//! Lazy filtering of sequences and pair sequences.

use std::ops::ControlFlow;

use super::{PairSequence, Sequence};
use crate::function::{PairPredicate, Predicate};

/// A sequence keeping only the elements accepted by a predicate.
///
/// Created by [`filter`] or [`Sequence::filter`].
pub struct Filter<S: Sequence> {
    source: S,
    predicate: Predicate<S::Item>,
}

/// Returns a sequence containing only the elements of `sequence` for which
/// `predicate` returns `true`, in their original order.
///
/// The predicate runs once per source element, in source order, and only for
/// elements reached before the consumer stops. A stop from the consumer is
/// propagated to `sequence` immediately.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, Sequence};
///
/// let mut kept = Vec::new();
/// sequence::filter(vec![1, 2, 3, 4, 5], |value: &i32| *value > 3)
///     .for_each(|value| kept.push(value));
///
/// assert_eq!(kept, vec![4, 5]);
/// ```
pub fn filter<S, P>(sequence: S, predicate: P) -> Filter<S>
where
    S: Sequence,
    P: Into<Predicate<S::Item>>,
{
    Filter {
        source: sequence,
        predicate: predicate.into(),
    }
}

impl<S: Sequence> Sequence for Filter<S> {
    type Item = S::Item;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        let predicate = self.predicate;
        self.source.produce(|item| {
            if predicate.test(&item) {
                consumer(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<S: Sequence + Clone> Clone for Filter<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

/// A pair sequence keeping only the pairs accepted by a pair predicate.
///
/// Created by [`filter_pairs`] or [`PairSequence::filter_pairs`].
pub struct FilterPairs<S: PairSequence> {
    source: S,
    predicate: PairPredicate<S::Key, S::Value>,
}

/// Returns a pair sequence containing only the pairs of `sequence` for which
/// `predicate` returns `true`, in their original order.
///
/// Follows the same evaluation and early-termination rules as [`filter`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::function::PairPredicate;
/// use lazyfn::sequence::{self, PairSequence};
///
/// let value_above_three = PairPredicate::<&str, i32>::new(|_, value| *value > 3);
///
/// let mut kept = Vec::new();
/// sequence::filter_pairs(sequence::entries([("one", 1), ("four", 4)]), value_above_three)
///     .for_each_pair(|key, value| kept.push((key, value)));
///
/// assert_eq!(kept, vec![("four", 4)]);
/// ```
pub fn filter_pairs<S, P>(sequence: S, predicate: P) -> FilterPairs<S>
where
    S: PairSequence,
    P: Into<PairPredicate<S::Key, S::Value>>,
{
    FilterPairs {
        source: sequence,
        predicate: predicate.into(),
    }
}

impl<S: PairSequence> PairSequence for FilterPairs<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn produce_pairs<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Key, Self::Value) -> ControlFlow<()>,
    {
        let predicate = self.predicate;
        self.source.produce_pairs(|key, value| {
            if predicate.test(&key, &value) {
                consumer(key, value)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<S: PairSequence + Clone> Clone for FilterPairs<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: self.predicate.clone(),
        }
    }
}
