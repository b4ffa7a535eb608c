//! Chainable facade over an item sequence.

use std::ops::ControlFlow;

use tracing::trace;

use super::Seq2;
use crate::function::{Predicate, Transform};
use crate::sequence::{
    Concat, Filter, FromFn, Map, Pair, Sequence, Unpair, Values, from_fn, values,
};

/// A [`Sequence`] with chainable adapters and materialization.
///
/// # Examples
///
/// ```rust
/// use lazyfn::wrapper::Seq;
///
/// let result = Seq::of(vec![vec![1, 2], vec![3], vec![4, 5]])
///     .concat()
///     .filter(|value: &i32| value % 2 == 1)
///     .map(|value: i32| value * 10)
///     .collect();
///
/// assert_eq!(result, vec![10, 30, 50]);
/// ```
#[derive(Debug, Clone)]
pub struct Seq<S> {
    sequence: S,
}

impl<S: Sequence> Seq<S> {
    /// Wraps an existing sequence.
    #[inline]
    pub const fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Unwraps the underlying sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.sequence
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Seq<Filter<S>>
    where
        P: Into<Predicate<S::Item>>,
    {
        Seq::new(self.sequence.filter(predicate))
    }

    /// Transforms every element with `transform`.
    #[inline]
    pub fn map<O, F>(self, transform: F) -> Seq<Map<S, O>>
    where
        F: Into<Transform<S::Item, O>>,
    {
        Seq::new(self.sequence.map(transform))
    }

    /// Flattens a sequence of sequences.
    #[inline]
    pub fn concat(self) -> Seq<Concat<S>>
    where
        S::Item: Sequence,
    {
        Seq::new(self.sequence.concat())
    }

    /// Turns a sequence of [`Pair`] objects into a pair sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::sequence::Pair;
    /// use lazyfn::wrapper::Seq;
    ///
    /// let pairs = Seq::of([Pair::new("a", 1), Pair::new("b", 2)])
    ///     .unpair()
    ///     .collect_pairs();
    ///
    /// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    /// ```
    #[inline]
    pub fn unpair<K, V>(self) -> Seq2<Unpair<S>>
    where
        S: Sequence<Item = Pair<K, V>>,
    {
        Seq2::new(self.sequence.unpair())
    }

    /// Collects the elements into a `Vec`, in production order.
    pub fn collect(self) -> Vec<S::Item> {
        let collected: Vec<S::Item> = self.collect_into();
        trace!(event = "collect", elements = collected.len());
        collected
    }

    /// Collects the elements into any default-constructible collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::wrapper::Seq;
    /// use std::collections::BTreeSet;
    ///
    /// let unique: BTreeSet<i32> = Seq::of([3, 1, 3, 2]).collect_into();
    /// assert_eq!(unique.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn collect_into<C>(self) -> C
    where
        C: Default + Extend<S::Item>,
    {
        let mut collection = C::default();
        self.sequence
            .for_each(|item| collection.extend(std::iter::once(item)));
        collection
    }
}

impl<I: Iterator> Seq<Values<I>> {
    /// Creates a sequence over every element of `iterable`.
    #[inline]
    pub fn of<C>(iterable: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self::new(values(iterable))
    }
}

impl<G, T> Seq<FromFn<G, T>>
where
    G: FnOnce(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    /// Creates a sequence from a generator closure.
    ///
    /// See [`from_fn`](crate::sequence::from_fn).
    #[inline]
    pub fn from_fn(generator: G) -> Self {
        Self::new(from_fn(generator))
    }
}

impl<S: Sequence> Sequence for Seq<S> {
    type Item = S::Item;

    #[inline]
    fn produce<C>(self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        self.sequence.produce(consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keeps_duplicates() {
        assert_eq!(Seq::of([1, 1, 2, 1]).collect(), vec![1, 1, 2, 1]);
    }

    #[test]
    fn test_collect_of_empty_sequence() {
        assert!(Seq::of(Vec::<i32>::new()).collect().is_empty());
    }

    #[test]
    fn test_seq_is_restartable_when_cloned() {
        let doubled = Seq::of(vec![1, 2, 3]).map(|value: i32| value * 2);

        assert_eq!(doubled.clone().collect(), vec![2, 4, 6]);
        assert_eq!(doubled.collect(), vec![2, 4, 6]);
    }
}
