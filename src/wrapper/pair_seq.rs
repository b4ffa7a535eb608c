//! Chainable facade over a pair sequence.

use std::hash::Hash;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use super::{CollectedMap, DuplicateKeyError, Seq};
use crate::function::PairPredicate;
use crate::sequence::{
    Entries, FilterPairs, FromPairFn, IntoPairs, PairSequence, entries, from_pair_fn,
};

/// A [`PairSequence`] with chainable adapters and materialization.
///
/// Keys are not required to be unique while the sequence is lazy. Only
/// [`Seq2::collect`] (last write wins) and [`Seq2::try_collect_unique`]
/// (first repeat fails) deal with uniqueness.
///
/// # Examples
///
/// ```rust
/// use lazyfn::function::PairPredicate;
/// use lazyfn::wrapper::{CollectedMap, Seq2};
///
/// let numbers = [("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5)];
///
/// let result = Seq2::of(numbers)
///     .filter(PairPredicate::<&str, i32>::new(|_, value| *value > 3))
///     .collect();
///
/// let expected: CollectedMap<_, _> = [("four", 4), ("five", 5)].into_iter().collect();
/// assert_eq!(result, expected);
/// ```
#[derive(Debug, Clone)]
pub struct Seq2<S> {
    sequence: S,
}

impl<S: PairSequence> Seq2<S> {
    /// Wraps an existing pair sequence.
    #[inline]
    pub const fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Unwraps the underlying pair sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.sequence
    }

    /// Keeps only the pairs for which `predicate` returns `true`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Seq2<FilterPairs<S>>
    where
        P: Into<PairPredicate<S::Key, S::Value>>,
    {
        Seq2::new(self.sequence.filter_pairs(predicate))
    }

    /// Converts the pairs into a sequence of [`Pair`](crate::sequence::Pair)
    /// objects, keeping order and duplicates.
    #[inline]
    pub fn into_pairs(self) -> Seq<IntoPairs<S>> {
        Seq::new(self.sequence.into_pairs())
    }

    /// Collects the pairs into a map.
    ///
    /// When a key is produced more than once, the last value produced for it
    /// is kept.
    pub fn collect(self) -> CollectedMap<S::Key, S::Value>
    where
        S::Key: Eq + Hash,
    {
        let collected: CollectedMap<S::Key, S::Value> = self.collect_into();
        trace!(event = "collect_map", entries = collected.len());
        collected
    }

    /// Collects the pairs into any default-constructible collection of
    /// `(key, value)` tuples.
    pub fn collect_into<C>(self) -> C
    where
        C: Default + Extend<(S::Key, S::Value)>,
    {
        let mut collection = C::default();
        self.sequence
            .for_each_pair(|key, value| collection.extend(std::iter::once((key, value))));
        collection
    }

    /// Collects the pairs into a `Vec` of tuples, in production order and
    /// with duplicate keys kept.
    pub fn collect_pairs(self) -> Vec<(S::Key, S::Value)> {
        let collected: Vec<(S::Key, S::Value)> = self.collect_into();
        trace!(event = "collect_pairs", pairs = collected.len());
        collected
    }

    /// Collects the pairs into a map, requiring every key to be unique.
    ///
    /// Production stops at the first repeated key.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] carrying the repeated key and its
    /// zero-based position when a key is produced more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::wrapper::Seq2;
    ///
    /// let error = Seq2::of([("a", 1), ("b", 2), ("a", 3)])
    ///     .try_collect_unique()
    ///     .unwrap_err();
    ///
    /// assert_eq!(error.key, "a");
    /// assert_eq!(error.position, 2);
    /// ```
    pub fn try_collect_unique(
        self,
    ) -> Result<CollectedMap<S::Key, S::Value>, DuplicateKeyError<S::Key>>
    where
        S::Key: Eq + Hash,
    {
        let mut collected = CollectedMap::default();
        let mut duplicate = None;
        let mut position = 0;

        let _ = self.sequence.produce_pairs(|key, value| {
            if collected.contains_key(&key) {
                duplicate = Some(DuplicateKeyError { key, position });
                return ControlFlow::Break(());
            }
            collected.insert(key, value);
            position += 1;
            ControlFlow::Continue(())
        });

        match duplicate {
            Some(error) => {
                debug!(event = "duplicate_key", position = error.position);
                Err(error)
            }
            None => {
                trace!(event = "collect_unique", entries = collected.len());
                Ok(collected)
            }
        }
    }
}

impl<I, K, V> Seq2<Entries<I>>
where
    I: Iterator<Item = (K, V)>,
{
    /// Creates a pair sequence over every `(key, value)` tuple of `iterable`.
    #[inline]
    pub fn of<C>(iterable: C) -> Self
    where
        C: IntoIterator<Item = (K, V), IntoIter = I>,
    {
        Self::new(entries(iterable))
    }
}

impl<G, K, V> Seq2<FromPairFn<G, K, V>>
where
    G: FnOnce(&mut dyn FnMut(K, V) -> ControlFlow<()>) -> ControlFlow<()>,
{
    /// Creates a pair sequence from a generator closure.
    ///
    /// See [`from_pair_fn`](crate::sequence::from_pair_fn).
    #[inline]
    pub fn from_fn(generator: G) -> Self {
        Self::new(from_pair_fn(generator))
    }
}

impl<S: PairSequence> PairSequence for Seq2<S> {
    type Key = S::Key;
    type Value = S::Value;

    #[inline]
    fn produce_pairs<C>(self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Key, Self::Value) -> ControlFlow<()>,
    {
        self.sequence.produce_pairs(consumer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_last_write_wins() {
        let collected = Seq2::of([("a", 1), ("a", 2)]).collect();

        assert_eq!(collected.len(), 1);
        assert_eq!(collected.get("a"), Some(&2));
    }

    #[test]
    fn test_try_collect_unique_accepts_unique_keys() {
        let collected = Seq2::of([("a", 1), ("b", 2)]).try_collect_unique();

        assert_eq!(collected.map(|map| map.len()), Ok(2));
    }

    #[test]
    fn test_collect_pairs_keeps_duplicates() {
        let pairs = Seq2::of([("a", 1), ("a", 2)]).collect_pairs();

        assert_eq!(pairs, vec![("a", 1), ("a", 2)]);
    }
}
