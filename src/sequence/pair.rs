//! Conversion between pair sequences and sequences of [`Pair`] objects.
//!
//! Both directions are lossless: converting a pair sequence into pairs and
//! back yields the same `(key, value)` occurrences in the same order,
//! duplicate keys included.

use std::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PairSequence, Sequence};

/// An explicit key/value object.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::Pair;
///
/// let pair = Pair::new("one", 1);
/// assert_eq!(pair.into_tuple(), ("one", 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair<K, V> {
    /// The key.
    pub key: K,
    /// The value.
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from a key and a value.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the pair into a `(key, value)` tuple.
    #[inline]
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Pair<K, V>> for (K, V) {
    fn from(pair: Pair<K, V>) -> Self {
        pair.into_tuple()
    }
}

/// A sequence of [`Pair`] objects built from a pair sequence.
///
/// Created by [`PairSequence::into_pairs`].
#[derive(Debug, Clone)]
pub struct IntoPairs<S> {
    source: S,
}

impl<S> IntoPairs<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: PairSequence> Sequence for IntoPairs<S> {
    type Item = Pair<S::Key, S::Value>;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        self.source
            .produce_pairs(|key, value| consumer(Pair::new(key, value)))
    }
}

/// A pair sequence built from a sequence of [`Pair`] objects.
///
/// Created by [`Sequence::unpair`].
#[derive(Debug, Clone)]
pub struct Unpair<S> {
    source: S,
}

impl<S> Unpair<S> {
    pub(crate) const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S, K, V> PairSequence for Unpair<S>
where
    S: Sequence<Item = Pair<K, V>>,
{
    type Key = K;
    type Value = V;

    fn produce_pairs<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(K, V) -> ControlFlow<()>,
    {
        self.source
            .produce(|Pair { key, value }| consumer(key, value))
    }
}
