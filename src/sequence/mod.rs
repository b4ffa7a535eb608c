//! Lazy, push-based sequences.
//!
//! A [`Sequence`] does not store elements. It knows how to replay one pass of
//! production: [`Sequence::produce`] hands every element, one at a time, to a
//! consumer, and the consumer answers with [`ControlFlow`] to ask for the next
//! element or to stop. Once the consumer stops, nothing further is produced.
//!
//! [`PairSequence`] is the same abstraction over key/value pairs. Keys are not
//! required to be unique; uniqueness only appears when a pair sequence is
//! materialized into a map.
//!
//! # Adapters
//!
//! - [`filter`] / [`filter_pairs`]: keep only the elements accepted by a
//!   predicate
//! - [`map`]: transform every element
//! - [`concat`]: flatten a sequence of sequences
//! - [`PairSequence::into_pairs`] / [`Sequence::unpair`]: convert between pair
//!   sequences and sequences of [`Pair`] objects
//!
//! Adapters never reorder elements and hold at most the element currently in
//! flight.
//!
//! # Restarting
//!
//! Consuming a sequence takes it by value. Sequences built over a fixed
//! collection are `Clone`, and adapters are `Clone` when their source is, so
//! a clone can be consumed again from the start.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::sequence::{self, Sequence};
//! use std::ops::ControlFlow;
//!
//! let evens = sequence::values(1..=10).filter(|value: &i32| value % 2 == 0);
//!
//! let mut seen = Vec::new();
//! evens.produce(|value| {
//!     seen.push(value);
//!     if seen.len() == 3 {
//!         ControlFlow::Break(())
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//!
//! assert_eq!(seen, vec![2, 4, 6]);
//! ```

mod concat;
mod filter;
mod map;
mod pair;
mod source;

use std::ops::ControlFlow;

use crate::function::{PairPredicate, Predicate, Transform};

pub use concat::{Concat, concat};
pub use filter::{Filter, FilterPairs, filter, filter_pairs};
pub use map::{Map, map};
pub use pair::{IntoPairs, Pair, Unpair};
pub use source::{Entries, FromFn, FromPairFn, Values, entries, from_fn, from_pair_fn, values};

/// A lazily produced sequence of items.
///
/// Implementors only provide [`Sequence::produce`]; the adapters are built on
/// top of it.
pub trait Sequence {
    /// The type of the produced elements.
    type Item;

    /// Produces every element to `consumer`, in order, until the consumer
    /// returns [`ControlFlow::Break`] or the sequence is exhausted.
    ///
    /// Returns `Break(())` if the consumer stopped production and
    /// `Continue(())` if the sequence ran to completion.
    fn produce<C>(self, consumer: C) -> ControlFlow<()>
    where
        Self: Sized,
        C: FnMut(Self::Item) -> ControlFlow<()>;

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// See [`filter`].
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self>
    where
        Self: Sized,
        P: Into<Predicate<Self::Item>>,
    {
        filter(self, predicate)
    }

    /// Transforms every element with `transform`.
    ///
    /// See [`map`].
    #[inline]
    fn map<O, F>(self, transform: F) -> Map<Self, O>
    where
        Self: Sized,
        F: Into<Transform<Self::Item, O>>,
    {
        map(self, transform)
    }

    /// Flattens a sequence of sequences.
    ///
    /// See [`concat`].
    #[inline]
    fn concat(self) -> Concat<Self>
    where
        Self: Sized,
        Self::Item: Sequence,
    {
        concat(self)
    }

    /// Turns a sequence of [`Pair`] objects into a [`PairSequence`].
    #[inline]
    fn unpair<K, V>(self) -> Unpair<Self>
    where
        Self: Sized + Sequence<Item = Pair<K, V>>,
    {
        Unpair::new(self)
    }

    /// Calls `action` on every element.
    #[inline]
    fn for_each<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        let _ = self.produce(|item| {
            action(item);
            ControlFlow::Continue(())
        });
    }
}

/// A lazily produced sequence of key/value pairs.
pub trait PairSequence {
    /// The type of the produced keys.
    type Key;
    /// The type of the produced values.
    type Value;

    /// Produces every pair to `consumer`, in order, until the consumer returns
    /// [`ControlFlow::Break`] or the sequence is exhausted.
    fn produce_pairs<C>(self, consumer: C) -> ControlFlow<()>
    where
        Self: Sized,
        C: FnMut(Self::Key, Self::Value) -> ControlFlow<()>;

    /// Keeps only the pairs for which `predicate` returns `true`.
    ///
    /// See [`filter_pairs`].
    #[inline]
    fn filter_pairs<P>(self, predicate: P) -> FilterPairs<Self>
    where
        Self: Sized,
        P: Into<PairPredicate<Self::Key, Self::Value>>,
    {
        filter_pairs(self, predicate)
    }

    /// Turns the pairs into a [`Sequence`] of [`Pair`] objects.
    #[inline]
    fn into_pairs(self) -> IntoPairs<Self>
    where
        Self: Sized,
    {
        IntoPairs::new(self)
    }

    /// Calls `action` on every pair.
    #[inline]
    fn for_each_pair<F>(self, mut action: F)
    where
        Self: Sized,
        F: FnMut(Self::Key, Self::Value),
    {
        let _ = self.produce_pairs(|key, value| {
            action(key, value);
            ControlFlow::Continue(())
        });
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn produce<C>(self, consumer: C) -> ControlFlow<()>
    where
        C: FnMut(T) -> ControlFlow<()>,
    {
        values(self).produce(consumer)
    }
}
