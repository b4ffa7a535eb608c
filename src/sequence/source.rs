//! Sequences that originate elements.
//!
//! - [`values`]: every element of an ordered collection or iterator
//! - [`entries`]: every `(key, value)` tuple of a collection or iterator
//! - [`from_fn`] / [`from_pair_fn`]: elements emitted by a generator closure

use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use super::{PairSequence, Sequence};

// =============================================================================
// Values
// =============================================================================

/// A sequence over the elements of an iterator.
///
/// Created by [`values`]. Restartable whenever the iterator is `Clone`.
#[derive(Debug, Clone)]
pub struct Values<I> {
    iterator: I,
}

/// Creates a sequence producing every element of `iterable` in order.
///
/// Elements are pulled from the iterator one at a time, so an infinite
/// iterator is fine as long as the consumer eventually stops.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, Sequence};
///
/// let mut collected = Vec::new();
/// sequence::values([1, 2, 3]).for_each(|value| collected.push(value));
///
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
pub fn values<I>(iterable: I) -> Values<I::IntoIter>
where
    I: IntoIterator,
{
    Values {
        iterator: iterable.into_iter(),
    }
}

impl<I> Sequence for Values<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        for item in self.iterator {
            consumer(item)?;
        }
        ControlFlow::Continue(())
    }
}

// =============================================================================
// Entries
// =============================================================================

/// A pair sequence over the `(key, value)` tuples of an iterator.
///
/// Created by [`entries`].
#[derive(Debug, Clone)]
pub struct Entries<I> {
    iterator: I,
}

/// Creates a pair sequence producing every `(key, value)` tuple of
/// `iterable` in iteration order.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, PairSequence};
///
/// let mut keys = Vec::new();
/// sequence::entries([("a", 1), ("b", 2)]).for_each_pair(|key, _| keys.push(key));
///
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
pub fn entries<I, K, V>(iterable: I) -> Entries<I::IntoIter>
where
    I: IntoIterator<Item = (K, V)>,
{
    Entries {
        iterator: iterable.into_iter(),
    }
}

impl<I, K, V> PairSequence for Entries<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    fn produce_pairs<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(K, V) -> ControlFlow<()>,
    {
        for (key, value) in self.iterator {
            consumer(key, value)?;
        }
        ControlFlow::Continue(())
    }
}

// =============================================================================
// Generators
// =============================================================================

/// A sequence whose elements are emitted by a generator closure.
///
/// Created by [`from_fn`].
pub struct FromFn<G, T> {
    generator: G,
    item: PhantomData<fn() -> T>,
}

/// Creates a sequence from a generator closure.
///
/// The generator receives an `emit` callback. Every call to `emit` delivers
/// one element to the consumer and returns the consumer's answer. The
/// generator should return as soon as `emit` answers
/// [`ControlFlow::Break`], which the `?` operator does for it. Elements
/// emitted after the consumer stopped are discarded and never reach it.
/// The generator's own return value is ignored: the sequence reports
/// [`ControlFlow::Break`] only when the consumer stopped it.
///
/// The sequence is restartable when the generator is `Clone + FnOnce`, or
/// simply `Fn`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, Sequence};
/// use std::ops::ControlFlow;
///
/// let naturals = sequence::from_fn(|emit: &mut dyn FnMut(u64) -> ControlFlow<()>| {
///     let mut next = 0;
///     loop {
///         emit(next)?;
///         next += 1;
///     }
/// });
///
/// let mut first_three = Vec::new();
/// naturals.produce(|value| {
///     first_three.push(value);
///     if first_three.len() < 3 {
///         ControlFlow::Continue(())
///     } else {
///         ControlFlow::Break(())
///     }
/// });
///
/// assert_eq!(first_three, vec![0, 1, 2]);
/// ```
pub fn from_fn<G, T>(generator: G) -> FromFn<G, T>
where
    G: FnOnce(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    FromFn {
        generator,
        item: PhantomData,
    }
}

impl<G, T> Sequence for FromFn<G, T>
where
    G: FnOnce(&mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>,
{
    type Item = T;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(T) -> ControlFlow<()>,
    {
        let mut stopped = false;
        let mut guarded = |item: T| {
            if stopped {
                return ControlFlow::Break(());
            }
            let flow = consumer(item);
            stopped = flow.is_break();
            flow
        };
        let _ = (self.generator)(&mut guarded);
        if stopped { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    }
}

impl<G: Clone, T> Clone for FromFn<G, T> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            item: PhantomData,
        }
    }
}

impl<G, T> fmt::Debug for FromFn<G, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FromFn(<generator>)")
    }
}

/// A pair sequence whose pairs are emitted by a generator closure.
///
/// Created by [`from_pair_fn`].
pub struct FromPairFn<G, K, V> {
    generator: G,
    pair: PhantomData<fn() -> (K, V)>,
}

/// Creates a pair sequence from a generator closure.
///
/// Behaves like [`from_fn`], with `emit` taking a key and a value.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, PairSequence};
/// use std::ops::ControlFlow;
///
/// let repeated = sequence::from_pair_fn(|emit: &mut dyn FnMut(&'static str, i32) -> ControlFlow<()>| {
///     emit("a", 1)?;
///     emit("a", 2)
/// });
///
/// let mut pairs = Vec::new();
/// repeated.for_each_pair(|key, value| pairs.push((key, value)));
///
/// assert_eq!(pairs, vec![("a", 1), ("a", 2)]);
/// ```
pub fn from_pair_fn<G, K, V>(generator: G) -> FromPairFn<G, K, V>
where
    G: FnOnce(&mut dyn FnMut(K, V) -> ControlFlow<()>) -> ControlFlow<()>,
{
    FromPairFn {
        generator,
        pair: PhantomData,
    }
}

impl<G, K, V> PairSequence for FromPairFn<G, K, V>
where
    G: FnOnce(&mut dyn FnMut(K, V) -> ControlFlow<()>) -> ControlFlow<()>,
{
    type Key = K;
    type Value = V;

    fn produce_pairs<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(K, V) -> ControlFlow<()>,
    {
        let mut stopped = false;
        let mut guarded = |key: K, value: V| {
            if stopped {
                return ControlFlow::Break(());
            }
            let flow = consumer(key, value);
            stopped = flow.is_break();
            flow
        };
        let _ = (self.generator)(&mut guarded);
        if stopped { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    }
}

impl<G: Clone, K, V> Clone for FromPairFn<G, K, V> {
    fn clone(&self) -> Self {
        Self {
            generator: self.generator.clone(),
            pair: PhantomData,
        }
    }
}

impl<G, K, V> fmt::Debug for FromPairFn<G, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FromPairFn(<generator>)")
    }
}
