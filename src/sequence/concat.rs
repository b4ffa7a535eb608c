//! Flattening a sequence of sequences.

use std::ops::ControlFlow;

use super::Sequence;

/// A sequence producing the elements of each inner sequence in turn.
///
/// Created by [`concat`] or [`Sequence::concat`].
#[derive(Debug, Clone)]
pub struct Concat<S> {
    source: S,
}

/// Flattens `sequences` in order: every element of the first inner sequence,
/// then every element of the second, and so on.
///
/// When the consumer stops, the current inner sequence stops and no further
/// inner sequences are pulled from the outer one.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, Sequence};
///
/// let mut flattened = Vec::new();
/// sequence::concat(vec![vec![1, 2], vec![3], vec![4, 5]]).for_each(|value| flattened.push(value));
///
/// assert_eq!(flattened, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat<S>(sequences: S) -> Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    Concat { source: sequences }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(Self::Item) -> ControlFlow<()>,
    {
        self.source.produce(|inner| inner.produce(&mut consumer))
    }
}
