//! Lazy mapping of sequences.

use std::ops::ControlFlow;

use super::Sequence;
use crate::function::Transform;

/// A sequence of transformed elements.
///
/// Created by [`map`] or [`Sequence::map`].
pub struct Map<S: Sequence, O> {
    source: S,
    transform: Transform<S::Item, O>,
}

/// Returns a sequence producing `transform(element)` for every element of
/// `sequence`, in the same order.
///
/// Each element is transformed and delivered before the next one is pulled.
/// After the consumer stops, no further elements are pulled and no further
/// transforms run.
///
/// # Examples
///
/// ```rust
/// use lazyfn::sequence::{self, Sequence};
///
/// let mut strings = Vec::new();
/// sequence::map(vec![1, 2, 3], |value: i32| value.to_string())
///     .for_each(|value| strings.push(value));
///
/// assert_eq!(strings, vec!["1", "2", "3"]);
/// ```
pub fn map<S, O, F>(sequence: S, transform: F) -> Map<S, O>
where
    S: Sequence,
    F: Into<Transform<S::Item, O>>,
{
    Map {
        source: sequence,
        transform: transform.into(),
    }
}

impl<S: Sequence, O> Sequence for Map<S, O> {
    type Item = O;

    fn produce<C>(self, mut consumer: C) -> ControlFlow<()>
    where
        C: FnMut(O) -> ControlFlow<()>,
    {
        let transform = self.transform;
        self.source.produce(|item| consumer(transform.apply(item)))
    }
}

impl<S: Sequence + Clone, O> Clone for Map<S, O> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            transform: self.transform.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::values;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_map_stops_transforming_after_break() {
        let transforms = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&transforms);
        let mut pulled = 0;
        let source = values((1..).inspect(|_| pulled += 1));

        let result = map(source, move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value * 10
        })
        .produce(|value| {
            if value == 30 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(result, ControlFlow::Break(()));
        assert_eq!(transforms.load(Ordering::SeqCst), 3);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn test_map_changes_item_type() {
        let mut lengths = Vec::new();
        map(vec!["a", "bb", "ccc"], |value: &str| value.len()).for_each(|length| lengths.push(length));

        assert_eq!(lengths, vec![1, 2, 3]);
    }
}
