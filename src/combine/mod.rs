//! Combining many predicates into one.
//!
//! Unlike [`Predicate::combine`](crate::function::Predicate::combine), which
//! evaluates a base predicate last, the helpers in this module treat every
//! supplied predicate as a peer and evaluate them strictly in the order
//! supplied, stopping at the first `true`.
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::combine;
//! use lazyfn::function::Predicate;
//! use lazyfn::sequence::{self, Sequence};
//!
//! let greater_than_three = Predicate::new(|value: &i32| *value > 3);
//! let equals_one = Predicate::new(|value: &i32| *value == 1);
//!
//! let either = combine::predicates([greater_than_three, equals_one]);
//!
//! let mut kept = Vec::new();
//! sequence::values([1, 2, 3, 4, 5])
//!     .filter(either)
//!     .for_each(|value| kept.push(value));
//!
//! assert_eq!(kept, vec![1, 4, 5]);
//! ```

use crate::function::{PairPredicate, Predicate, PredicateList};

/// Returns a predicate that is `true` if any of `predicates` is `true`.
///
/// The predicates are evaluated left to right and evaluation stops at the
/// first `true`. An empty list produces a predicate that is always `false`.
pub fn predicates<T, I>(predicates: I) -> Predicate<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Predicate<T>>,
{
    let predicates: PredicateList<Predicate<T>> = predicates.into_iter().collect();
    Predicate::new(move |item: &T| predicates.iter().any(|predicate| predicate.test(item)))
}

/// Returns a pair predicate that is `true` if any of `predicates` is `true`.
///
/// Evaluation follows the same rules as [`predicates`].
///
/// # Examples
///
/// ```rust
/// use lazyfn::combine;
/// use lazyfn::function::PairPredicate;
///
/// let value_above_three = PairPredicate::<&str, i32>::new(|_, value| *value > 3);
/// let key_is_one = PairPredicate::<&str, i32>::new(|key, _| *key == "one");
///
/// let either = combine::pair_predicates([value_above_three, key_is_one]);
///
/// assert!(either.test(&"one", &1));
/// assert!(either.test(&"five", &5));
/// assert!(!either.test(&"two", &2));
/// ```
pub fn pair_predicates<K, V, I>(predicates: I) -> PairPredicate<K, V>
where
    K: ?Sized + 'static,
    V: ?Sized + 'static,
    I: IntoIterator<Item = PairPredicate<K, V>>,
{
    let predicates: PredicateList<PairPredicate<K, V>> = predicates.into_iter().collect();
    PairPredicate::new(move |key: &K, value: &V| {
        predicates
            .iter()
            .any(|predicate| predicate.test(key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_always_false() {
        let none = predicates::<i32, _>(Vec::new());

        assert!(!none.test(&0));
        assert!(!none.test(&1));
    }

    #[test]
    fn test_single_predicate_is_unchanged() {
        let only = predicates([Predicate::new(|value: &i32| *value == 2)]);

        assert!(only.test(&2));
        assert!(!only.test(&3));
    }
}
