//! Predicates over a key/value pair.
//!
//! [`PairPredicate`] mirrors [`Predicate`](super::Predicate) for pair
//! sequences, and its combinators follow the same evaluation order.

use std::fmt;

use super::{PairPredicateFunction, PredicateList, ReferenceCounter, Shareable};

/// A shared predicate over a key of type `K` and a value of type `V`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::function::PairPredicate;
///
/// let value_above_three = PairPredicate::<&str, i32>::new(|_, value| *value > 3);
///
/// assert!(value_above_three.test(&"four", &4));
/// assert!(!value_above_three.test(&"two", &2));
/// ```
pub struct PairPredicate<K: ?Sized, V: ?Sized> {
    function: ReferenceCounter<PairPredicateFunction<K, V>>,
}

impl<K: ?Sized, V: ?Sized> PairPredicate<K, V> {
    /// Creates a pair predicate from a closure.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&K, &V) -> bool + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Evaluates the predicate against a key and a value.
    #[inline]
    pub fn test(&self, key: &K, value: &V) -> bool {
        (self.function)(key, value)
    }
}

impl<K: ?Sized + 'static, V: ?Sized + 'static> PairPredicate<K, V> {
    /// Combines this predicate with additional predicates using logical OR.
    ///
    /// The additional predicates run first, in the order supplied, and the
    /// first `true` wins. `self` is evaluated last and only if every
    /// additional predicate returned `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::function::PairPredicate;
    ///
    /// let value_above_three = PairPredicate::<&str, i32>::new(|_, value| *value > 3);
    /// let key_is_one = PairPredicate::<&str, i32>::new(|key, _| *key == "one");
    ///
    /// let combined = value_above_three.combine([key_is_one]);
    ///
    /// assert!(combined.test(&"one", &1));
    /// assert!(combined.test(&"four", &4));
    /// assert!(!combined.test(&"two", &2));
    /// ```
    #[must_use]
    pub fn combine<I>(self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let predicates: PredicateList<Self> = predicates.into_iter().collect();
        let base = self;
        Self::new(move |key: &K, value: &V| {
            predicates
                .iter()
                .any(|predicate| predicate.test(key, value))
                || base.test(key, value)
        })
    }

    /// Returns a predicate that inverts the result of this one.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |key: &K, value: &V| !self.test(key, value))
    }

    /// Returns a predicate that is vetoed by any of `vetoes`.
    ///
    /// The first veto returning `true` forces the result to `false` and
    /// `self` is not evaluated. Otherwise the result of `self` is returned.
    #[must_use]
    pub fn unless<I>(self, vetoes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let vetoes: PredicateList<Self> = vetoes.into_iter().collect();
        let base = self;
        Self::new(move |key: &K, value: &V| {
            !vetoes.iter().any(|veto| veto.test(key, value)) && base.test(key, value)
        })
    }
}

impl<K: ?Sized, V: ?Sized> Clone for PairPredicate<K, V> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<K: ?Sized, V: ?Sized, F> From<F> for PairPredicate<K, V>
where
    F: Fn(&K, &V) -> bool + Shareable + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<K: ?Sized, V: ?Sized> fmt::Debug for PairPredicate<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PairPredicate(<function>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_inverts_pair_predicate() {
        let key_is_one = PairPredicate::<&str, i32>::new(|key, _| *key == "one");
        let key_is_not_one = key_is_one.not();

        assert!(!key_is_not_one.test(&"one", &1));
        assert!(key_is_not_one.test(&"two", &2));
    }

    #[test]
    fn test_unless_vetoes_matching_keys() {
        let any = PairPredicate::<&str, i32>::new(|_, _| true);
        let key_is_two = PairPredicate::<&str, i32>::new(|key, _| *key == "two");
        let filtered = any.unless([key_is_two]);

        assert!(filtered.test(&"one", &1));
        assert!(!filtered.test(&"two", &2));
    }
}
