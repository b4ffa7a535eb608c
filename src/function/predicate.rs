//! Predicates over a single item.
//!
//! A [`Predicate`] decides whether an item belongs in a resulting sequence:
//! it returns `true` to keep the item and `false` to drop it.
//!
//! # Evaluation order
//!
//! The combinators document the exact order in which component predicates
//! run. Predicates may have observable side effects, so that order is part of
//! their contract:
//!
//! - [`Predicate::combine`]: the additional predicates left to right, then the
//!   base predicate, stopping at the first `true`
//! - [`Predicate::unless`]: the vetoes left to right, stopping at the first
//!   `true`, then the base predicate only if no veto matched

use std::fmt;

use super::{PredicateFunction, PredicateList, ReferenceCounter, Shareable};

/// A shared predicate over items of type `T`.
///
/// # Type Parameters
///
/// * `T` - The type of the item being tested. The predicate receives `&T`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::function::Predicate;
///
/// let is_even = Predicate::new(|value: &i32| value % 2 == 0);
///
/// assert!(is_even.test(&4));
/// assert!(!is_even.test(&3));
/// ```
pub struct Predicate<T: ?Sized> {
    function: ReferenceCounter<PredicateFunction<T>>,
}

impl<T: ?Sized> Predicate<T> {
    /// Creates a predicate from a closure.
    ///
    /// # Arguments
    ///
    /// * `function` - Returns `true` for items that should be kept
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&T) -> bool + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Evaluates the predicate against `item`.
    #[inline]
    pub fn test(&self, item: &T) -> bool {
        (self.function)(item)
    }
}

impl<T: ?Sized + 'static> Predicate<T> {
    /// Combines this predicate with additional predicates using logical OR.
    ///
    /// The returned predicate evaluates each additional predicate in the
    /// order supplied and returns `true` at the first match. Only when all of
    /// them return `false` is `self` evaluated, and its result is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::function::Predicate;
    ///
    /// let greater_than_three = Predicate::new(|value: &i32| *value > 3);
    /// let equals_one = Predicate::new(|value: &i32| *value == 1);
    ///
    /// let combined = greater_than_three.combine([equals_one]);
    ///
    /// assert!(combined.test(&1));
    /// assert!(combined.test(&4));
    /// assert!(!combined.test(&2));
    /// ```
    #[must_use]
    pub fn combine<I>(self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let predicates: PredicateList<Self> = predicates.into_iter().collect();
        let base = self;
        Self::new(move |item: &T| {
            predicates.iter().any(|predicate| predicate.test(item)) || base.test(item)
        })
    }

    /// Returns a predicate that inverts the result of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::function::Predicate;
    ///
    /// let is_even = Predicate::new(|value: &i32| value % 2 == 0);
    /// let is_odd = is_even.not();
    ///
    /// assert!(is_odd.test(&3));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::new(move |item: &T| !self.test(item))
    }

    /// Returns a predicate that is vetoed by any of `vetoes`.
    ///
    /// The vetoes are evaluated in the order supplied. The first one that
    /// returns `true` makes the result `false` without evaluating `self`.
    /// If no veto matches, the result of `self` is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::function::Predicate;
    ///
    /// let positive = Predicate::new(|value: &i32| *value > 0);
    /// let is_seven = Predicate::new(|value: &i32| *value == 7);
    ///
    /// let positive_but_not_seven = positive.unless([is_seven]);
    ///
    /// assert!(positive_but_not_seven.test(&3));
    /// assert!(!positive_but_not_seven.test(&7));
    /// assert!(!positive_but_not_seven.test(&-1));
    /// ```
    #[must_use]
    pub fn unless<I>(self, vetoes: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let vetoes: PredicateList<Self> = vetoes.into_iter().collect();
        let base = self;
        Self::new(move |item: &T| {
            !vetoes.iter().any(|veto| veto.test(item)) && base.test(item)
        })
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<T: ?Sized, F> From<F> for Predicate<T>
where
    F: Fn(&T) -> bool + Shareable + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Predicate(<function>)")
    }
}
