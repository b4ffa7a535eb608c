//! Transforms from one value to another.

use std::fmt;

use super::{ReferenceCounter, Shareable, TransformFunction};

/// A shared function converting an `I` into an `O`.
///
/// # Examples
///
/// ```rust
/// use lazyfn::function::Transform;
///
/// let stringify = Transform::new(|value: i32| value.to_string());
///
/// assert_eq!(stringify.apply(42), "42");
/// ```
pub struct Transform<I, O> {
    function: ReferenceCounter<TransformFunction<I, O>>,
}

impl<I, O> Transform<I, O> {
    /// Creates a transform from a closure.
    #[inline]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(I) -> O + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
        }
    }

    /// Applies the transform to `input`.
    #[inline]
    pub fn apply(&self, input: I) -> O {
        (self.function)(input)
    }
}

impl<I: 'static, O: 'static> Transform<I, O> {
    /// Chains further transforms after this one.
    ///
    /// The returned transform applies `self` first and then every step in
    /// the order supplied, feeding each result into the next step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyfn::function::Transform;
    ///
    /// let double = Transform::new(|value: i32| value * 2);
    /// let add_one = Transform::new(|value: i32| value + 1);
    ///
    /// let chained = double.then([add_one]);
    ///
    /// // add_one(double(1))
    /// assert_eq!(chained.apply(1), 3);
    /// ```
    #[must_use]
    pub fn then<S>(self, steps: S) -> Self
    where
        S: IntoIterator<Item = Transform<O, O>>,
    {
        let steps: Vec<Transform<O, O>> = steps.into_iter().collect();
        let first = self;
        Self::new(move |input: I| {
            steps
                .iter()
                .fold(first.apply(input), |result, step| step.apply(result))
        })
    }
}

impl<I, O> Clone for Transform<I, O> {
    fn clone(&self) -> Self {
        Self {
            function: ReferenceCounter::clone(&self.function),
        }
    }
}

impl<I, O, F> From<F> for Transform<I, O>
where
    F: Fn(I) -> O + Shareable + 'static,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<I, O> fmt::Debug for Transform<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Transform(<function>)")
    }
}
