//! Function kinds accepted by the sequence adapters.
//!
//! This module provides shared, immutable handles for the three kinds of
//! functions the library works with:
//!
//! - [`Predicate`]: `&T -> bool`, decides whether an item is kept
//! - [`PairPredicate`]: `(&K, &V) -> bool`, the same over a key/value pair
//! - [`Transform`]: `I -> O`, converts one value into another
//!
//! Each handle is reference counted, so cloning one is cheap and every clone
//! calls the same underlying closure.
//!
//! # Combining predicates
//!
//! Predicates can be combined into new predicates without evaluating them:
//!
//! ```rust
//! use lazyfn::function::Predicate;
//!
//! let greater_than_three = Predicate::new(|value: &i32| *value > 3);
//! let equals_one = Predicate::new(|value: &i32| *value == 1);
//!
//! let combined = greater_than_three.combine([equals_one]);
//!
//! assert!(combined.test(&1)); // equals_one matched
//! assert!(combined.test(&4)); // greater_than_three matched
//! assert!(!combined.test(&2)); // neither matched
//! ```
//!
//! # Thread Safety
//!
//! By default the handles use `Rc` and are neither `Send` nor `Sync`. With the
//! `arc` feature they use `Arc`, and every closure passed to a constructor must
//! itself be `Send + Sync`.

mod pair_predicate;
mod predicate;
mod transform;

pub use pair_predicate::PairPredicate;
pub use predicate::Predicate;
pub use transform::Transform;

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Marker for closures that may be stored in a function handle.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// implements it.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Marker for closures that may be stored in a function handle.
///
/// With the `arc` feature this requires `Send + Sync`; otherwise every type
/// implements it.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}

#[cfg(feature = "arc")]
pub(crate) type PredicateFunction<T> = dyn Fn(&T) -> bool + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type PredicateFunction<T> = dyn Fn(&T) -> bool;

#[cfg(feature = "arc")]
pub(crate) type PairPredicateFunction<K, V> = dyn Fn(&K, &V) -> bool + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type PairPredicateFunction<K, V> = dyn Fn(&K, &V) -> bool;

#[cfg(feature = "arc")]
pub(crate) type TransformFunction<I, O> = dyn Fn(I) -> O + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type TransformFunction<I, O> = dyn Fn(I) -> O;

/// Ordered list of predicates captured by a combinator.
///
/// Most combinations involve only a handful of predicates, so up to four are
/// stored inline.
pub(crate) type PredicateList<P> = smallvec::SmallVec<[P; 4]>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Predicate<i32>: Send, Sync, Clone);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PairPredicate<String, i32>: Send, Sync, Clone);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Transform<i32, String>: Send, Sync, Clone);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Predicate<i32>: Send, Sync);
