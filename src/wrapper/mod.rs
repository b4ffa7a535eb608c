//! Chainable facades over sequences, with materialization.
//!
//! [`Seq`] wraps a [`Sequence`](crate::sequence::Sequence) and [`Seq2`] wraps a
//! [`PairSequence`](crate::sequence::PairSequence). Both offer chainable
//! adapters and terminal operations that turn the sequence into a collection:
//!
//! - [`Seq::collect`]: an ordered `Vec`, duplicates kept
//! - [`Seq2::collect`]: a [`CollectedMap`], the last value produced for a key
//!   wins and pair order is not kept
//! - [`Seq2::try_collect_unique`]: a [`CollectedMap`], failing on the first
//!   repeated key
//!
//! # Examples
//!
//! ```rust
//! use lazyfn::wrapper::{CollectedMap, Seq, Seq2};
//!
//! let kept = Seq::of([1, 2, 3, 4, 5])
//!     .filter(|value: &i32| *value > 3)
//!     .collect();
//! assert_eq!(kept, vec![4, 5]);
//!
//! let strings = Seq::of([1, 2, 3]).map(|value: i32| value.to_string()).collect();
//! assert_eq!(strings, vec!["1", "2", "3"]);
//!
//! let last_wins = Seq2::of([("a", 1), ("a", 2)]).collect();
//! let expected: CollectedMap<_, _> = [("a", 2)].into_iter().collect();
//! assert_eq!(last_wins, expected);
//! ```
//!
//! # Hashing
//!
//! The hasher of [`CollectedMap`] is selected by Cargo features:
//!
//! - `fxhash`: `rustc_hash::FxBuildHasher`
//! - `ahash`: `ahash::RandomState` (ignored when `fxhash` is also enabled)
//! - neither: `std::collections::hash_map::RandomState`

mod error;
mod pair_seq;
mod seq;

use std::collections::HashMap;

pub use error::DuplicateKeyError;
pub use pair_seq::Seq2;
pub use seq::Seq;

/// The `BuildHasher` used by [`CollectedMap`].
#[cfg(feature = "fxhash")]
pub type MapHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by [`CollectedMap`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type MapHasher = ahash::RandomState;

/// The `BuildHasher` used by [`CollectedMap`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type MapHasher = std::collections::hash_map::RandomState;

/// The map produced by materializing a pair sequence.
pub type CollectedMap<K, V> = HashMap<K, V, MapHasher>;
