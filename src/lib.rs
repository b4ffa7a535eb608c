//! # lazyfn
//!
//! Lazy push-based sequences, predicate combinators and materialization
//! helpers for Rust.
//!
//! ## Overview
//!
//! - **Function kinds**: shared [`Predicate`](function::Predicate),
//!   [`PairPredicate`](function::PairPredicate) and
//!   [`Transform`](function::Transform) handles, with `combine`, `not`,
//!   `unless` and `then` combinators
//! - **Sequences**: the [`Sequence`](sequence::Sequence) and
//!   [`PairSequence`](sequence::PairSequence) traits with lazy `filter`,
//!   `map` and `concat` adapters that honour early termination
//! - **Combination helpers**: [`combine::predicates`] and
//!   [`combine::pair_predicates`] build one OR-predicate from many peers
//! - **Wrappers**: [`Seq`](wrapper::Seq) and [`Seq2`](wrapper::Seq2) chain
//!   adapters and materialize into `Vec`s and maps
//!
//! ## Feature Flags
//!
//! - `function`: Predicate, pair predicate and transform handles
//! - `sequence`: Lazy sequences and their adapters
//! - `combine`: Multi-predicate combination helpers
//! - `wrapper`: `Seq` / `Seq2` facades and materialization
//! - `arc`: Use `Arc` for function handles so they are `Send + Sync`
//! - `fxhash` / `ahash`: Hasher used by collected maps
//! - `serde`: `Serialize` / `Deserialize` for `Pair`
//! - `full`: Enable all module features and `serde`
//!
//! ## Example
//!
//! ```rust
//! use lazyfn::prelude::*;
//!
//! let greater_than_three = Predicate::new(|value: &i32| *value > 3);
//! let equals_one = Predicate::new(|value: &i32| *value == 1);
//!
//! let result = Seq::of([1, 2, 3, 4, 5])
//!     .filter(greater_than_three.combine([equals_one]))
//!     .map(|value: i32| value.to_string())
//!     .collect();
//!
//! assert_eq!(result, vec!["1", "4", "5"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazyfn::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{
        Concat, Entries, Filter, FilterPairs, FromFn, FromPairFn, IntoPairs, Map, Pair,
        PairSequence, Sequence, Unpair, Values,
    };

    #[cfg(feature = "wrapper")]
    pub use crate::wrapper::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "combine")]
pub mod combine;

#[cfg(feature = "wrapper")]
pub mod wrapper;
