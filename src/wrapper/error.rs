//! Error types for materialization.

use std::fmt;

/// Represents a key produced more than once while collecting a pair sequence
/// that was required to have unique keys.
///
/// Returned by [`Seq2::try_collect_unique`](super::Seq2::try_collect_unique).
///
/// # Examples
///
/// ```rust
/// use lazyfn::wrapper::DuplicateKeyError;
///
/// let error = DuplicateKeyError { key: "a", position: 2 };
/// assert_eq!(
///     format!("{}", error),
///     "duplicate key \"a\" produced at position 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKeyError<K> {
    /// The key that was produced again.
    pub key: K,
    /// Zero-based position of the repeated pair in production order.
    pub position: usize,
}

impl<K: fmt::Debug> fmt::Display for DuplicateKeyError<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "duplicate key {:?} produced at position {}",
            self.key, self.position
        )
    }
}

impl<K: fmt::Debug> std::error::Error for DuplicateKeyError<K> {}
