#![cfg(all(feature = "serde", feature = "wrapper"))]

//! Integration tests for serde support in lazyfn.
//!
//! `Pair` objects produced by `Seq2::into_pairs` serialize as
//! `{"key": ..., "value": ...}` and can be fed back into a pair sequence.

use lazyfn::sequence::Pair;
use lazyfn::wrapper::{Seq, Seq2};
use rstest::rstest;

#[rstest]
fn test_pair_json_roundtrip() {
    let pair = Pair::new("one".to_string(), 1);

    let json = serde_json::to_string(&pair).unwrap();
    let restored: Pair<String, i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, r#"{"key":"one","value":1}"#);
    assert_eq!(pair, restored);
}

#[rstest]
fn test_pair_sequence_survives_json() {
    let source = vec![("a".to_string(), 1), ("b".to_string(), 2), ("a".to_string(), 3)];

    let pairs = Seq2::of(source.clone()).into_pairs().collect();
    let json = serde_json::to_string(&pairs).unwrap();
    let restored: Vec<Pair<String, i32>> = serde_json::from_str(&json).unwrap();

    assert_eq!(Seq::of(restored).unpair().collect_pairs(), source);
}
