//! Unit tests for predicate combinators.
//!
//! The combinators have a fixed evaluation order that callers can observe
//! through side effects:
//! - `combine`: additional predicates left to right, then the base predicate
//! - `unless`: vetoes left to right, then the base predicate

#![cfg(feature = "function")]

use lazyfn::function::{PairPredicate, Predicate};
use rstest::rstest;
use std::sync::{Arc, Mutex};

type CallLog = Arc<Mutex<Vec<&'static str>>>;

fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

fn calls(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

fn recording(log: &CallLog, name: &'static str, result: bool) -> Predicate<i32> {
    let log = Arc::clone(log);
    Predicate::new(move |_: &i32| {
        log.lock().unwrap().push(name);
        result
    })
}

fn recording_pair(log: &CallLog, name: &'static str, result: bool) -> PairPredicate<String, i32> {
    let log = Arc::clone(log);
    PairPredicate::new(move |_: &String, _: &i32| {
        log.lock().unwrap().push(name);
        result
    })
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
fn combine_true_with_true_only_calls_additional() {
    let log = new_log();
    let combined = recording(&log, "f", true).combine([recording(&log, "g", true)]);

    assert!(combined.test(&1));
    assert_eq!(calls(&log), vec!["g"]);
}

#[rstest]
fn combine_true_with_false_calls_both_in_order() {
    let log = new_log();
    let combined = recording(&log, "f", true).combine([recording(&log, "g", false)]);

    assert!(combined.test(&1));
    assert_eq!(calls(&log), vec!["g", "f"]);
}

#[rstest]
fn combine_false_with_false_calls_both_and_is_false() {
    let log = new_log();
    let combined = recording(&log, "f", false).combine([recording(&log, "g", false)]);

    assert!(!combined.test(&1));
    assert_eq!(calls(&log), vec!["g", "f"]);
}

#[rstest]
fn combine_stops_at_first_true_additional() {
    let log = new_log();
    let combined = recording(&log, "f", true).combine([
        recording(&log, "g1", false),
        recording(&log, "g2", true),
        recording(&log, "g3", true),
    ]);

    assert!(combined.test(&1));
    assert_eq!(calls(&log), vec!["g1", "g2"]);
}

#[rstest]
#[case(1, true)]
#[case(2, false)]
#[case(3, false)]
#[case(4, true)]
#[case(5, true)]
fn combine_matches_logical_or(#[case] value: i32, #[case] expected: bool) {
    let greater_than_three = Predicate::new(|value: &i32| *value > 3);
    let equals_one = Predicate::new(|value: &i32| *value == 1);

    let combined = greater_than_three.combine([equals_one]);

    assert_eq!(combined.test(&value), expected);
}

// =============================================================================
// not
// =============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn not_inverts_and_calls_once(#[case] result: bool) {
    let log = new_log();
    let inverted = recording(&log, "f", result).not();

    assert_eq!(inverted.test(&0), !result);
    assert_eq!(calls(&log), vec!["f"]);
}

// =============================================================================
// unless
// =============================================================================

#[rstest]
fn unless_true_veto_never_calls_base() {
    let log = new_log();
    let vetoed = recording(&log, "f", true).unless([recording(&log, "g", true)]);

    assert!(!vetoed.test(&1));
    assert_eq!(calls(&log), vec!["g"]);
}

#[rstest]
fn unless_false_vetoes_defer_to_base() {
    let log = new_log();
    let vetoed = recording(&log, "f", false)
        .unless([recording(&log, "g1", false), recording(&log, "g2", false)]);

    assert!(!vetoed.test(&1));
    assert_eq!(calls(&log), vec!["g1", "g2", "f"]);
}

#[rstest]
fn unless_stops_at_first_true_veto() {
    let log = new_log();
    let vetoed = recording(&log, "f", true).unless([
        recording(&log, "g1", false),
        recording(&log, "g2", true),
        recording(&log, "g3", true),
    ]);

    assert!(!vetoed.test(&1));
    assert_eq!(calls(&log), vec!["g1", "g2"]);
}

// =============================================================================
// Pair variants
// =============================================================================

#[rstest]
fn pair_combine_calls_additional_before_base() {
    let log = new_log();
    let combined =
        recording_pair(&log, "f", true).combine([recording_pair(&log, "g", false)]);

    assert!(combined.test(&String::from("key"), &1));
    assert_eq!(calls(&log), vec!["g", "f"]);
}

#[rstest]
fn pair_combine_short_circuits_base() {
    let log = new_log();
    let combined = recording_pair(&log, "f", true).combine([recording_pair(&log, "g", true)]);

    assert!(combined.test(&String::from("key"), &1));
    assert_eq!(calls(&log), vec!["g"]);
}

#[rstest]
fn pair_unless_veto_never_calls_base() {
    let log = new_log();
    let vetoed = recording_pair(&log, "f", true).unless([recording_pair(&log, "g", true)]);

    assert!(!vetoed.test(&String::from("key"), &1));
    assert_eq!(calls(&log), vec!["g"]);
}

#[rstest]
fn pair_not_inverts() {
    let key_is_one = PairPredicate::new(|key: &String, _: &i32| key == "one");

    let inverted = key_is_one.not();

    assert!(!inverted.test(&String::from("one"), &1));
    assert!(inverted.test(&String::from("two"), &2));
}

#[rstest]
#[case("one", 1, true)]
#[case("two", 2, false)]
#[case("four", 4, true)]
fn pair_combine_matches_logical_or(
    #[case] key: &str,
    #[case] value: i32,
    #[case] expected: bool,
) {
    let value_above_three = PairPredicate::new(|_: &String, value: &i32| *value > 3);
    let key_is_one = PairPredicate::new(|key: &String, _: &i32| key == "one");

    let combined = value_above_three.combine([key_is_one]);

    assert_eq!(combined.test(&key.to_string(), &value), expected);
}
