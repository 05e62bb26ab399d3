//! Tests for the keyed-collection helpers.

use lazy_iterable::chain::chain;
use lazy_iterable::keyed::{
    ObjectAsMap, defined_entries, defined_values, entries, group_by, name_value, to_object, values,
};
use rstest::rstest;

fn counts() -> Vec<(&'static str, i32)> {
    vec![
        ("1", 1),
        ("2", 1),
        ("3", 1),
        ("1", 1),
        ("3", 1),
        ("2", 1),
        ("3", 1),
        ("3", 1),
    ]
}

// =============================================================================
// group_by
// =============================================================================

#[rstest]
fn group_by_sums_per_key() {
    let grouped = group_by(counts(), |prior, value| prior + value);
    let expected: ObjectAsMap<i32> = [("1", 2), ("2", 2), ("3", 4)].into_iter().collect();
    assert_eq!(grouped, expected);
    assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
}

#[rstest]
fn group_by_combines_left_to_right() {
    let grouped = group_by(
        vec![("k", String::from("a")), ("k", String::from("b")), ("k", String::from("c"))],
        |prior, value| format!("({prior}{value})"),
    );
    assert_eq!(grouped.get("k").map(String::as_str), Some("((ab)c)"));
}

#[rstest]
fn group_by_does_not_call_reduce_for_first_value() {
    let mut calls = 0;
    let grouped = group_by(vec![("a", 0), ("b", 0)], |prior, value| {
        calls += 1;
        prior + value
    });
    assert_eq!(calls, 0);
    assert_eq!(grouped.len(), 2);
}

#[rstest]
#[case(vec![("z", false), ("z", false)], false)]
#[case(vec![("z", false), ("z", true)], true)]
#[case(vec![("z", true), ("z", false)], true)]
fn group_by_falsy_values_are_present(#[case] input: Vec<(&str, bool)>, #[case] expected: bool) {
    let grouped = group_by(input, |prior, value| prior || value);
    assert_eq!(grouped.get("z"), Some(&expected));
}

#[rstest]
fn group_by_chain_method() {
    let grouped = chain(counts()).group_by(|prior, value| prior + value);
    assert_eq!(grouped.get("3"), Some(&4));
}

// =============================================================================
// to_object
// =============================================================================

#[rstest]
fn to_object_last_value_wins_first_position_kept() {
    let object = to_object(vec![name_value("b", 1), name_value("a", 2), name_value("b", 3)]);
    let pairs: Vec<_> = object.iter().collect();
    assert_eq!(pairs, vec![("b", &3), ("a", &2)]);
}

#[rstest]
fn to_object_of_absent_is_empty() {
    assert!(to_object(None::<Vec<(String, u8)>>).is_empty());
}

#[rstest]
fn to_object_from_mapped_chain() {
    let lengths = chain(vec!["alpha", "be"]).map(|word, _| (word, word.len())).to_object();
    assert_eq!(lengths.get("alpha"), Some(&5));
    assert_eq!(lengths.get("be"), Some(&2));
}

// =============================================================================
// Enumeration
// =============================================================================

#[rstest]
fn values_and_entries_follow_insertion_order() {
    let object = ObjectAsMap::new().with("second", 2).with("first", 1);
    assert_eq!(values(&object).to_array(), vec![2, 1]);
    assert_eq!(
        entries(&object).to_array(),
        vec![(String::from("second"), 2), (String::from("first"), 1)]
    );
}

#[rstest]
fn values_report_absent_values_defined_values_skip_them() {
    let object = ObjectAsMap::new()
        .with("a", Some(1))
        .with("b", None)
        .with("c", Some(3));
    assert_eq!(values(&object).to_array(), vec![Some(1), None, Some(3)]);
    assert_eq!(defined_values(&object).to_array(), vec![1, 3]);
    assert_eq!(
        defined_entries(&object).to_array(),
        vec![(String::from("a"), 1), (String::from("c"), 3)]
    );
}

#[rstest]
fn enumeration_of_absent_object_is_empty() {
    let absent: Option<&ObjectAsMap<i32>> = None;
    assert!(values(absent).is_empty());
    assert!(entries(absent).is_empty());
}

#[rstest]
fn name_value_builds_owned_pair() {
    assert_eq!(name_value("key", 7), (String::from("key"), 7));
}

#[rstest]
fn object_round_trips_through_its_own_entries() {
    let object = ObjectAsMap::new().with("x", 1).with("y", 2);
    let copy = to_object(&object);
    assert_eq!(copy, object);
    assert_eq!(copy.keys().collect::<Vec<_>>(), vec!["x", "y"]);
}
