//! Tests for the hasher feature flags.
//!
//! `uniq` and `ObjectAsMap` must behave identically whichever hasher the
//! `fxhash` / `ahash` features select.

use lazy_iterable::derived::{uniq, uniq_by};
use lazy_iterable::keyed::{ObjectAsMap, group_by};
use rstest::rstest;

/// Output order comes from the input, never from hash iteration order.
#[rstest]
fn uniq_order_is_independent_of_hasher() {
    let words: Vec<String> = (0..200).rev().map(|index| format!("word-{}", index % 50)).collect();
    let expected: Vec<String> = (150..200).rev().map(|index| format!("word-{}", index % 50)).collect();
    assert_eq!(uniq(&words).to_array(), expected);
}

#[rstest]
fn uniq_by_on_many_keys() {
    let values: Vec<u64> = (0..1_000).collect();
    let by_residue = uniq_by(&values, |value| value % 7).to_array();
    assert_eq!(by_residue, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn object_keys_keep_insertion_order_at_scale() {
    let object: ObjectAsMap<usize> = (0..500).map(|index| (format!("key-{index}"), index)).collect();
    let keys: Vec<&str> = object.keys().collect();
    assert_eq!(keys.len(), 500);
    assert_eq!(keys[0], "key-0");
    assert_eq!(keys[499], "key-499");
    assert_eq!(object.get("key-250"), Some(&250));
}

#[rstest]
fn group_by_same_result_for_same_input() {
    let input: Vec<(String, i32)> = (0..100).map(|index| ((index % 10).to_string(), index)).collect();
    let first = group_by(&input, |prior, value| prior + value);
    let second = group_by(&input, |prior, value| prior + value);
    assert_eq!(first, second);
    assert_eq!(first.get("0"), Some(&450));
}
