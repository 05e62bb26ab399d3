//! Example-based tests for the free-function combinators.
//!
//! Covers the protocol sources, the primitives and the derived combinators,
//! with particular attention to absent, empty and infinite inputs.

use std::cell::Cell;

use lazy_iterable::derived::*;
use lazy_iterable::primitive::{entries, flat_map};
use lazy_iterable::protocol::{Either, Sequence, empty, infinite, iterable, one_shot};
use rstest::rstest;

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn map_squares() {
    assert_eq!(map(vec![1, 2, 3], |value, _| value * value).to_array(), vec![1, 4, 9]);
}

#[rstest]
fn filter_evens() {
    assert_eq!(filter(vec![1, 2, 3, 4], |value, _| value % 2 == 0).to_array(), vec![2, 4]);
}

#[rstest]
#[case(vec![Some(1), Some(2), Some(3), Some(4)], vec![1, 2, 3, 4])]
#[case(vec![Some(1), Some(2), Some(3), Some(4), None], vec![1, 2, 3, 4])]
fn filter_map_drops_absent(#[case] input: Vec<Option<i32>>, #[case] expected: Vec<i32>) {
    assert_eq!(filter_map(input, |value, _| value).to_array(), expected);
}

#[rstest]
fn flatten_concatenates_inner_vectors() {
    let result = flatten(vec![vec![1, 2], vec![2, 3], vec![3, 4]]).to_array();
    assert_eq!(result, vec![1, 2, 2, 3, 3, 4]);
}

#[rstest]
fn flat_map_expands_each_value() {
    let result = flat_map(vec![1, 2, 3], |value, _| Some(vec![value, value * 2])).to_array();
    assert_eq!(result, vec![1, 2, 2, 4, 3, 6]);
}

#[rstest]
fn flat_map_absent_projection_is_permanent() {
    let result = flat_map(vec![1, 2, 3, 1], |value, _| (value < 3).then_some([value; 2]));
    let mut cursor = result.cursor();
    assert_eq!(cursor.by_ref().collect::<Vec<_>>(), vec![1, 1, 2, 2]);
    assert_eq!(cursor.next(), None);
}

#[rstest]
fn entries_index_from_zero() {
    assert_eq!(entries(vec!['x', 'y']).to_array(), vec![(0, 'x'), (1, 'y')]);
}

#[rstest]
fn concat_treats_absent_as_empty() {
    let result = concat([None, Some(vec![1]), None, Some(vec![2, 3])]).to_array();
    assert_eq!(result, vec![1, 2, 3]);
}

// =============================================================================
// Absent Inputs
// =============================================================================

#[rstest]
fn absent_input_produces_nothing_everywhere() {
    let absent: Option<Vec<i32>> = None;
    assert!(map(&absent, |value, _| value).to_array().is_empty());
    assert!(filter(&absent, |_, _| true).to_array().is_empty());
    assert!(take(&absent, 3).to_array().is_empty());
    assert!(drop(&absent, 1).to_array().is_empty());
    assert!(uniq(&absent).to_array().is_empty());
    assert!(reverse(&absent).is_empty());
    assert_eq!(reduce(&absent, |left, right, _| left + right), None);
    assert_eq!(sum(&absent), 0);
    assert_eq!(find(&absent, |_, _| true), None);
    assert!(is_empty(&absent));
    assert!(every(&absent, |_, _| false));
    assert!(!some(&absent, |_, _| true));
    assert_eq!(join(None::<Vec<&str>>, ","), "");
}

// =============================================================================
// Generation
// =============================================================================

#[rstest]
fn repeat_five_times() {
    let result = repeat("Hello!", Some(5)).to_array();
    assert_eq!(result, vec!["Hello!"; 5]);
}

#[rstest]
fn generate_uses_index() {
    assert_eq!(generate(|index| index * index, Some(4)).to_array(), vec![0, 1, 4, 9]);
}

#[rstest]
fn infinite_source_bounded_by_take_while() {
    let result = take_while(generate(|index| index, None), |value, _| *value < 4).to_array();
    assert_eq!(result, vec![0, 1, 2, 3]);
}

#[rstest]
fn infinite_unit_source_is_endless() {
    assert_eq!(take(infinite(), 5).to_array().len(), 5);
}

// =============================================================================
// Zip
// =============================================================================

#[rstest]
fn zip_stops_at_shortest() {
    let rows = zip([vec![1, 2, 3], vec![4, 5]]).to_array();
    assert_eq!(rows, vec![vec![1, 4], vec![2, 5]]);
}

#[rstest]
fn zip_mixed_value_types_through_either() {
    let rows = zip([
        vec![Either::Left(1), Either::Right("b")],
        vec![Either::Right("a"), Either::Left(2)],
    ])
    .to_array();
    assert_eq!(
        rows,
        vec![
            vec![Either::Left(1), Either::Right("a")],
            vec![Either::Right("b"), Either::Left(2)],
        ]
    );
}

#[rstest]
fn zip_infinite_repeat_with_finite() {
    let rows = zip([Either::Left(repeat(2, None)), Either::Right(vec![1, 3])]).to_array();
    assert_eq!(rows, vec![vec![2, 1], vec![2, 3]]);
}

#[rstest]
fn zip_with_absent_input_is_empty() {
    assert!(zip([Some(vec![1, 2]), None, Some(vec![3])]).to_array().is_empty());
}

// =============================================================================
// Folding
// =============================================================================

#[rstest]
fn reduce_no_items() {
    assert_eq!(reduce(Vec::<i32>::new(), |left, _, _| left), None);
}

#[rstest]
#[case(vec![1], 1)]
#[case(vec![1, 2], 3)]
fn reduce_adds(#[case] input: Vec<i32>, #[case] expected: i32) {
    assert_eq!(reduce(input, |left, right, _| left + right), Some(expected));
}

#[rstest]
fn sum_of_array() {
    assert_eq!(sum(vec![1, 2, 3]), 6);
}

#[rstest]
#[case(vec![1.0, 2.0, 3.0], 1.0)]
#[case(vec![], f64::INFINITY)]
#[case(vec![-1.0, -2.0, -3.0], -3.0)]
fn min_of_floats(#[case] input: Vec<f64>, #[case] expected: f64) {
    assert_eq!(min(input).to_bits(), expected.to_bits());
}

#[rstest]
#[case(vec![1, 2, 3], 3)]
#[case(vec![-2, -3, -4], -2)]
fn max_of_integers(#[case] input: Vec<i64>, #[case] expected: i64) {
    assert_eq!(max(input), expected);
}

#[rstest]
fn max_of_empty_floats_is_negative_infinity() {
    assert_eq!(max(Vec::<f64>::new()), f64::NEG_INFINITY);
}

#[rstest]
fn for_each_accumulates_values_and_indices() {
    let mut total = 0;
    let mut indices = 0;
    for_each(vec![1, 2, 4], |value, index| {
        total += value;
        indices += index;
    });
    assert_eq!((total, indices), (7, 3));
}

#[rstest]
fn try_fold_reports_first_error_index() {
    let result = try_fold(
        vec![3, 2, 0, 1],
        |total: i32, value: i32, index| total.checked_div(value).ok_or(index),
        120,
    );
    assert_eq!(result, Err(2));
}

// =============================================================================
// Scanning and Uniqueness
// =============================================================================

#[rstest]
fn scan_is_exclusive() {
    assert_eq!(scan(vec![1, 2, 3], |total, value, _| total + value, 0).to_array(), vec![0, 1, 3, 6]);
}

#[rstest]
fn uniq_keeps_first_seen_order() {
    assert_eq!(uniq(vec![3, 1, 2, 2, 3]).to_array(), vec![3, 1, 2]);
}

#[rstest]
fn uniq_by_case_insensitive() {
    let result = uniq_by(vec!["A", "b", "a", "B", "c"], |value| value.to_ascii_lowercase());
    assert_eq!(result.to_array(), vec!["A", "b", "c"]);
}

// =============================================================================
// Searching and Laziness
// =============================================================================

#[rstest]
fn is_empty_reads_at_most_one_element() {
    let pulls = Cell::new(0);
    let counter = &pulls;
    let sequence = iterable(move || {
        (0..).map(move |value| {
            counter.set(counter.get() + 1);
            assert!(counter.get() <= 1, "pulled a second element");
            value
        })
    });
    assert!(!is_empty(&sequence));
    assert_eq!(pulls.get(), 1);
}

#[rstest]
fn take_while_is_permanent() {
    let result = take_while(vec!["a", "b", "c", "d", "a"], |value, _| *value != "c");
    assert_eq!(result.to_array(), vec!["a", "b"]);
}

#[rstest]
fn one_shot_second_traversal_sees_remainder() {
    let sequence = one_shot(1..=4);
    assert_eq!(find(&sequence, |value, _| *value == 2), Some(2));
    assert_eq!(to_array(&sequence), vec![3, 4]);
    assert!(to_array(&sequence).is_empty());
}

#[rstest]
fn empty_source_is_exhausted() {
    assert!(is_empty(empty::<u8>()));
    assert_eq!(first(empty::<u8>()), None);
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn array_equal_same_reference() {
    let shared = ["a", "b"];
    assert!(array_equal(Some(&shared[..]), Some(&shared[..])));
}

#[rstest]
#[case(Some(vec!["a", "b"]), true)]
#[case(None, false)]
#[case(Some(vec!["a", "b", "c"]), false)]
#[case(Some(vec!["a", "c"]), false)]
fn array_equal_cases(#[case] right: Option<Vec<&str>>, #[case] expected: bool) {
    let left = vec!["a", "b"];
    assert_eq!(array_equal(Some(left.as_slice()), right.as_deref()), expected);
}

#[rstest]
fn is_equal_lock_step() {
    assert!(is_equal(Some(&vec![1, 2, 3]), Some(&vec![1, 2, 3])));
    assert!(!is_equal(Some(&vec![1, 2]), Some(&vec![1, 2, 3])));
    assert!(!is_equal(Some(&vec![1, 2, 3]), Some(&vec![1, 2])));
    assert!(!is_equal(None::<&Vec<i32>>, Some(&vec![1])));
    assert!(is_equal(None::<&Vec<i32>>, None::<&Vec<i32>>));
}

#[rstest]
fn is_equivalent_between_different_sequence_types() {
    let generated = generate(|index| index + 1, Some(3));
    assert!(is_equivalent(Some(&generated), Some(&vec![1_usize, 2, 3])));
    assert!(is_equivalent(Some(&vec![1, 2, 3]), Some(&[1, 2, 3])));
}

#[rstest]
fn array_equal_by_with_custom_comparator() {
    let left = vec!["Zip", "ZAP"];
    let right = vec!["zip", "zap"];
    let ignoring_case = |left: &&str, right: &&str| left.eq_ignore_ascii_case(right);
    assert!(array_equal_by(Some(left.as_slice()), Some(right.as_slice()), ignoring_case));
    assert!(!array_equal(Some(left.as_slice()), Some(right.as_slice())));
}

// =============================================================================
// Materialization
// =============================================================================

#[rstest]
#[case(vec![], "")]
#[case(vec!["x"], "x")]
#[case(vec!["a", "b", "c"], "a/b/c")]
fn join_with_separator(#[case] input: Vec<&str>, #[case] expected: &str) {
    assert_eq!(join(input, "/"), expected);
}

#[rstest]
fn reverse_and_array_reverse_agree() {
    let values = vec![1, 2, 3, 4];
    assert_eq!(reverse(&values), array_reverse(values.clone()).to_array());
}

#[rstest]
fn first_and_last() {
    assert_eq!(first(vec![4, 5, 6]), Some(4));
    assert_eq!(last(vec![4, 5, 6]), Some(6));
}
