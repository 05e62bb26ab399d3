use crate::primitive::entries;
use crate::protocol::{Entry, Sequence};

/// Returns the first value satisfying `predicate`, together with its index.
///
/// Stops pulling as soon as a match is found. Useful when the values
/// themselves may be `Option`s, where [`find`] alone would be ambiguous.
pub fn find_entry<S, P>(input: S, mut predicate: P) -> Option<Entry<S::Item>>
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    let sequence = entries(input);
    (&sequence)
        .into_iter()
        .find(|(index, value)| predicate(value, *index))
}

/// Returns the first value satisfying `predicate`, or `None`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::find;
///
/// assert_eq!(find(vec![1, 4, 9, 16], |value, _| *value > 5), Some(9));
/// assert_eq!(find(vec![1, 2], |value, _| *value > 5), None);
/// ```
pub fn find<S, P>(input: S, predicate: P) -> Option<S::Item>
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_entry(input, predicate).map(|(_, value)| value)
}

/// Returns `true` if any value satisfies `predicate`.
pub fn some<S, P>(input: S, predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    find_entry(input, predicate).is_some()
}

/// Returns `true` if the sequence has at least one value.
///
/// Pulls at most one element.
pub fn non_empty<S: Sequence>(input: S) -> bool {
    some(input, |_, _| true)
}

/// Returns `true` if every value satisfies `predicate`; stops at the first
/// failure.
pub fn every<S, P>(input: S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    !some(input, |value, index| !predicate(value, index))
}

/// Returns `true` if the sequence has no values. Pulls at most one element.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::is_empty;
///
/// assert!(is_empty(Vec::<i32>::new()));
/// assert!(is_empty(None::<Vec<i32>>));
/// assert!(!is_empty(vec![0]));
/// ```
pub fn is_empty<S: Sequence>(input: S) -> bool {
    !non_empty(input)
}
