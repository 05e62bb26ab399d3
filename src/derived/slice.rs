use std::iter;

use super::transform::filter;
use crate::chain::Chain;
use crate::primitive::flat_map;
use crate::protocol::{Sequence, SizedSequence};

/// Yields values while `predicate` holds.
///
/// The first failing value ends the sequence for good: later values are
/// never examined, even if they would satisfy `predicate` again.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::take_while;
///
/// let prefix = take_while(vec!["a", "b", "c", "d", "a"], |value, _| *value != "c");
/// assert_eq!(prefix.to_array(), vec!["a", "b"]);
/// ```
pub fn take_while<S, P>(input: S, predicate: P) -> Chain<impl Sequence<Item = S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    flat_map(input, move |value, index| {
        predicate(&value, index).then(|| iter::once(value))
    })
}

/// Yields the first `count` values.
pub fn take<S: Sequence>(input: S, count: usize) -> Chain<impl Sequence<Item = S::Item>> {
    take_while(input, move |_, index| index < count)
}

/// Skips the first `count` values.
///
/// The skipped values are still pulled from the source one by one.
pub fn drop<S: Sequence>(input: S, count: usize) -> Chain<impl Sequence<Item = S::Item>> {
    filter(input, move |_, index| count <= index)
}

/// Yields all but the last `count` values of a sequence of known length.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::drop_right;
///
/// assert_eq!(drop_right(vec![1, 2, 3, 4], 1).to_array(), vec![1, 2, 3]);
/// assert!(drop_right([1, 2], 5).to_array().is_empty());
/// ```
pub fn drop_right<S: SizedSequence>(
    input: S,
    count: usize,
) -> Chain<impl Sequence<Item = S::Item>> {
    let length = input.length();
    take(input, length.saturating_sub(count))
}
