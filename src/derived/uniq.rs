use std::hash::Hash;

use super::scan::flat_scan;
use crate::chain::Chain;
use crate::hash::KeySet;
use crate::protocol::Sequence;

/// Keeps the first value seen for every distinct `key(value)`, in
/// first-seen order.
///
/// The seen-key set is the state of a [`flat_scan`](super::flat_scan); each
/// cursor starts with its own empty set.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::uniq_by;
///
/// let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(words, |word| word.chars().next());
/// assert_eq!(by_initial.to_array(), vec!["apple", "banana", "cherry"]);
/// ```
pub fn uniq_by<S, F, K>(input: S, key: F) -> Chain<impl Sequence<Item = S::Item>>
where
    S: Sequence,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq + Clone,
{
    flat_scan(
        input,
        move |mut seen: KeySet<K>, value, _| {
            let fresh = seen.insert(key(&value));
            (seen, fresh.then_some(value))
        },
        KeySet::default(),
    )
}

/// Removes duplicates, keeping first occurrences in order.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::uniq;
///
/// assert_eq!(uniq(vec![3, 1, 2, 2, 3]).to_array(), vec![3, 1, 2]);
/// ```
pub fn uniq<S>(input: S) -> Chain<impl Sequence<Item = S::Item>>
where
    S: Sequence,
    S::Item: Hash + Eq + Clone,
{
    uniq_by(input, |value: &S::Item| value.clone())
}
