use std::iter;

use crate::chain::Chain;
use crate::primitive::flat_map;
use crate::protocol::{Sequence, infinite};

/// Yields `function(0), function(1), ...`, stopping after `count` values if
/// given and running forever otherwise.
///
/// The index source is [`infinite`]; the traversal ends when the
/// projection returns absent at `index == count`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::generate;
///
/// assert_eq!(generate(|index| index * 10, Some(3)).to_array(), vec![0, 10, 20]);
/// assert_eq!(generate(|index| index, None).take(2).to_array(), vec![0, 1]);
/// ```
pub fn generate<F, T>(function: F, count: Option<usize>) -> Chain<impl Sequence<Item = T>>
where
    F: Fn(usize) -> T,
{
    flat_map(infinite(), move |(), index| {
        (Some(index) != count).then(|| iter::once(function(index)))
    })
}

/// Yields `value` `count` times, or forever when `count` is `None`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::repeat;
///
/// assert_eq!(repeat("Hello!", Some(2)).to_array(), vec!["Hello!", "Hello!"]);
/// ```
pub fn repeat<T: Clone>(value: T, count: Option<usize>) -> Chain<impl Sequence<Item = T>> {
    generate(move |_| value.clone(), count)
}
