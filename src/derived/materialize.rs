use std::collections::VecDeque;
use std::iter::{Cloned, Rev};
use std::marker::PhantomData;

use super::fold::{fold, reduce};
use super::transform::map;
use crate::algebra::Semigroup;
use crate::chain::Chain;
use crate::protocol::Sequence;

/// Collects one traversal into a fresh `Vec`.
pub fn to_array<S: Sequence>(input: S) -> Vec<S::Item> {
    fold(
        input,
        |mut values: Vec<S::Item>, value, _| {
            values.push(value);
            values
        },
        Vec::new(),
    )
}

/// Collects one traversal into a fresh `Vec` in reverse order.
///
/// Every value is prepended to the accumulator as the fold proceeds.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::reverse;
///
/// assert_eq!(reverse(vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn reverse<S: Sequence>(input: S) -> Vec<S::Item> {
    fold(
        input,
        |mut reversed: VecDeque<S::Item>, value, _| {
            reversed.push_front(value);
            reversed
        },
        VecDeque::new(),
    )
    .into()
}

/// Lazy reverse view of a fixed collection. Created by [`array_reverse`].
#[derive(Debug, Clone)]
pub struct ArrayReverse<A, T> {
    array: A,
    marker: PhantomData<T>,
}

impl<A, T> Sequence for ArrayReverse<A, T>
where
    A: AsRef<[T]>,
    T: Clone,
{
    type Item = T;
    type Cursor<'a>
        = Cloned<Rev<std::slice::Iter<'a, T>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.array.as_ref().iter().rev().cloned()
    }
}

/// Walks a fixed collection from its last index down to the first.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::array_reverse;
///
/// assert_eq!(array_reverse(vec!['a', 'b', 'c']).to_array(), vec!['c', 'b', 'a']);
/// ```
pub const fn array_reverse<A, T>(array: A) -> Chain<ArrayReverse<A, T>>
where
    A: AsRef<[T]>,
    T: Clone,
{
    Chain::new(ArrayReverse {
        array,
        marker: PhantomData,
    })
}

/// Renders the values separated by `separator`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::join;
///
/// assert_eq!(join(Vec::<&str>::new(), "/"), "");
/// assert_eq!(join(vec!["x"], "/"), "x");
/// assert_eq!(join(vec!["a", "b", "c"], "/"), "a/b/c");
/// ```
pub fn join<S>(input: S, separator: &str) -> String
where
    S: Sequence,
    S::Item: AsRef<str>,
{
    reduce(
        map(input, |value, _| value.as_ref().to_owned()),
        |joined: String, value, _| joined.combine(separator.to_owned()).combine(value),
    )
    .unwrap_or_default()
}
