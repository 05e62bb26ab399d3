use std::iter::{self, FusedIterator};

use crate::chain::Chain;
use crate::primitive::flat_map;
use crate::protocol::Sequence;

/// Transforms every value, keeping order and count.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::map;
///
/// let squares = map(vec![1, 2, 3], |value, _| value * value);
/// assert_eq!(squares.to_array(), vec![1, 4, 9]);
/// ```
pub fn map<S, F, R>(input: S, function: F) -> Chain<impl Sequence<Item = R>>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> R,
{
    flat_map(input, move |value, index| Some(iter::once(function(value, index))))
}

/// Keeps the values for which `predicate` holds, in order.
pub fn filter<S, P>(input: S, predicate: P) -> Chain<impl Sequence<Item = S::Item>>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    flat_map(input, move |value, index| {
        Some(predicate(&value, index).then_some(value))
    })
}

/// Transforms and filters in one pass: `None` from `function` drops the value.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::filter_map;
///
/// let halves = filter_map(vec![1, 2, 3, 4], |value, _| (value % 2 == 0).then(|| value / 2));
/// assert_eq!(halves.to_array(), vec![1, 2]);
/// ```
pub fn filter_map<S, F, R>(input: S, function: F) -> Chain<impl Sequence<Item = R>>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> Option<R>,
{
    flat_map(input, move |value, index| Some(function(value, index)))
}

/// Concatenates the inner iterables of `input` in outer order.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::flat;
///
/// assert_eq!(flat(vec![vec![1, 2], vec![3, 4]]).to_array(), vec![1, 2, 3, 4]);
/// ```
pub fn flat<S>(input: S) -> Chain<impl Sequence<Item = <S::Item as IntoIterator>::Item>>
where
    S: Sequence,
    S::Item: IntoIterator,
{
    flat_map(input, |inner, _| Some(inner))
}

/// Concatenates optional inner iterables, treating `None` as empty.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::flat_optional;
///
/// let nested = vec![Some(vec![1, 2]), None, Some(vec![3])];
/// assert_eq!(flat_optional(nested).to_array(), vec![1, 2, 3]);
/// ```
pub fn flat_optional<S, U>(input: S) -> Chain<impl Sequence<Item = U::Item>>
where
    S: Sequence<Item = Option<U>>,
    U: IntoIterator,
{
    flat_map(input, |inner: Option<U>, _| Some(inner.into_iter().flatten()))
}

/// Converts an optional value into a zero- or one-element vector.
pub fn optional_to_array<T>(value: Option<T>) -> Vec<T> {
    value.into_iter().collect()
}

/// Sequence produced by [`concat`].
#[derive(Debug, Clone)]
pub struct Concat<S> {
    inputs: Vec<S>,
}

impl<S: Sequence> Sequence for Concat<S> {
    type Item = S::Item;
    type Cursor<'a>
        = ConcatCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            pending: self.inputs.iter(),
            current: None,
        }
    }
}

/// Cursor over a [`Concat`] sequence.
pub struct ConcatCursor<'a, S: Sequence + 'a> {
    pending: std::slice::Iter<'a, S>,
    current: Option<S::Cursor<'a>>,
}

impl<'a, S: Sequence + 'a> Iterator for ConcatCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(current) = &mut self.current {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }
            self.current = Some(self.pending.next()?.cursor());
        }
    }
}

impl<'a, S: Sequence + 'a> FusedIterator for ConcatCursor<'a, S> {}

/// Yields the elements of every input in turn.
///
/// Absent inputs (`None`) contribute nothing.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::concat;
///
/// let joined = concat([Some(vec![1, 2]), None, Some(vec![3])]);
/// assert_eq!(joined.to_array(), vec![1, 2, 3]);
/// ```
pub fn concat<I>(inputs: I) -> Chain<Concat<I::Item>>
where
    I: IntoIterator,
    I::Item: Sequence,
{
    Chain::new(Concat {
        inputs: inputs.into_iter().collect(),
    })
}
