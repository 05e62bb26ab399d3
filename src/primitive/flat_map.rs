use std::iter::{Enumerate, FusedIterator};

use crate::chain::Chain;
use crate::protocol::Sequence;

/// Sequence produced by [`flat_map`].
#[derive(Debug, Clone)]
pub struct FlatMap<S, F> {
    input: S,
    function: F,
}

impl<S, F, U> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> Option<U>,
    U: IntoIterator,
{
    type Item = U::Item;
    type Cursor<'a>
        = FlatMapCursor<'a, S::Cursor<'a>, F, U>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlatMapCursor {
            outer: Some(self.input.cursor().enumerate()),
            inner: None,
            function: &self.function,
        }
    }
}

/// Cursor over a [`FlatMap`] sequence.
///
/// While `inner` holds an iterator the cursor drains it; otherwise it
/// advances `outer`. Dropping `outer` is the terminal state.
pub struct FlatMapCursor<'a, C, F, U: IntoIterator> {
    outer: Option<Enumerate<C>>,
    inner: Option<U::IntoIter>,
    function: &'a F,
}

impl<C, F, U> Iterator for FlatMapCursor<'_, C, F, U>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> Option<U>,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(value) = inner.next() {
                    return Some(value);
                }
                self.inner = None;
            }

            let Some((index, value)) = self.outer.as_mut()?.next() else {
                self.outer = None;
                return None;
            };

            match (self.function)(value, index) {
                Some(inner) => self.inner = Some(inner.into_iter()),
                None => {
                    trace_event!(
                        target: "lazy_iterable::flat_map",
                        index,
                        "projection returned absent, traversal stopped"
                    );
                    self.outer = None;
                    return None;
                }
            }
        }
    }
}

impl<C, F, U> FusedIterator for FlatMapCursor<'_, C, F, U>
where
    C: Iterator,
    F: Fn(C::Item, usize) -> Option<U>,
    U: IntoIterator,
{
}

/// Maps every value to an inner iterable and yields the inner elements in
/// order.
///
/// `function` receives each value with its zero-based index. Returning
/// `None` stops the traversal of the whole sequence at that point; the
/// value and everything after it are never yielded. An absent `input`
/// produces an exhausted sequence.
///
/// The result is lazy: nothing is pulled from `input` until the first
/// advance of a cursor.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::primitive::flat_map;
///
/// let doubled = flat_map(vec![1, 2, 3], |value, _| Some([value, value * 2]));
/// assert_eq!(doubled.to_array(), vec![1, 2, 2, 4, 3, 6]);
///
/// // `None` ends the traversal.
/// let until_three = flat_map(vec![1, 2, 3, 4], |value, _| (value != 3).then_some([value]));
/// assert_eq!(until_three.to_array(), vec![1, 2]);
/// ```
pub const fn flat_map<S, F, U>(input: S, function: F) -> Chain<FlatMap<S, F>>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> Option<U>,
    U: IntoIterator,
{
    Chain::new(FlatMap { input, function })
}
