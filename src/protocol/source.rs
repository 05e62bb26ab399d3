//! Sequence sources: factories, one-shot iterators, the empty sequence and
//! the infinite unit sequence.

use std::cell::RefCell;
use std::iter::{Fuse, FusedIterator};
use std::marker::PhantomData;

use super::Sequence;
use crate::chain::Chain;

/// A sequence whose cursors are produced by calling a factory function.
///
/// Created by [`iterable`].
#[derive(Clone)]
pub struct FromFn<F> {
    factory: F,
}

impl<F, I> Sequence for FromFn<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type Cursor<'a>
        = Fuse<I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)().fuse()
    }
}

/// Builds a sequence from a function that creates a new iterator on each call.
///
/// The factory is invoked once per cursor, so the resulting sequence is
/// re-iterable as long as the factory is.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::protocol::iterable;
///
/// let countdown = iterable(|| (1..=3).rev());
/// assert_eq!(countdown.to_array(), vec![3, 2, 1]);
/// assert_eq!(countdown.to_array(), vec![3, 2, 1]);
/// ```
pub const fn iterable<F, I>(factory: F) -> Chain<FromFn<F>>
where
    F: Fn() -> I,
    I: Iterator,
{
    Chain::new(FromFn { factory })
}

/// A sequence over a single std iterator, shared by all of its cursors.
///
/// Created by [`one_shot`]. Each element is observed by exactly one cursor:
/// a second traversal sees only what the first one left behind.
pub struct OneShot<I> {
    source: RefCell<Fuse<I>>,
}

/// Cursor over a [`OneShot`] sequence.
pub struct OneShotCursor<'a, I> {
    source: &'a RefCell<Fuse<I>>,
}

impl<I: Iterator> Iterator for OneShotCursor<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.borrow_mut().next()
    }
}

impl<I: Iterator> FusedIterator for OneShotCursor<'_, I> {}

impl<I: Iterator> Sequence for OneShot<I> {
    type Item = I::Item;
    type Cursor<'a>
        = OneShotCursor<'a, I>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        trace_event!(target: "lazy_iterable::one_shot", "cursor requested over shared source");
        OneShotCursor {
            source: &self.source,
        }
    }
}

/// Wraps a single-pass iterator as a sequence.
///
/// Iterating the result twice is a caller error that is not detected: the
/// second traversal silently yields the remaining elements, usually none.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::protocol::one_shot;
///
/// let letters = one_shot("abc".chars());
/// assert_eq!(letters.to_array(), vec!['a', 'b', 'c']);
/// assert!(letters.to_array().is_empty());
/// ```
pub fn one_shot<I: IntoIterator>(iterator: I) -> Chain<OneShot<I::IntoIter>> {
    Chain::new(OneShot {
        source: RefCell::new(iterator.into_iter().fuse()),
    })
}

/// The sequence with no elements.
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor<'a>
        = std::iter::Empty<T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::empty()
    }
}

/// Returns a sequence that is exhausted from the start.
pub const fn empty<T>() -> Chain<Empty<T>> {
    Chain::new(Empty {
        marker: PhantomData,
    })
}

/// An endless sequence of `()`.
///
/// Used as the index source for [`generate`](crate::derived::generate).
#[derive(Debug, Clone, Copy, Default)]
pub struct Infinite;

impl Sequence for Infinite {
    type Item = ();
    type Cursor<'a> = std::iter::Repeat<()>;

    fn cursor(&self) -> Self::Cursor<'_> {
        std::iter::repeat(())
    }
}

/// Returns an endless sequence of `()`.
pub const fn infinite() -> Chain<Infinite> {
    Chain::new(Infinite)
}

static_assertions::assert_not_impl_any!(OneShot<std::vec::IntoIter<i32>>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn iterable_calls_factory_once_per_cursor() {
        let calls = Cell::new(0);
        let sequence = iterable(|| {
            calls.set(calls.get() + 1);
            0..2
        });
        assert_eq!(calls.get(), 0);

        let _ = sequence.cursor();
        let _ = sequence.cursor();
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn one_shot_cursors_share_elements() {
        let sequence = one_shot(vec![1, 2, 3, 4]);
        let mut first = sequence.cursor();
        let mut second = sequence.cursor();

        assert_eq!(first.next(), Some(1));
        assert_eq!(second.next(), Some(2));
        assert_eq!(first.next(), Some(3));
        assert_eq!(second.next(), Some(4));
        assert_eq!(first.next(), None);
        assert_eq!(second.next(), None);
    }

    #[rstest]
    fn empty_never_yields() {
        let sequence = empty::<String>();
        let mut cursor = sequence.cursor();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[rstest]
    fn infinite_keeps_yielding() {
        assert_eq!(infinite().cursor().take(1000).count(), 1000);
    }
}
