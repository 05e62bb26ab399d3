//! The iteration protocol.
//!
//! A [`Sequence`] is a cursor factory: it hands out a fresh, single-use
//! cursor each time [`Sequence::cursor`] is called, without consuming or
//! mutating itself. A cursor is any [`FusedIterator`]: advancing it returns
//! `Some(value)` or `None`, and once it has returned `None` it keeps doing so.
//!
//! Collection-backed sequences (`Vec<T>`, `[T; N]`) are re-iterable: every
//! cursor starts from the beginning. A [`OneShot`] sequence shares a single
//! underlying iterator between all of its cursors, so only the first full
//! traversal sees every element.
//!
//! # Absent sequences
//!
//! `Option<S>` is a sequence whenever `S` is. `None` behaves as a sequence
//! that is exhausted from the start, which is how every combinator in this
//! crate accepts an absent source.
//!
//! ```rust
//! use lazy_iterable::protocol::Sequence;
//!
//! let present = Some(vec![1, 2, 3]);
//! let absent: Option<Vec<i32>> = None;
//!
//! assert_eq!(present.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(absent.cursor().count(), 0);
//! ```

mod either;
mod source;

use std::iter::{Cloned, Flatten, FusedIterator};

pub use either::Either;
pub use source::{Empty, FromFn, Infinite, OneShot, OneShotCursor, empty, infinite, iterable, one_shot};

/// A zero-based traversal position paired with the value found there.
///
/// Positions are assigned while traversing; they are not stored on the
/// source.
pub type Entry<T> = (usize, T);

/// A value that can produce cursors over its elements on demand.
///
/// # Laws
///
/// - Requesting a cursor never consumes or mutates the sequence.
/// - Cursors are fused: after the first `None`, every advance yields `None`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::protocol::Sequence;
///
/// let values = vec!["a", "b"];
/// let mut first = values.cursor();
/// let mut second = values.cursor();
///
/// assert_eq!(first.next(), Some("a"));
/// assert_eq!(second.next(), Some("a"));
/// assert_eq!(first.next(), Some("b"));
/// assert_eq!(first.next(), None);
/// assert_eq!(first.next(), None);
/// ```
pub trait Sequence {
    /// The type of the values produced by this sequence.
    type Item;

    /// The cursor type, which may borrow from the sequence.
    type Cursor<'a>: FusedIterator<Item = Self::Item>
    where
        Self: 'a;

    /// Returns a fresh cursor positioned before the first element.
    fn cursor(&self) -> Self::Cursor<'_>;
}

/// A sequence whose length is known without traversing it.
pub trait SizedSequence: Sequence {
    /// Returns the number of elements a full traversal would produce.
    fn length(&self) -> usize;
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> SizedSequence for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Cursor<'a>
        = Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone, const N: usize> SizedSequence for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<S: Sequence> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<S: SizedSequence> SizedSequence for &S {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;
    type Cursor<'a>
        = Flatten<std::option::IntoIter<S::Cursor<'a>>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.as_ref().map(|sequence| sequence.cursor()).into_iter().flatten()
    }
}

impl<S: SizedSequence> SizedSequence for Option<S> {
    fn length(&self) -> usize {
        self.as_ref().map_or(0, |sequence| sequence.length())
    }
}

static_assertions::assert_impl_all!(<Vec<i32> as Sequence>::Cursor<'static>: FusedIterator);
static_assertions::assert_impl_all!(<Option<Vec<i32>> as Sequence>::Cursor<'static>: FusedIterator);
