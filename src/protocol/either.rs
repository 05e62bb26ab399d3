//! Either type - one of two sequences with the same item type.
//!
//! `Either<L, R>` lets sequences of different concrete types sit in the same
//! collection, which is what `Chain::zip` and `Chain::concat` need to combine
//! `self` with a list of other sequences. The same enum doubles as the
//! cursor type: an `Either` of two iterators is an iterator.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iterable::protocol::{Either, Sequence};
//!
//! let sources: Vec<Either<Vec<i32>, [i32; 2]>> = vec![
//!     Either::Left(vec![1, 2, 3]),
//!     Either::Right([4, 5]),
//! ];
//! let lengths: Vec<usize> = sources.iter().map(|source| source.cursor().count()).collect();
//! assert_eq!(lengths, vec![3, 2]);
//! ```

use std::iter::FusedIterator;

use super::Sequence;

/// A value that is either a `Left(L)` or a `Right(R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    /// The left variant.
    Left(L),
    /// The right variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }
}

impl<L, R> Iterator for Either<L, R>
where
    L: Iterator,
    R: Iterator<Item = L::Item>,
{
    type Item = L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Left(left) => left.next(),
            Self::Right(right) => right.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Left(left) => left.size_hint(),
            Self::Right(right) => right.size_hint(),
        }
    }
}

impl<L, R> FusedIterator for Either<L, R>
where
    L: FusedIterator,
    R: FusedIterator<Item = L::Item>,
{
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    type Cursor<'a>
        = Either<L::Cursor<'a>, R::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        match self {
            Self::Left(left) => Either::Left(left.cursor()),
            Self::Right(right) => Either::Right(right.cursor()),
        }
    }
}
