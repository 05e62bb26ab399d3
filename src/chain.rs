//! Chainable adapter.
//!
//! [`Chain`] wraps any [`Sequence`] and exposes the combinators of
//! [`derived`](crate::derived) as methods. Lazy combinators consume the chain
//! and return a new one; terminal operations borrow it, so a re-iterable
//! chain can be consumed many times.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iterable::chain::chain;
//!
//! let words = chain(vec!["lazy", "chain", "of", "words"]);
//! let long = words.clone().filter(|word, _| word.len() > 2).to_array();
//! assert_eq!(long, vec!["lazy", "chain", "words"]);
//!
//! let lengths = words.map(|word, _| word.len());
//! assert_eq!(lengths.sum(), 16);
//! assert_eq!(lengths.max(), 5);
//! ```

use std::hash::Hash;
use std::iter;
use std::ops::Add;

use crate::algebra::Bounded;
use crate::derived::{self, Concat, FlatScan, Scan, Zip};
use crate::primitive::{self, Entries, FlatMap};
use crate::protocol::{Either, Entry, Sequence, SizedSequence};

/// A sequence decorated with combinator methods.
///
/// Holds only the wrapped sequence. Wrapping never traverses or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Chain<S> {
    sequence: S,
}

/// Wraps `sequence` in a [`Chain`].
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::chain::chain;
///
/// assert_eq!(chain([1, 2, 3]).reverse(), vec![3, 2, 1]);
/// ```
pub const fn chain<S: Sequence>(sequence: S) -> Chain<S> {
    Chain::new(sequence)
}

impl<S> Chain<S> {
    /// Wraps `sequence`.
    #[inline]
    pub const fn new(sequence: S) -> Self {
        Self { sequence }
    }

    /// Returns the wrapped sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.sequence
    }

    /// Returns a reference to the wrapped sequence.
    #[inline]
    pub const fn as_inner(&self) -> &S {
        &self.sequence
    }
}

impl<S: Sequence> Sequence for Chain<S> {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.sequence.cursor()
    }
}

impl<S: SizedSequence> SizedSequence for Chain<S> {
    fn length(&self) -> usize {
        self.sequence.length()
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Chain<S> {
    type Item = S::Item;
    type IntoIter = S::Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequence.cursor()
    }
}

// Lazy combinators.
impl<S: Sequence> Chain<S> {
    /// Returns a fresh cursor over the wrapped sequence.
    pub fn iter(&self) -> S::Cursor<'_> {
        self.sequence.cursor()
    }

    /// Pairs each value with its traversal index.
    pub fn entries(self) -> Chain<Entries<S>> {
        primitive::entries(self.sequence)
    }

    /// See [`flat_map`](primitive::flat_map).
    pub fn flat_map<F, U>(self, function: F) -> Chain<FlatMap<S, F>>
    where
        F: Fn(S::Item, usize) -> Option<U>,
        U: IntoIterator,
    {
        primitive::flat_map(self.sequence, function)
    }

    /// See [`map`](derived::map).
    pub fn map<F, R>(self, function: F) -> Chain<impl Sequence<Item = R>>
    where
        F: Fn(S::Item, usize) -> R,
    {
        derived::map(self.sequence, function)
    }

    /// See [`filter`](derived::filter).
    pub fn filter<P>(self, predicate: P) -> Chain<impl Sequence<Item = S::Item>>
    where
        P: Fn(&S::Item, usize) -> bool,
    {
        derived::filter(self.sequence, predicate)
    }

    /// See [`filter_map`](derived::filter_map).
    pub fn filter_map<F, R>(self, function: F) -> Chain<impl Sequence<Item = R>>
    where
        F: Fn(S::Item, usize) -> Option<R>,
    {
        derived::filter_map(self.sequence, function)
    }

    /// See [`flat`](derived::flat).
    pub fn flat(self) -> Chain<impl Sequence<Item = <S::Item as IntoIterator>::Item>>
    where
        S::Item: IntoIterator,
    {
        derived::flat(self.sequence)
    }

    /// See [`flat_optional`](derived::flat_optional).
    pub fn flat_optional<U>(self) -> Chain<impl Sequence<Item = U::Item>>
    where
        S: Sequence<Item = Option<U>>,
        U: IntoIterator,
    {
        derived::flat_optional(self.sequence)
    }

    /// Appends `others` after this sequence. See [`concat`](derived::concat).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_iterable::chain::chain;
    ///
    /// let joined = chain(vec![1]).concat([Some(vec![2, 3]), None]);
    /// assert_eq!(joined.to_array(), vec![1, 2, 3]);
    /// ```
    pub fn concat<I>(self, others: I) -> Chain<Concat<Either<S, I::Item>>>
    where
        I: IntoIterator,
        I::Item: Sequence<Item = S::Item>,
    {
        derived::concat(
            iter::once(Either::Left(self.sequence)).chain(others.into_iter().map(Either::Right)),
        )
    }

    /// Zips this sequence with `others`; this sequence is the first lane.
    /// See [`zip`](derived::zip).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_iterable::chain::chain;
    ///
    /// let rows = chain(vec![1, 2, 3]).zip([vec![4, 5]]);
    /// assert_eq!(rows.to_array(), vec![vec![1, 4], vec![2, 5]]);
    /// ```
    pub fn zip<I>(self, others: I) -> Chain<Zip<Either<S, I::Item>>>
    where
        I: IntoIterator,
        I::Item: Sequence<Item = S::Item>,
    {
        derived::zip(
            iter::once(Either::Left(self.sequence)).chain(others.into_iter().map(Either::Right)),
        )
    }

    /// See [`take_while`](derived::take_while).
    pub fn take_while<P>(self, predicate: P) -> Chain<impl Sequence<Item = S::Item>>
    where
        P: Fn(&S::Item, usize) -> bool,
    {
        derived::take_while(self.sequence, predicate)
    }

    /// See [`take`](derived::take).
    pub fn take(self, count: usize) -> Chain<impl Sequence<Item = S::Item>> {
        derived::take(self.sequence, count)
    }

    /// See [`drop`](derived::drop).
    pub fn drop(self, count: usize) -> Chain<impl Sequence<Item = S::Item>> {
        derived::drop(self.sequence, count)
    }

    /// See [`drop_right`](derived::drop_right).
    pub fn drop_right(self, count: usize) -> Chain<impl Sequence<Item = S::Item>>
    where
        S: SizedSequence,
    {
        derived::drop_right(self.sequence, count)
    }

    /// See [`uniq`](derived::uniq).
    pub fn uniq(self) -> Chain<impl Sequence<Item = S::Item>>
    where
        S::Item: Hash + Eq + Clone,
    {
        derived::uniq(self.sequence)
    }

    /// See [`uniq_by`](derived::uniq_by).
    pub fn uniq_by<F, K>(self, key: F) -> Chain<impl Sequence<Item = S::Item>>
    where
        F: Fn(&S::Item) -> K,
        K: Hash + Eq + Clone,
    {
        derived::uniq_by(self.sequence, key)
    }

    /// See [`scan`](derived::scan).
    pub fn scan<F, A>(self, function: F, init: A) -> Chain<Scan<S, F, A>>
    where
        F: Fn(A, S::Item, usize) -> A,
        A: Clone,
    {
        derived::scan(self.sequence, function, init)
    }

    /// See [`flat_scan`](derived::flat_scan).
    pub fn flat_scan<F, A, U>(self, function: F, init: A) -> Chain<FlatScan<S, F, A>>
    where
        F: Fn(A, S::Item, usize) -> (A, U),
        A: Clone,
        U: IntoIterator,
    {
        derived::flat_scan(self.sequence, function, init)
    }
}

// Terminal operations.
impl<S: Sequence> Chain<S> {
    /// See [`fold`](derived::fold).
    pub fn fold<A, F>(&self, function: F, init: A) -> A
    where
        F: FnMut(A, S::Item, usize) -> A,
    {
        derived::fold(&self.sequence, function, init)
    }

    /// See [`try_fold`](derived::try_fold).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_fold<A, E, F>(&self, function: F, init: A) -> Result<A, E>
    where
        F: FnMut(A, S::Item, usize) -> Result<A, E>,
    {
        derived::try_fold(&self.sequence, function, init)
    }

    /// See [`reduce`](derived::reduce).
    pub fn reduce<F>(&self, function: F) -> Option<S::Item>
    where
        F: FnMut(S::Item, S::Item, usize) -> S::Item,
    {
        derived::reduce(&self.sequence, function)
    }

    /// See [`reduce_with`](derived::reduce_with).
    pub fn reduce_with<F>(&self, function: F, init: S::Item) -> S::Item
    where
        F: FnMut(S::Item, S::Item, usize) -> S::Item,
    {
        derived::reduce_with(&self.sequence, function, init)
    }

    /// See [`for_each`](derived::for_each).
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(S::Item, usize),
    {
        derived::for_each(&self.sequence, function);
    }

    /// See [`try_for_each`](derived::try_for_each).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    pub fn try_for_each<E, F>(&self, function: F) -> Result<(), E>
    where
        F: FnMut(S::Item, usize) -> Result<(), E>,
    {
        derived::try_for_each(&self.sequence, function)
    }

    /// See [`sum`](derived::sum).
    pub fn sum(&self) -> S::Item
    where
        S::Item: Add<Output = S::Item> + Default,
    {
        derived::sum(&self.sequence)
    }

    /// See [`min`](derived::min).
    pub fn min(&self) -> S::Item
    where
        S::Item: PartialOrd + Bounded + Clone,
    {
        derived::min(&self.sequence)
    }

    /// See [`max`](derived::max).
    pub fn max(&self) -> S::Item
    where
        S::Item: PartialOrd + Bounded + Clone,
    {
        derived::max(&self.sequence)
    }

    /// See [`first`](derived::first).
    pub fn first(&self) -> Option<S::Item> {
        derived::first(&self.sequence)
    }

    /// See [`last`](derived::last).
    pub fn last(&self) -> Option<S::Item> {
        derived::last(&self.sequence)
    }

    /// See [`find`](derived::find).
    pub fn find<P>(&self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item, usize) -> bool,
    {
        derived::find(&self.sequence, predicate)
    }

    /// See [`find_entry`](derived::find_entry).
    pub fn find_entry<P>(&self, predicate: P) -> Option<Entry<S::Item>>
    where
        P: FnMut(&S::Item, usize) -> bool,
    {
        derived::find_entry(&self.sequence, predicate)
    }

    /// See [`some`](derived::some).
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item, usize) -> bool,
    {
        derived::some(&self.sequence, predicate)
    }

    /// See [`every`](derived::every).
    pub fn every<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&S::Item, usize) -> bool,
    {
        derived::every(&self.sequence, predicate)
    }

    /// See [`non_empty`](derived::non_empty).
    pub fn non_empty(&self) -> bool {
        derived::non_empty(&self.sequence)
    }

    /// See [`is_empty`](derived::is_empty).
    pub fn is_empty(&self) -> bool {
        derived::is_empty(&self.sequence)
    }

    /// Compares this sequence with `other`. See [`is_equal`](derived::is_equal).
    pub fn is_equal(&self, other: Option<&Self>) -> bool
    where
        S::Item: PartialEq,
    {
        derived::is_equal(Some(self), other)
    }

    /// Compares this sequence with `other` using `equal`.
    /// See [`is_equal_by`](derived::is_equal_by).
    pub fn is_equal_by<E>(&self, other: Option<&Self>, equal: E) -> bool
    where
        E: FnMut(&S::Item, &S::Item) -> bool,
    {
        derived::is_equal_by(Some(self), other, equal)
    }

    /// Compares this sequence with a sequence of any type.
    /// See [`is_equivalent`](derived::is_equivalent).
    pub fn is_equivalent<B>(&self, other: Option<&B>) -> bool
    where
        B: Sequence,
        S::Item: PartialEq<B::Item>,
    {
        derived::is_equivalent(Some(&self.sequence), other)
    }

    /// See [`is_equivalent_by`](derived::is_equivalent_by).
    pub fn is_equivalent_by<B, E>(&self, other: Option<&B>, equal: E) -> bool
    where
        B: Sequence,
        E: FnMut(&S::Item, &B::Item) -> bool,
    {
        derived::is_equivalent_by(Some(&self.sequence), other, equal)
    }

    /// See [`to_array`](derived::to_array).
    pub fn to_array(&self) -> Vec<S::Item> {
        derived::to_array(&self.sequence)
    }

    /// See [`reverse`](derived::reverse).
    pub fn reverse(&self) -> Vec<S::Item> {
        derived::reverse(&self.sequence)
    }

    /// See [`join`](derived::join).
    pub fn join(&self, separator: &str) -> String
    where
        S::Item: AsRef<str>,
    {
        derived::join(&self.sequence, separator)
    }
}
