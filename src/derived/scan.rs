use std::iter::{Enumerate, FusedIterator};

use crate::chain::Chain;
use crate::protocol::Sequence;

/// Sequence produced by [`scan`].
#[derive(Debug, Clone)]
pub struct Scan<S, F, A> {
    input: S,
    function: F,
    init: A,
}

impl<S, F, A> Sequence for Scan<S, F, A>
where
    S: Sequence,
    F: Fn(A, S::Item, usize) -> A,
    A: Clone,
{
    type Item = A;
    type Cursor<'a>
        = ScanCursor<'a, S::Cursor<'a>, F, A>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ScanCursor {
            input: self.input.cursor().enumerate(),
            function: &self.function,
            accumulator: Some(self.init.clone()),
            seeded: false,
        }
    }
}

/// Cursor over a [`Scan`] sequence.
pub struct ScanCursor<'a, C, F, A> {
    input: Enumerate<C>,
    function: &'a F,
    accumulator: Option<A>,
    seeded: bool,
}

impl<C, F, A> Iterator for ScanCursor<'_, C, F, A>
where
    C: Iterator,
    F: Fn(A, C::Item, usize) -> A,
    A: Clone,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.seeded {
            self.seeded = true;
            return self.accumulator.clone();
        }
        let accumulator = self.accumulator.take()?;
        let (index, value) = self.input.next()?;
        let next = (self.function)(accumulator, value, index);
        self.accumulator = Some(next.clone());
        Some(next)
    }
}

impl<C, F, A> FusedIterator for ScanCursor<'_, C, F, A>
where
    C: Iterator,
    F: Fn(A, C::Item, usize) -> A,
    A: Clone,
{
}

/// Exclusive prefix scan: yields `init`, then every running accumulation.
///
/// The result always has one more element than `input`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::scan;
///
/// let running = scan(vec![1, 2, 3], |total, value, _| total + value, 0);
/// assert_eq!(running.to_array(), vec![0, 1, 3, 6]);
///
/// assert_eq!(scan(None::<Vec<i32>>, |total, value, _| total + value, 5).to_array(), vec![5]);
/// ```
pub const fn scan<S, F, A>(input: S, function: F, init: A) -> Chain<Scan<S, F, A>>
where
    S: Sequence,
    F: Fn(A, S::Item, usize) -> A,
    A: Clone,
{
    Chain::new(Scan {
        input,
        function,
        init,
    })
}

/// Sequence produced by [`flat_scan`].
#[derive(Debug, Clone)]
pub struct FlatScan<S, F, A> {
    input: S,
    function: F,
    init: A,
}

impl<S, F, A, U> Sequence for FlatScan<S, F, A>
where
    S: Sequence,
    F: Fn(A, S::Item, usize) -> (A, U),
    A: Clone,
    U: IntoIterator,
{
    type Item = U::Item;
    type Cursor<'a>
        = FlatScanCursor<'a, S::Cursor<'a>, F, A, U>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        FlatScanCursor {
            input: self.input.cursor().enumerate(),
            function: &self.function,
            state: Some(self.init.clone()),
            inner: None,
        }
    }
}

/// Cursor over a [`FlatScan`] sequence.
///
/// `state` is dropped once `input` is exhausted.
pub struct FlatScanCursor<'a, C, F, A, U: IntoIterator> {
    input: Enumerate<C>,
    function: &'a F,
    state: Option<A>,
    inner: Option<U::IntoIter>,
}

impl<C, F, A, U> Iterator for FlatScanCursor<'_, C, F, A, U>
where
    C: Iterator,
    F: Fn(A, C::Item, usize) -> (A, U),
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
            let state = self.state.take()?;
            let (index, value) = self.input.next()?;
            let (state, inner) = (self.function)(state, value, index);
            self.state = Some(state);
            self.inner = Some(inner.into_iter());
        }
    }
}

impl<C, F, A, U> FusedIterator for FlatScanCursor<'_, C, F, A, U>
where
    C: Iterator,
    F: Fn(A, C::Item, usize) -> (A, U),
    U: IntoIterator,
{
}

/// Threads a state through the sequence while expanding every value into
/// an inner iterable.
///
/// `function` receives the current state, the value and its index and
/// returns the next state together with the elements to yield.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::flat_scan;
///
/// // Emit each value once per unit of the running total so far.
/// let expanded = flat_scan(
///     vec!['a', 'b', 'c'],
///     |count: usize, value, _| (count + 1, vec![value; count + 1]),
///     0,
/// );
/// assert_eq!(expanded.to_array(), vec!['a', 'b', 'b', 'c', 'c', 'c']);
/// ```
pub const fn flat_scan<S, F, A, U>(input: S, function: F, init: A) -> Chain<FlatScan<S, F, A>>
where
    S: Sequence,
    F: Fn(A, S::Item, usize) -> (A, U),
    A: Clone,
    U: IntoIterator,
{
    Chain::new(FlatScan {
        input,
        function,
        init,
    })
}
