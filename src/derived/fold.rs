use std::ops::Add;

use super::search::find;
use crate::algebra::{Bounded, Max, Min, Monoid, Semigroup, Sum};
use crate::primitive::entries;
use crate::protocol::Sequence;

/// Strict left fold with index. Consumes one full traversal.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::fold;
///
/// let digits = fold(vec![1, 2, 3], |text, value, _| format!("{text}{value}"), String::new());
/// assert_eq!(digits, "123");
/// ```
pub fn fold<S, A, F>(input: S, mut function: F, init: A) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item, usize) -> A,
{
    let sequence = entries(input);
    let mut accumulator = init;
    for (index, value) in &sequence {
        accumulator = function(accumulator, value, index);
    }
    trace_event!(target: "lazy_iterable::fold", "terminal fold finished");
    accumulator
}

/// Left fold whose step may fail; stops at and returns the first error.
///
/// # Errors
///
/// Returns the first `Err` produced by `function`, unchanged. Later values
/// are not pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::try_fold;
///
/// let parsed: Result<i32, std::num::ParseIntError> =
///     try_fold(vec!["1", "2", "3"], |total, text, _| Ok(total + text.parse::<i32>()?), 0);
/// assert_eq!(parsed, Ok(6));
///
/// let failed: Result<i32, std::num::ParseIntError> =
///     try_fold(vec!["1", "x", "3"], |total, text, _| Ok(total + text.parse::<i32>()?), 0);
/// assert!(failed.is_err());
/// ```
pub fn try_fold<S, A, E, F>(input: S, mut function: F, init: A) -> Result<A, E>
where
    S: Sequence,
    F: FnMut(A, S::Item, usize) -> Result<A, E>,
{
    let sequence = entries(input);
    let mut accumulator = init;
    for (index, value) in &sequence {
        accumulator = function(accumulator, value, index)?;
    }
    Ok(accumulator)
}

/// Folds without a seed: the first value starts the accumulation.
///
/// Returns `None` for an empty or absent input.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::reduce;
///
/// assert_eq!(reduce(Vec::<i32>::new(), |a, b, _| a + b), None);
/// assert_eq!(reduce(vec![1], |a, b, _| a + b), Some(1));
/// assert_eq!(reduce(vec![1, 2], |a, b, _| a + b), Some(3));
/// ```
pub fn reduce<S, F>(input: S, mut function: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    fold(
        input,
        |accumulator, value, index| {
            Some(match accumulator {
                Some(accumulator) => function(accumulator, value, index),
                None => value,
            })
        },
        None,
    )
}

/// Reduction with an explicit seed; always returns a value.
pub fn reduce_with<S, F>(input: S, function: F, init: S::Item) -> S::Item
where
    S: Sequence,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    fold(input, function, init)
}

/// Calls `function` on every value for its side effects.
pub fn for_each<S, F>(input: S, mut function: F)
where
    S: Sequence,
    F: FnMut(S::Item, usize),
{
    fold(input, |(), value, index| function(value, index), ());
}

/// Calls a fallible `function` on every value, stopping at the first error.
///
/// # Errors
///
/// Returns the first `Err` produced by `function`.
pub fn try_for_each<S, E, F>(input: S, mut function: F) -> Result<(), E>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> Result<(), E>,
{
    try_fold(input, |(), value, index| function(value, index), ())
}

/// Adds all values; the empty sum is `Default::default()` (zero).
pub fn sum<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: Add<Output = S::Item> + Default,
{
    fold(
        input,
        |total: Sum<S::Item>, value, _| total.combine(Sum::new(value)),
        Sum::empty(),
    )
    .into_inner()
}

/// Smallest value; the empty minimum is [`Bounded::MAX_VALUE`] (`+inf` for
/// floats). A `NaN` anywhere in the input makes the result `NaN`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::min;
///
/// assert_eq!(min(vec![-1.0, -2.0, -3.0]), -3.0);
/// assert_eq!(min(Vec::<f64>::new()), f64::INFINITY);
/// ```
pub fn min<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: PartialOrd + Bounded + Clone,
{
    fold(
        input,
        |smallest: Min<S::Item>, value, _| smallest.combine(Min::new(value)),
        Min::empty(),
    )
    .into_inner()
}

/// Largest value; the empty maximum is [`Bounded::MIN_VALUE`] (`-inf` for
/// floats). A `NaN` anywhere in the input makes the result `NaN`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::max;
///
/// assert_eq!(max(vec![-2, -3, -4]), -2);
/// assert_eq!(max(Vec::<f64>::new()), f64::NEG_INFINITY);
/// ```
pub fn max<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: PartialOrd + Bounded + Clone,
{
    fold(
        input,
        |largest: Max<S::Item>, value, _| largest.combine(Max::new(value)),
        Max::empty(),
    )
    .into_inner()
}

/// First value, pulling exactly one element.
pub fn first<S: Sequence>(input: S) -> Option<S::Item> {
    find(input, |_, _| true)
}

/// Last value, or `None` for an empty input.
pub fn last<S: Sequence>(input: S) -> Option<S::Item> {
    reduce(input, |_, value, _| value)
}
