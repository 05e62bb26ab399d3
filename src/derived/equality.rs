use std::ptr;

use crate::protocol::Sequence;

/// Strict equality as a free function, suitable as an element comparator.
pub fn is_strict_equal<T, U>(left: &T, right: &U) -> bool
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    left == right
}

/// Compares two optional sequences of the same type element by element.
///
/// - The same sequence on both sides is equal without being traversed.
/// - Two absent sequences are equal; absent and present are not.
/// - Otherwise both are advanced in lock step as by [`is_equivalent_by`].
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::is_equal_by;
///
/// let lower = vec!["a", "b"];
/// let upper = vec!["A", "B"];
/// assert!(is_equal_by(Some(&lower), Some(&upper), |left, right| left.eq_ignore_ascii_case(right)));
/// assert!(!is_equal_by(Some(&lower), None, |left, right| left == right));
/// ```
pub fn is_equal_by<S, E>(left: Option<&S>, right: Option<&S>, equal: E) -> bool
where
    S: Sequence,
    E: FnMut(&S::Item, &S::Item) -> bool,
{
    if let (Some(left), Some(right)) = (left, right)
        && ptr::eq(left, right)
    {
        return true;
    }
    is_equivalent_by(left, right, equal)
}

/// [`is_equal_by`] with `==` as the element comparator.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::is_equal;
///
/// assert!(is_equal(Some(&vec![1, 2]), Some(&vec![1, 2])));
/// assert!(!is_equal(Some(&vec![1, 2]), Some(&vec![1, 2, 3])));
/// assert!(is_equal(None::<&Vec<i32>>, None));
/// ```
pub fn is_equal<S>(left: Option<&S>, right: Option<&S>) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    is_equal_by(left, right, is_strict_equal)
}

/// Compares two optional sequences, possibly of different types, element
/// by element with `equal`.
///
/// Two absent sequences are equal; absent and present are not. Otherwise
/// both are always traversed in lock step: the first mismatching pair or
/// the first side to run out early makes them unequal.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::{generate, is_equivalent_by};
///
/// let generated = generate(|index| index * 2, Some(3));
/// assert!(is_equivalent_by(Some(&generated), Some(&[0_u32, 2, 4]), |left, right| {
///     u32::try_from(*left).is_ok_and(|left| left == *right)
/// }));
/// ```
pub fn is_equivalent_by<A, B, E>(left: Option<&A>, right: Option<&B>, mut equal: E) -> bool
where
    A: Sequence,
    B: Sequence,
    E: FnMut(&A::Item, &B::Item) -> bool,
{
    let (left, right) = match (left, right) {
        (None, None) => return true,
        (Some(left), Some(right)) => (left, right),
        _ => return false,
    };
    let mut left_cursor = left.cursor();
    let mut right_cursor = right.cursor();
    loop {
        match (left_cursor.next(), right_cursor.next()) {
            (Some(left_value), Some(right_value)) => {
                if !equal(&left_value, &right_value) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// [`is_equivalent_by`] with `==` as the element comparator.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::is_equivalent;
///
/// assert!(is_equivalent(Some(&vec![1, 2]), Some(&[1, 2])));
/// assert!(!is_equivalent(Some(&vec![1, 2]), Some(&[1, 2, 3])));
/// ```
pub fn is_equivalent<A, B>(left: Option<&A>, right: Option<&B>) -> bool
where
    A: Sequence,
    B: Sequence,
    A::Item: PartialEq<B::Item>,
{
    is_equivalent_by(left, right, is_strict_equal)
}

/// Compares two optional slices: same length and pairwise `equal`.
///
/// The same slice on both sides is equal without calling `equal`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::derived::array_equal_by;
///
/// let left = ["Alpha", "beta"];
/// let right = ["alpha", "BETA"];
/// assert!(array_equal_by(Some(&left[..]), Some(&right[..]), |left, right| {
///     left.eq_ignore_ascii_case(right)
/// }));
/// ```
pub fn array_equal_by<T, E>(left: Option<&[T]>, right: Option<&[T]>, mut equal: E) -> bool
where
    E: FnMut(&T, &T) -> bool,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            ptr::eq(left, right)
                || (left.len() == right.len()
                    && left.iter().zip(right).all(|(left, right)| equal(left, right)))
        }
        _ => false,
    }
}

/// [`array_equal_by`] with `==` as the element comparator.
pub fn array_equal<T: PartialEq>(left: Option<&[T]>, right: Option<&[T]>) -> bool {
    array_equal_by(left, right, is_strict_equal)
}
