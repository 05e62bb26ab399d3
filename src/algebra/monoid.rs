use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Sum};

/// A semigroup with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of `iterator`, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_iterable::algebra::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all([Sum::new(1), Sum::new(2)]), Sum::new(3));
    /// assert_eq!(String::combine_all(Vec::<String>::new()), "");
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Min forms a monoid with the maximum bound as the identity.
impl<A: PartialOrd + Bounded + Clone> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

/// Max forms a monoid with the minimum bound as the identity.
impl<A: PartialOrd + Bounded + Clone> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}
