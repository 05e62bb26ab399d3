use std::cmp::Ordering;
use std::ops::Add;

use super::wrappers::{Max, Min, Sum};

/// A type with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::algebra::Semigroup;
///
/// assert_eq!(String::from("foo").combine(String::from("bar")), "foobar");
/// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Min keeps the smaller value, the left one on ties. A value unordered with
/// itself (`NaN`) absorbs the result.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        match other.0.partial_cmp(&self.0) {
            Some(Ordering::Less) => other,
            Some(_) => self,
            None if is_unordered(&self.0) => self,
            None => other,
        }
    }
}

/// Max keeps the larger value, the left one on ties. A value unordered with
/// itself (`NaN`) absorbs the result.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        match other.0.partial_cmp(&self.0) {
            Some(Ordering::Greater) => other,
            Some(_) => self,
            None if is_unordered(&self.0) => self,
            None => other,
        }
    }
}

/// `true` for values such as `NaN` that do not compare with themselves.
fn is_unordered<A: PartialOrd>(value: &A) -> bool {
    value.partial_cmp(value).is_none()
}
