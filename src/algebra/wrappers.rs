//! Newtype wrappers selecting a combining operation.

macro_rules! wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

wrapper! {
    /// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`, identity
    /// `Sum(A::default())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_iterable::algebra::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(3).combine(Sum::new(5)).into_inner(), 8);
    /// ```
    Sum
}

wrapper! {
    /// The minimum monoid. Its identity is [`Bounded::MAX_VALUE`].
    Min
}

wrapper! {
    /// The maximum monoid. Its identity is [`Bounded::MIN_VALUE`].
    Max
}

/// Types with a smallest and a largest value.
///
/// Floats use the infinities, so the identity of `Min<f64>` is `+inf` and
/// that of `Max<f64>` is `-inf`.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::algebra::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Percent(u8);
///
/// impl Bounded for Percent {
///     const MIN_VALUE: Self = Percent(0);
///     const MAX_VALUE: Self = Percent(100);
/// }
///
/// assert_eq!(Percent::MAX_VALUE.0, 100);
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_constants {
    ($($type:ty),* $(,)?) => {
        $(
            impl Bounded for $type {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_constants!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char
);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
