//! Algebraic structures behind the numeric folds.
//!
//! - [`Semigroup`]: types with an associative `combine`
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Min`], [`Max`]: newtype wrappers selecting which operation
//!   a numeric type combines with
//! - [`Bounded`]: extreme values used as the identities of `Min` and `Max`
//!
//! [`sum`](crate::derived::sum), [`min`](crate::derived::min) and
//! [`max`](crate::derived::max) are folds over these monoids, which is why an
//! empty input yields the identity instead of `None`.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iterable::algebra::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! assert_eq!(Sum::<i32>::empty(), Sum::new(0));
//! assert_eq!(Max::<f64>::empty().into_inner(), f64::NEG_INFINITY);
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Sum};
