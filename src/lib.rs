//! # lazy-iterable
//!
//! Lazy, chainable sequence combinators for Rust.
//!
//! ## Overview
//!
//! Every combinator in this crate works over the [`Sequence`](protocol::Sequence)
//! protocol: a value that can hand out fresh cursors on demand. Combinators
//! never materialize intermediate collections; nothing is pulled from a
//! source until a cursor over the result is advanced.
//!
//! The crate is layered:
//!
//! - **Protocol**: [`Sequence`](protocol::Sequence), sources such as
//!   [`iterable`](protocol::iterable), [`one_shot`](protocol::one_shot),
//!   [`empty`](protocol::empty) and [`infinite`](protocol::infinite)
//! - **Primitives**: [`flat_map`](primitive::flat_map) and
//!   [`entries`](primitive::entries), from which everything else is derived
//! - **Derived combinators**: `map`, `filter`, `take_while`, `zip`, `uniq`,
//!   `scan`, `fold`, `is_equal`, ...
//! - **Chainable adapter**: [`Chain`](chain::Chain) exposes every combinator
//!   as a method
//! - **Keyed collections**: [`ObjectAsMap`](keyed::ObjectAsMap) with
//!   `values`, `entries`, `group_by` and `to_object`
//!
//! Absent inputs are `None`. `Option<S>` is itself a sequence, so every
//! combinator treats an absent source as an empty one.
//!
//! ## Feature Flags
//!
//! - `keyed` (default): keyed-collection helpers
//! - `serde`: `Serialize`/`Deserialize` for `ObjectAsMap`
//! - `tracing`: trace-level events from cursors and terminal operations
//! - `fxhash` / `ahash`: faster hashers for `uniq` and `ObjectAsMap`
//! - `full`: `keyed`, `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use lazy_iterable::prelude::*;
//!
//! let squares_of_evens = chain(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|value, _| value % 2 == 0)
//!     .map(|value, _| value * value)
//!     .to_array();
//! assert_eq!(squares_of_evens, vec![4, 16, 36]);
//!
//! // Infinite sources are fine as long as something bounds them.
//! let naturals = generate(|index| index, None).take(3).to_array();
//! assert_eq!(naturals, vec![0, 1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod trace;

mod hash;

/// Prelude module for convenient imports.
///
/// Re-exports the protocol, the primitives, every derived combinator and
/// the chainable adapter. The keyed-collection helpers are left out because
/// their `entries` would shadow the positional [`entries`](primitive::entries);
/// use them through [`keyed`].
///
/// # Usage
///
/// ```rust
/// use lazy_iterable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::*;
    pub use crate::chain::*;
    pub use crate::derived::*;
    pub use crate::primitive::*;
    pub use crate::protocol::*;
}

pub mod algebra;
pub mod chain;
pub mod derived;
pub mod primitive;
pub mod protocol;

#[cfg(feature = "keyed")]
pub mod keyed;
