//! Primitive combinators.
//!
//! - [`entries`]: pairs every value with its zero-based traversal position
//! - [`flat_map`]: maps each value to an inner iterable and concatenates
//!   the results, stopping the whole traversal when the mapping returns
//!   `None`
//!
//! Every derived combinator in [`crate::derived`] is a specialization of
//! these two operations, so nested cursor bookkeeping lives in exactly one
//! place.

mod entries;
mod flat_map;

pub use entries::{Entries, entries};
pub use flat_map::{FlatMap, FlatMapCursor, flat_map};
