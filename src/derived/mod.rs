//! Combinators derived from the primitives.
//!
//! Lazy combinators return a [`Chain`](crate::chain::Chain) and pull nothing
//! from their source until a cursor over the result is advanced. Their
//! callbacks are `Fn` because a sequence may have several cursors alive at
//! once. Terminal operations consume a traversal eagerly and accept `FnMut`.
//!
//! | Group | Operations |
//! |---|---|
//! | transform | [`map`], [`filter`], [`filter_map`], [`flat`], [`flatten`], [`flat_optional`], [`concat`] |
//! | slicing | [`take_while`], [`take`], [`drop`], [`drop_right`] |
//! | generation | [`generate`], [`repeat`] |
//! | combination | [`zip`], [`uniq`], [`uniq_by`], [`scan`], [`flat_scan`] |
//! | folding | [`fold`], [`try_fold`], [`reduce`], [`reduce_with`], [`for_each`], [`try_for_each`], [`sum`], [`min`], [`max`], [`first`], [`last`] |
//! | searching | [`find`], [`find_entry`], [`some`], [`non_empty`], [`every`], [`is_empty`] |
//! | equality | [`is_equal`], [`is_equal_by`], [`is_equivalent`], [`is_equivalent_by`], [`is_strict_equal`], [`array_equal`], [`array_equal_by`] |
//! | materializing | [`to_array`], [`reverse`], [`array_reverse`], [`join`] |

mod equality;
mod fold;
mod generate;
mod materialize;
mod scan;
mod search;
mod slice;
mod transform;
mod uniq;
mod zip;

pub use equality::{
    array_equal, array_equal_by, is_equal, is_equal_by, is_equivalent, is_equivalent_by,
    is_strict_equal,
};
pub use fold::{
    first, fold, for_each, last, max, min, reduce, reduce_with, sum, try_fold, try_for_each,
};
pub use generate::{generate, repeat};
pub use materialize::{ArrayReverse, array_reverse, join, reverse, to_array};
pub use scan::{FlatScan, FlatScanCursor, Scan, ScanCursor, flat_scan, scan};
pub use search::{every, find, find_entry, is_empty, non_empty, some};
pub use slice::{drop, drop_right, take, take_while};
pub use transform::{Concat, ConcatCursor, concat, filter, filter_map, flat, flat_optional, map, optional_to_array};
pub use transform::flat as flatten;
pub use uniq::{uniq, uniq_by};
pub use zip::{Zip, ZipCursor, zip};
