//! Keyed-collection helpers.
//!
//! [`ObjectAsMap`] is a string-keyed mapping in insertion order. The helpers
//! here accept any sequence of `(key, value)` pairs, an `ObjectAsMap`
//! included, so they compose with the rest of the crate.
//!
//! A key whose value may be absent is modelled as `ObjectAsMap<Option<T>>`.
//! [`values`] and [`entries`] report every key; [`defined_values`] and
//! [`defined_entries`] skip the keys holding `None`.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iterable::keyed::{group_by, values};
//!
//! let totals = group_by(vec![("a", 1), ("b", 2), ("a", 3)], |prior, value| prior + value);
//! assert_eq!(totals.get("a"), Some(&4));
//! assert_eq!(values(&totals).to_array(), vec![4, 2]);
//! ```

mod object_map;

pub use object_map::{Iter, ObjectAsMap, ObjectAsMapCursor};

use crate::chain::Chain;
use crate::derived::{filter_map, fold, map};
use crate::protocol::Sequence;

/// The values of a keyed sequence, in order.
pub fn values<S, T>(input: S) -> Chain<impl Sequence<Item = T>>
where
    S: Sequence<Item = (String, T)>,
{
    map(input, |(_, value), _| value)
}

/// The `(key, value)` pairs of a keyed sequence, in order.
pub const fn entries<S, T>(input: S) -> Chain<S>
where
    S: Sequence<Item = (String, T)>,
{
    Chain::new(input)
}

/// The present values of a keyed sequence whose values are optional.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::keyed::{ObjectAsMap, defined_values, values};
///
/// let object = ObjectAsMap::new().with("a", Some(1)).with("b", None).with("c", Some(3));
/// assert_eq!(defined_values(&object).to_array(), vec![1, 3]);
/// assert_eq!(values(&object).to_array(), vec![Some(1), None, Some(3)]);
/// ```
pub fn defined_values<S, T>(input: S) -> Chain<impl Sequence<Item = T>>
where
    S: Sequence<Item = (String, Option<T>)>,
{
    filter_map(input, |(_, value), _| value)
}

/// The `(key, value)` pairs whose value is present.
pub fn defined_entries<S, T>(input: S) -> Chain<impl Sequence<Item = (String, T)>>
where
    S: Sequence<Item = (String, Option<T>)>,
{
    filter_map(input, |(key, value), _| value.map(|value| (key, value)))
}

/// Builds a `(key, value)` pair.
pub fn name_value<T>(name: impl Into<String>, value: T) -> (String, T) {
    (name.into(), value)
}

/// Folds `(key, value)` pairs into an [`ObjectAsMap`].
///
/// The first value seen for a key is stored as is; every later value for
/// that key is combined as `reduce(prior, value)`. Keys keep the position of
/// their first appearance. Presence is tracked by key, so `0`, `""` and
/// `false` group like any other value.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::keyed::group_by;
///
/// let words = group_by(
///     vec![("x", String::from("a")), ("y", String::from("b")), ("x", String::from("c"))],
///     |prior, value| prior + &value,
/// );
/// assert_eq!(words.get("x").map(String::as_str), Some("ac"));
/// ```
pub fn group_by<S, K, T, F>(input: S, mut reduce: F) -> ObjectAsMap<T>
where
    S: Sequence<Item = (K, T)>,
    K: Into<String>,
    F: FnMut(T, T) -> T,
{
    fold(
        input,
        |object: ObjectAsMap<T>, (key, value), _| {
            object.merge(key.into(), value, &mut reduce)
        },
        ObjectAsMap::new(),
    )
}

/// Collects `(key, value)` pairs into an [`ObjectAsMap`]: the last value for
/// a key wins and the key keeps its first position.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::keyed::{name_value, to_object};
///
/// let object = to_object(vec![name_value("a", 1), name_value("b", 2), name_value("a", 3)]);
/// assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(object.get("a"), Some(&3));
/// ```
pub fn to_object<S, K, T>(input: S) -> ObjectAsMap<T>
where
    S: Sequence<Item = (K, T)>,
    K: Into<String>,
{
    group_by(input, |_, value| value)
}

impl<S, K, T> Chain<S>
where
    S: Sequence<Item = (K, T)>,
    K: Into<String>,
{
    /// See [`group_by`].
    pub fn group_by<F>(&self, reduce: F) -> ObjectAsMap<T>
    where
        F: FnMut(T, T) -> T,
    {
        group_by(self.as_inner(), reduce)
    }

    /// See [`to_object`].
    pub fn to_object(&self) -> ObjectAsMap<T> {
        to_object(self.as_inner())
    }
}

impl<T: Clone> ObjectAsMap<T> {
    /// Wraps a borrow of this mapping in a [`Chain`] of owned pairs.
    pub const fn chain(&self) -> Chain<&Self> {
        Chain::new(self)
    }
}
