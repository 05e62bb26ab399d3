//! Hash builder selection.
//!
//! `fxhash` takes precedence over `ahash`; with neither feature the standard
//! `RandomState` is used.

use std::collections::HashSet;

#[cfg(feature = "fxhash")]
pub type KeyHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type KeyHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type KeyHasher = std::collections::hash_map::RandomState;

/// Set of already-seen keys, as used by `uniq`.
pub type KeySet<K> = HashSet<K, KeyHasher>;

/// Insertion-ordered map backing `ObjectAsMap`.
#[cfg(feature = "keyed")]
pub type KeyMap<K, V> = indexmap::IndexMap<K, V, KeyHasher>;
