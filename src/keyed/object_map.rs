use std::fmt;
use std::iter::FusedIterator;

use indexmap::map::Entry as MapEntry;

use crate::hash::KeyMap;
use crate::protocol::Sequence;

/// An immutable string-keyed mapping that remembers insertion order.
///
/// Keys are unique. Re-inserting a key replaces its value but keeps the
/// position where the key first appeared. Traversal order is insertion
/// order; equality ignores it.
///
/// As a [`Sequence`] it yields `(String, T)` pairs.
///
/// # Examples
///
/// ```rust
/// use lazy_iterable::keyed::ObjectAsMap;
///
/// let object = ObjectAsMap::new().with("b", 1).with("a", 2).with("b", 3);
/// assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "a"]);
/// assert_eq!(object.get("b"), Some(&3));
/// ```
#[derive(Clone)]
pub struct ObjectAsMap<T> {
    entries: KeyMap<String, T>,
}

impl<T> ObjectAsMap<T> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: KeyMap::default(),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Borrowing iterator over `(key, value)` in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Returns the mapping with `key` set to `value`.
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: T) -> Self {
        self.merge(key.into(), value, |_, value| value)
    }

    /// Stores `value` under `key`, or combines it with the prior value as
    /// `reduce(prior, value)` when the key is already present.
    pub(crate) fn merge<F>(mut self, key: String, value: T, reduce: F) -> Self
    where
        F: FnOnce(T, T) -> T,
    {
        match self.entries.entry(key) {
            MapEntry::Occupied(slot) => {
                let index = slot.index();
                let (key, prior) = slot.swap_remove_entry();
                let (last, _) = self.entries.insert_full(key, reduce(prior, value));
                // Back into the slot the key first occupied.
                self.entries.swap_indices(index, last);
            }
            MapEntry::Vacant(slot) => {
                slot.insert(value);
            }
        }
        self
    }
}

impl<T> Default for ObjectAsMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjectAsMap<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ObjectAsMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for ObjectAsMap<T> {}

impl<K: Into<String>, T> FromIterator<(K, T)> for ObjectAsMap<T> {
    /// Last value for a key wins; the key keeps its first position.
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |object, (key, value)| object.with(key, value))
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for ObjectAsMap<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iterator: I) {
        let object = std::mem::take(self);
        *self = iterator
            .into_iter()
            .fold(object, |object, (key, value)| object.with(key, value));
    }
}

/// Borrowing iterator over an [`ObjectAsMap`].
pub struct Iter<'a, T> {
    inner: indexmap::map::Iter<'a, String, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ObjectAsMap<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cursor over an [`ObjectAsMap`] viewed as a sequence of owned pairs.
pub struct ObjectAsMapCursor<'a, T> {
    iter: Iter<'a, T>,
}

impl<T: Clone> Iterator for ObjectAsMapCursor<'_, T> {
    type Item = (String, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(key, value)| (key.to_owned(), value.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: Clone> FusedIterator for ObjectAsMapCursor<'_, T> {}

impl<T: Clone> Sequence for ObjectAsMap<T> {
    type Item = (String, T);
    type Cursor<'a>
        = ObjectAsMapCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ObjectAsMapCursor { iter: self.iter() }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ObjectAsMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ObjectAsMapVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ObjectAsMapVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ObjectAsMapVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = ObjectAsMap<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut object = ObjectAsMap::new();
        while let Some((key, value)) = map.next_entry::<String, T>()? {
            object = object.with(key, value);
        }
        Ok(object)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ObjectAsMap<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ObjectAsMapVisitor::new())
    }
}
