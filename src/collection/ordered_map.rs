//! Insertion-ordered map with unique keys.
//!
//! [`OrderedMap`] is the backing store of every [`Collection`](super::Collection).
//! It wraps an [`IndexMap`], which keeps entries in insertion order while lookups
//! stay O(1).
//!
//! Unlike [`Collection`](super::Collection), an `OrderedMap` is an ordinary owned,
//! mutable value. [`Collection::to_array`](super::Collection::to_array) hands one out
//! as a copy, so callers can edit it freely without affecting the collection.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `get`          | O(1)       |
//! | `contains_key` | O(1)       |
//! | `insert`       | O(1)*      |
//! | `remove`       | O(n)       |
//! | `iter`         | O(1) + O(n)|
//!
//! \* amortized. `remove` shifts the following entries to keep the order intact.
//!
//! # Examples
//!
//! ```rust
//! use fluent_collection::collection::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("b", 20);
//!
//! // Re-inserting a key keeps its original position
//! let entries: Vec<(&&str, &i32)> = map.iter().collect();
//! assert_eq!(entries, vec![(&"b", &20), (&"a", &1)]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;

use super::IndexHasher;
use super::access::ReadOnlyAccess;

pub use indexmap::map::{IntoIter, Iter};

/// An insertion-ordered map with unique keys.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups require `Eq + Hash`.
/// * `V` - The value type.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    inner: IndexMap<K, V, IndexHasher>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::OrderedMap;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::with_hasher(IndexHasher::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.inner.keys()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.inner.values()
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Builds a map from entries whose keys are already known to be unique.
    ///
    /// Used by operators that derive a subset or a re-keyed copy of an existing map.
    pub(crate) fn from_unique_entries(entries: Vec<(K, V)>) -> Self {
        let expected = entries.len();
        let map: Self = entries.into_iter().collect();
        debug_assert_eq!(map.len(), expected, "duplicate key in unique entries");
        map
    }

    /// Inserts a key-value pair.
    ///
    /// A new key is appended at the end. An existing key keeps its position and its
    /// value is replaced; the previous value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "uno"), Some("one"));
    /// assert_eq!(map.get(&1), Some(&"uno"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// Returns the value under `key`, inserting `default()` at the end first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.inner.entry(key).or_insert_with(default)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes `key` and returns its value, keeping the order of the remaining entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
    /// assert_eq!(map.remove(&2), Some('b'));
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.shift_remove(key)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> ReadOnlyAccess<K, V> for OrderedMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Iteration
// =============================================================================

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Equality is order-sensitive: two maps are equal when they hold the same pairs in
/// the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for OrderedMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <IndexMap<K, V, IndexHasher> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(|inner| Self { inner })
    }
}

// =============================================================================
// Tests
// =============================================================================
