//! The immutable [`Collection`] type.
//!
//! A `Collection<K, V>` wraps an [`OrderedMap`] behind an `Arc`. Once built, its
//! key/value set never changes: every transformation returns a new collection, reads
//! never fail, and writes are rejected.
//!
//! # Construction
//!
//! There is no public constructor taking a shared store. Collections are built only
//! through factories that take ownership of their input:
//!
//! - [`Collection::from_sequence`]: values keyed `0..n`
//! - [`Collection::from_map`] and `FromIterator<(K, V)>`: arbitrary keys
//! - [`Collection::generate`](crate::generate): values pulled from a producer
//!
//! # Examples
//!
//! ```rust
//! use fluent_collection::collection::Collection;
//!
//! let collection = Collection::from_sequence([10, 20, 30]);
//! assert_eq!(collection.count(), 3);
//! assert_eq!(collection.get(&1), Some(&20));
//! assert_eq!(collection.get(&7), None);
//!
//! // Writes are always rejected
//! assert!(collection.try_insert(1, 99).is_err());
//! assert_eq!(collection.get(&1), Some(&20));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use super::access::ReadOnlyAccess;
use super::ordered_map::{Iter, OrderedMap};
use crate::error::{CollectionError, Result};

/// An immutable, ordered, keyed collection with a chainable pipeline API.
///
/// Cloning a collection is O(1): clones share the same backing store, which is never
/// modified after construction. A collection of `Send + Sync` keys and values can be
/// read from many threads at once without locking.
///
/// # Type Parameters
///
/// * `K` - The key type. Sequence-built collections use `usize`.
/// * `V` - The value type.
pub struct Collection<K, V> {
    store: Arc<OrderedMap<K, V>>,
}

static_assertions::assert_impl_all!(Collection<usize, i32>: Send, Sync);
static_assertions::assert_impl_all!(Collection<String, Vec<String>>: Send, Sync);

impl<K, V> Collection<K, V> {
    /// Wraps a freshly built store.
    pub(crate) fn from_store(store: OrderedMap<K, V>) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns the backing store.
    #[inline]
    pub(crate) fn store(&self) -> &OrderedMap<K, V> {
        &self.store
    }

    /// Returns the number of key/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// assert_eq!(Collection::from_sequence(["a", "b"]).count(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of key/value pairs. Alias of [`count`](Self::count).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the collection holds no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs in order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.store.iter()
    }
}

impl<K: Clone + Eq + Hash, V> Collection<K, V> {
    /// Creates an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_store(OrderedMap::new())
    }

    /// Creates a collection that takes ownership of `map`, keeping its keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::{Collection, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("x", 1);
    /// map.insert("y", 2);
    ///
    /// let collection = Collection::from_map(map);
    /// assert_eq!(collection.get("y"), Some(&2));
    /// ```
    #[must_use]
    pub fn from_map(map: OrderedMap<K, V>) -> Self {
        Self::from_store(map)
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.contains_key(key)
    }

    /// Rejects a key-based write.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::ImmutabilityViolation`]; the collection is
    /// left untouched.
    pub fn try_insert(&self, _key: K, _value: V) -> Result<()> {
        log::debug!("rejected insert into immutable collection of {} pairs", self.len());
        Err(CollectionError::ImmutabilityViolation { operation: "insert" })
    }

    /// Rejects a key-based delete.
    ///
    /// # Errors
    ///
    /// Always returns [`CollectionError::ImmutabilityViolation`]; the collection is
    /// left untouched.
    pub fn try_remove<Q>(&self, _key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        log::debug!("rejected remove from immutable collection of {} pairs", self.len());
        Err(CollectionError::ImmutabilityViolation { operation: "remove" })
    }
}

impl<K: Clone, V: Clone> Collection<K, V> {
    /// Returns a copy of the contents as an [`OrderedMap`], in order.
    ///
    /// The copy is independent: editing it never affects the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence([1, 2]);
    /// let mut copy = collection.to_array();
    /// copy.insert(5, 5);
    ///
    /// assert_eq!(copy.len(), 3);
    /// assert_eq!(collection.count(), 2);
    /// ```
    #[must_use]
    pub fn to_array(&self) -> OrderedMap<K, V> {
        self.store.as_ref().clone()
    }
}

impl<V> Collection<usize, V> {
    /// Builds a collection from an ordered sequence, keyed `0..n` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence(vec!["a", "b", "c"]);
    /// let keys: Vec<usize> = collection.iter().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![0, 1, 2]);
    /// ```
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from_store(OrderedMap::from_unique_entries(
            values.into_iter().enumerate().collect(),
        ))
    }
}

impl<K: Clone + Eq + Hash, V> ReadOnlyAccess<K, V> for Collection<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    fn size(&self) -> usize {
        self.store.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for Collection<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::from_store(OrderedMap::new())
    }
}

impl<K: Clone + Eq + Hash, V> From<OrderedMap<K, V>> for Collection<K, V> {
    fn from(map: OrderedMap<K, V>) -> Self {
        Self::from_map(map)
    }
}

impl<K: Clone + Eq + Hash, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_store(iter.into_iter().collect())
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store) || self.store == other.store
    }
}

impl<K: Eq, V: Eq> Eq for Collection<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.store(), formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Collection<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(self.store(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Collection<K, V>
where
    K: serde::Deserialize<'de> + Clone + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <OrderedMap<K, V> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_store)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_sequence_assigns_sequential_keys() {
        let collection = Collection::from_sequence(["a", "b", "c"]);
        let pairs: Vec<(usize, &str)> = collection.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[rstest]
    fn test_from_sequence_empty() {
        let collection: Collection<usize, i32> = Collection::from_sequence(Vec::new());
        assert!(collection.is_empty());
        assert_eq!(collection.count(), 0);
    }

    #[rstest]
    fn test_from_iterator_with_duplicate_keys_keeps_first_position() {
        let collection: Collection<&str, i32> =
            [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(format!("{collection}"), "{a: 3, b: 2}");
    }

    #[rstest]
    fn test_get_absent_key_is_none() {
        let collection = Collection::from_sequence([1, 2, 3]);
        assert_eq!(collection.get(&3), None);
        assert!(!collection.contains_key(&3));
        assert!(collection.contains_key(&2));
    }

    #[rstest]
    fn test_try_insert_is_rejected() {
        let collection = Collection::from_sequence([1, 2, 3]);
        let result = collection.try_insert(0, 100);
        assert_eq!(
            result,
            Err(CollectionError::ImmutabilityViolation { operation: "insert" })
        );
        assert_eq!(collection.get(&0), Some(&1));
    }

    #[rstest]
    fn test_try_remove_is_rejected() {
        let collection = Collection::from_sequence([1, 2, 3]);
        let result = collection.try_remove(&0);
        assert_eq!(
            result,
            Err(CollectionError::ImmutabilityViolation { operation: "remove" })
        );
        assert_eq!(collection.count(), 3);
    }

    #[rstest]
    fn test_to_array_is_a_copy() {
        let collection = Collection::from_sequence([1, 2, 3]);
        let mut copy = collection.to_array();
        copy.remove(&0);
        copy.insert(1, 200);

        assert_eq!(collection.get(&0), Some(&1));
        assert_eq!(collection.get(&1), Some(&2));
        assert_eq!(collection.count(), 3);
    }

    #[rstest]
    fn test_clone_shares_store() {
        let collection = Collection::from_sequence([1, 2, 3]);
        let clone = collection.clone();
        assert!(Arc::ptr_eq(&collection.store, &clone.store));
        assert_eq!(collection, clone);
    }

    #[rstest]
    fn test_display_empty() {
        let collection: Collection<usize, i32> = Collection::empty();
        assert_eq!(format!("{collection}"), "{}");
    }

    #[rstest]
    fn test_debug_format() {
        let collection = Collection::from_sequence(["x"]);
        assert_eq!(format!("{collection:?}"), "{0: \"x\"}");
    }

    #[rstest]
    fn test_concurrent_readers() {
        let collection = Collection::from_sequence(0..100);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = collection.clone();
                std::thread::spawn(move || shared.iter().map(|(_, value)| *value).sum::<i32>())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().ok(), Some(4950));
        }
    }
}
