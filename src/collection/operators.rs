//! Pipeline operators on [`Collection`].
//!
//! Every operator reads the receiver and builds a new collection (or a scalar); the
//! receiver is never modified. Operators differ in how they treat keys:
//!
//! | Operator                                    | Keys of the result                 |
//! |---------------------------------------------|------------------------------------|
//! | `filter`, `take`, `take_while`, `drop`, `drop_while`, `slice` | original keys, kept |
//! | `map`                                       | same keys as the receiver          |
//! | `sort`, `sort_by_key`, `values`, `keys`, `tail`, `flatten` | re-keyed `0..n`     |
//! | `group_by`                                  | bucket keys; inner keys kept       |
//!
//! Scalar results (`reduce`, `fold`, `find_first`, `head`) fall back to `None` or to
//! the caller's initial value on an empty collection.

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Range;

use super::access::ZeroKey;
use super::flatten::Leaves;
use super::{Collection, OrderedMap};

/// Resolves bidirectional slice bounds against `length` entries.
///
/// A negative `offset` counts from the end. A missing `count` runs to the end, a
/// negative one stops that many entries before the end.
fn slice_range(length: usize, offset: isize, count: Option<isize>) -> Range<usize> {
    let start = resolve_position(length, offset);
    let end = match count {
        None => length,
        Some(count) if count >= 0 => start.saturating_add(count.unsigned_abs()).min(length),
        Some(count) => resolve_position(length, count),
    };
    start..end.max(start)
}

fn resolve_position(length: usize, position: isize) -> usize {
    if position >= 0 {
        position.unsigned_abs().min(length)
    } else {
        length.saturating_sub(position.unsigned_abs())
    }
}

impl<K: Clone + Eq + Hash, V> Collection<K, V> {
    /// Applies `transform` to every value, keeping keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let squares = Collection::from_sequence([1, 2, 3]).map(|value| value * value);
    /// assert_eq!(format!("{squares}"), "{0: 1, 1: 4, 2: 9}");
    /// ```
    pub fn map<W, F>(&self, mut transform: F) -> Collection<K, W>
    where
        F: FnMut(&V) -> W,
    {
        Collection::from_store(OrderedMap::from_unique_entries(
            self.iter()
                .map(|(key, value)| (key.clone(), transform(value)))
                .collect(),
        ))
    }

    /// Folds the values left to right, starting from `initial`.
    ///
    /// An empty collection returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let total = Collection::from_sequence(1..10)
    ///     .filter(|value| value % 2 == 0)
    ///     .map(|value| value * value)
    ///     .fold(0, |accumulator, value| accumulator + value);
    /// assert_eq!(total, 120);
    /// ```
    pub fn fold<A, F>(&self, initial: A, combine: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.store().values().fold(initial, combine)
    }

    /// Returns the first value satisfying `predicate`, scanning in order.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V) -> bool,
    {
        self.store().values().find(|&value| predicate(value))
    }

    /// Returns the value stored under key `0`.
    ///
    /// This is a literal key lookup, not "the first pair": after `filter` or
    /// `group_by` the result depends on whether key `0` survived. String keys look up
    /// `"0"` (see [`ZeroKey`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence([5, 6, 7]);
    /// assert_eq!(collection.head(), Some(&5));
    /// assert_eq!(collection.filter(|value| *value > 5).head(), None);
    /// ```
    pub fn head(&self) -> Option<&V>
    where
        K: ZeroKey,
    {
        self.store().get(&K::zero_key())
    }

    /// Invokes `action(value, key)` for every pair, in order.
    pub fn each<F>(&self, mut action: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self {
            action(value, key);
        }
    }

    /// Returns the keys as a new collection keyed `0..n`.
    pub fn keys(&self) -> Collection<usize, K> {
        Collection::from_sequence(self.store().keys().cloned())
    }

    /// Collects every leaf of every value, depth-first in pre-order, keyed `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let flat = Collection::from_sequence([vec![vec![1_i32, 2]], vec![vec![3], vec![4, 5]]])
    ///     .flatten();
    /// assert_eq!(format!("{flat}"), "{0: 1, 1: 2, 2: 3, 3: 4, 4: 5}");
    /// ```
    pub fn flatten(&self) -> Collection<usize, V::Leaf>
    where
        V: Leaves,
    {
        let mut leaves = Vec::new();
        for value in self.store().values() {
            value.push_leaves(&mut leaves);
        }
        Collection::from_sequence(leaves)
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Collection<K, V> {
    fn subset<'a, I>(&'a self, pairs: I) -> Self
    where
        I: Iterator<Item = (&'a K, &'a V)>,
    {
        Self::from_store(OrderedMap::from_unique_entries(
            pairs
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ))
    }

    /// Keeps the pairs whose value satisfies `predicate`. Original keys are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let odd = Collection::from_sequence([1, 2, 3, 4]).filter(|value| value % 2 != 0);
    /// assert_eq!(format!("{odd}"), "{0: 1, 2: 3}");
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.subset(self.iter().filter(|&(_, value)| predicate(value)))
    }

    /// Combines the values left to right, seeding the accumulator with the first one.
    ///
    /// Returns `None` on an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let total = Collection::from_sequence(1..=10)
    ///     .filter(|value| value % 2 != 0)
    ///     .take(3)
    ///     .map(|value| value * 2)
    ///     .reduce(|accumulator, value| accumulator + value);
    /// assert_eq!(total, Some(18));
    /// ```
    pub fn reduce<F>(&self, combine: F) -> Option<V>
    where
        F: FnMut(V, &V) -> V,
    {
        let mut values = self.store().values();
        let first = values.next()?.clone();
        Some(values.fold(first, combine))
    }

    /// Returns the pairs in `offset..offset + count`, keeping original keys.
    ///
    /// A negative `offset` counts from the end. `None` runs to the end; a negative
    /// `count` stops that many pairs before the end. Out-of-range bounds are clamped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence(['a', 'b', 'c', 'd', 'e']);
    /// assert_eq!(format!("{}", collection.slice(1, Some(2))), "{1: b, 2: c}");
    /// assert_eq!(format!("{}", collection.slice(-2, None)), "{3: d, 4: e}");
    /// assert_eq!(format!("{}", collection.slice(1, Some(-3))), "{1: b}");
    /// ```
    pub fn slice(&self, offset: isize, count: Option<isize>) -> Self {
        let range = slice_range(self.len(), offset, count);
        self.subset(self.iter().skip(range.start).take(range.len()))
    }

    /// Keeps the first `count` pairs, or all but the last `|count|` when negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence([1, 2, 3, 4]);
    /// assert_eq!(format!("{}", collection.take(2)), "{0: 1, 1: 2}");
    /// assert_eq!(format!("{}", collection.take(-1)), "{0: 1, 1: 2, 2: 3}");
    /// ```
    pub fn take(&self, count: isize) -> Self {
        self.slice(0, Some(count))
    }

    /// Removes the first `count` pairs, or the last `|count|` when negative.
    ///
    /// For `count >= 0`, `take(count)` and `drop(count)` partition the collection.
    /// A negative `count` trims from the end, so `drop(-n)` equals `take(-n)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let collection = Collection::from_sequence([1, 2, 3, 4]);
    /// assert_eq!(format!("{}", collection.drop(3)), "{3: 4}");
    /// assert_eq!(format!("{}", collection.drop(-1)), "{0: 1, 1: 2, 2: 3}");
    /// ```
    pub fn drop(&self, count: isize) -> Self {
        if count < 0 {
            self.slice(0, Some(count))
        } else {
            self.slice(count, None)
        }
    }

    /// Keeps the longest prefix whose values satisfy `predicate`.
    ///
    /// `predicate` is not called past the first failing value.
    pub fn take_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.subset(self.iter().take_while(|&(_, value)| predicate(value)))
    }

    /// Drops the longest prefix whose values satisfy `predicate` and keeps the rest.
    ///
    /// Once `predicate` fails, every remaining pair is kept, including ones that
    /// would satisfy it again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let rest = Collection::from_sequence([1, 2, 5, 1, 2]).drop_while(|value| *value < 3);
    /// assert_eq!(format!("{rest}"), "{2: 5, 3: 1, 4: 2}");
    /// ```
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.subset(self.iter().skip_while(|&(_, value)| predicate(value)))
    }

    /// Sorts the values with `comparator`, re-keying the result `0..n`.
    ///
    /// The sort is stable: values that compare equal keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let sorted = Collection::from_sequence([3, 1, 2]).sort(|a, b| a.cmp(b));
    /// assert_eq!(format!("{sorted}"), "{0: 1, 1: 2, 2: 3}");
    /// ```
    pub fn sort<F>(&self, comparator: F) -> Collection<usize, V>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut values: Vec<V> = self.store().values().cloned().collect();
        values.sort_by(comparator);
        Collection::from_sequence(values)
    }

    /// Sorts the values by the key `key_fn` extracts, re-keying the result `0..n`.
    pub fn sort_by_key<B, F>(&self, key_fn: F) -> Collection<usize, V>
    where
        B: Ord,
        F: FnMut(&V) -> B,
    {
        let mut values: Vec<V> = self.store().values().cloned().collect();
        values.sort_by_key(key_fn);
        Collection::from_sequence(values)
    }

    /// Returns every pair but the first, re-keyed `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// assert_eq!(format!("{}", Collection::from_sequence([1, 2, 3]).tail()), "{0: 2, 1: 3}");
    /// ```
    pub fn tail(&self) -> Collection<usize, V> {
        Collection::from_sequence(self.store().values().skip(1).cloned())
    }

    /// Returns the values re-keyed `0..n`, in order.
    pub fn values(&self) -> Collection<usize, V> {
        Collection::from_sequence(self.store().values().cloned())
    }

    /// Partitions the pairs into buckets computed by `key_fn`.
    ///
    /// Buckets appear in order of first occurrence. Each bucket is a collection that
    /// keeps the original keys of its pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    ///
    /// let groups = Collection::from_sequence(["a", "bb", "cc", "d"]).group_by(|word| word.len());
    /// assert_eq!(format!("{groups}"), "{1: {0: a, 3: d}, 2: {1: bb, 2: cc}}");
    /// ```
    pub fn group_by<B, F>(&self, mut key_fn: F) -> Collection<B, Self>
    where
        B: Clone + Eq + Hash,
        F: FnMut(&V) -> B,
    {
        let mut buckets: OrderedMap<B, OrderedMap<K, V>> = OrderedMap::new();
        for (key, value) in self {
            buckets
                .get_or_insert_with(key_fn(value), OrderedMap::new)
                .insert(key.clone(), value.clone());
        }
        Collection::from_store(OrderedMap::from_unique_entries(
            buckets
                .into_iter()
                .map(|(bucket, members)| (bucket, Self::from_store(members)))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5, 0, Some(2), 0..2)]
    #[case(5, 0, Some(9), 0..5)]
    #[case(5, 0, Some(-2), 0..3)]
    #[case(5, 0, Some(-9), 0..0)]
    #[case(5, 2, None, 2..5)]
    #[case(5, 9, None, 5..5)]
    #[case(5, -2, None, 3..5)]
    #[case(5, -9, None, 0..5)]
    #[case(5, 1, Some(-1), 1..4)]
    #[case(5, 3, Some(-3), 3..3)]
    #[case(0, 0, Some(3), 0..0)]
    #[case(0, -1, None, 0..0)]
    fn test_slice_range(
        #[case] length: usize,
        #[case] offset: isize,
        #[case] count: Option<isize>,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(slice_range(length, offset, count), expected);
    }

    #[rstest]
    fn test_subset_keeps_keys() {
        let collection = Collection::from_sequence([10, 20, 30]);
        let subset = collection.subset(collection.iter().skip(1));
        let keys: Vec<usize> = subset.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[rstest]
    fn test_take_while_stops_calling_predicate_after_failure() {
        let collection = Collection::from_sequence([1, 2, 10, 3, 4]);
        let mut calls = 0;
        let prefix = collection.take_while(|value| {
            calls += 1;
            *value < 5
        });
        assert_eq!(prefix.count(), 2);
        assert_eq!(calls, 3);
    }

    #[rstest]
    fn test_head_on_string_bucket_keys() {
        let words = Collection::from_sequence(["ox", "zebra", "yak"]);
        let by_initial = words.group_by(|word| word[..1].to_string());
        assert_eq!(by_initial.head(), None);

        let by_digit = words.group_by(|word| if word.len() > 2 { "1" } else { "0" });
        assert_eq!(by_digit.head().map(Collection::count), Some(1));
    }

    #[rstest]
    fn test_group_by_head_uses_bucket_key() {
        let groups = Collection::from_sequence([3_usize, 0, 4]).group_by(|value| value % 2);
        let even = groups.head().map(Collection::count);
        assert_eq!(even, Some(2));
    }
}
