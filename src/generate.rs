//! Building collections from a producer.
//!
//! A [`Producer`] hands out values one at a time and signals exhaustion by returning
//! `None`. Any `FnMut() -> Option<V>` closure is a producer; [`IteratorProducer`]
//! adapts an iterator such as a database cursor.
//!
//! [`Collection::generate_with`] pulls values until the producer is exhausted or
//! [`GenerateConfig::max_items`] values have been collected, whichever comes first.
//!
//! # Falsy compatibility
//!
//! Some sources signal exhaustion by returning an "empty-like" value (`false`, `0`, an
//! empty string or container) instead of a distinct marker. [`UntilFalsy`] and
//! [`Collection::generate_until_falsy`] reproduce that convention for values that
//! implement [`Falsy`]. Prefer the `Option`-based API: with it a legitimately falsy
//! value such as `0` is collected like any other.
//!
//! # Examples
//!
//! ```rust
//! use fluent_collection::collection::Collection;
//! use fluent_collection::generate::GenerateConfig;
//!
//! let mut remaining = vec![3, 0, 1];
//! let collection = Collection::generate(move || remaining.pop());
//! assert_eq!(format!("{collection}"), "{0: 1, 1: 0, 2: 3}");
//!
//! let mut counter = 0;
//! let bounded = Collection::generate_with(
//!     move || {
//!         counter += 1;
//!         Some(counter)
//!     },
//!     GenerateConfig::new().with_max_items(3),
//! );
//! assert_eq!(bounded.count(), 3);
//! ```

use crate::collection::{Collection, OrderedMap};

/// Default upper bound on the number of values [`Collection::generate`] collects.
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Configuration for [`Collection::generate_with`].
///
/// # Examples
///
/// ```rust
/// use fluent_collection::generate::{DEFAULT_MAX_ITEMS, GenerateConfig};
///
/// assert_eq!(GenerateConfig::default().max_items, DEFAULT_MAX_ITEMS);
/// assert_eq!(GenerateConfig::new().with_max_items(10).max_items, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerateConfig {
    /// Upper bound on the number of collected values.
    pub max_items: usize,
}

impl GenerateConfig {
    /// Creates a configuration with the default bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
        }
    }

    /// Returns a copy with `max_items` replaced.
    #[must_use]
    pub const fn with_max_items(self, max_items: usize) -> Self {
        Self { max_items }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Producer
// =============================================================================

/// A source that yields values on demand.
///
/// `produce` returns `Some(value)` while values remain and `None` once exhausted.
pub trait Producer {
    /// The type of produced values.
    type Item;

    /// Pulls the next value, or `None` when the source is exhausted.
    fn produce(&mut self) -> Option<Self::Item>;
}

impl<V, F> Producer for F
where
    F: FnMut() -> Option<V>,
{
    type Item = V;

    #[inline]
    fn produce(&mut self) -> Option<V> {
        self()
    }
}

/// Adapts an iterator into a [`Producer`].
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Collection;
/// use fluent_collection::generate::IteratorProducer;
///
/// let rows = vec!["alice", "bob"];
/// let collection = Collection::generate(IteratorProducer::new(rows));
/// assert_eq!(collection.get(&1), Some(&"bob"));
/// ```
#[derive(Debug, Clone)]
pub struct IteratorProducer<I> {
    iterator: I,
}

impl<I: Iterator> IteratorProducer<I> {
    /// Wraps anything that can be turned into an iterator.
    pub fn new<T>(iterable: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iterator: iterable.into_iter(),
        }
    }
}

impl<I: Iterator> Producer for IteratorProducer<I> {
    type Item = I::Item;

    #[inline]
    fn produce(&mut self) -> Option<I::Item> {
        self.iterator.next()
    }
}

// =============================================================================
// Falsy compatibility
// =============================================================================

/// Values that count as an exhaustion signal under the loose convention.
///
/// `false`, numeric zero, empty strings, empty containers and `None` are falsy.
pub trait Falsy {
    /// Returns `true` if `self` signals exhaustion.
    fn is_falsy(&self) -> bool;
}

macro_rules! impl_falsy_for_numbers {
    ($($number:ty),* $(,)?) => {
        $(
            impl Falsy for $number {
                #[inline]
                fn is_falsy(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_falsy_for_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Falsy for f32 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for f64 {
    fn is_falsy(&self) -> bool {
        *self == 0.0
    }
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T> Falsy for Vec<T> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Falsy for OrderedMap<K, V> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Falsy for Collection<K, V> {
    fn is_falsy(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Falsy::is_falsy)
    }
}

/// Turns a raw value source into a [`Producer`] that stops at the first falsy value.
///
/// The falsy value itself is discarded.
pub struct UntilFalsy<F> {
    source: F,
    exhausted: bool,
}

impl<F> UntilFalsy<F> {
    /// Wraps `source`.
    pub const fn new(source: F) -> Self {
        Self {
            source,
            exhausted: false,
        }
    }
}

impl<V, F> Producer for UntilFalsy<F>
where
    V: Falsy,
    F: FnMut() -> V,
{
    type Item = V;

    fn produce(&mut self) -> Option<V> {
        if self.exhausted {
            return None;
        }
        let value = (self.source)();
        if value.is_falsy() {
            log::trace!("producer returned a falsy value; treating it as exhaustion");
            self.exhausted = true;
            None
        } else {
            Some(value)
        }
    }
}

// =============================================================================
// Factories
// =============================================================================

impl<V> Collection<usize, V> {
    /// Pulls values from `producer` until it is exhausted, collecting at most
    /// [`DEFAULT_MAX_ITEMS`] of them. Keys are `0..n`.
    pub fn generate<P>(producer: P) -> Self
    where
        P: Producer<Item = V>,
    {
        Self::generate_with(producer, GenerateConfig::default())
    }

    /// Pulls values from `producer` until it is exhausted or `config.max_items` values
    /// have been collected, whichever comes first. Keys are `0..n`.
    ///
    /// The bound is checked before each pull, so the producer is never asked for a
    /// value that would be discarded: with `max_items = n` it is called at most `n`
    /// times. The collected values are the same as with a check after each pull.
    pub fn generate_with<P>(mut producer: P, config: GenerateConfig) -> Self
    where
        P: Producer<Item = V>,
    {
        let mut values = Vec::new();
        while values.len() < config.max_items {
            match producer.produce() {
                Some(value) => values.push(value),
                None => {
                    log::trace!("producer exhausted after {} values", values.len());
                    return Self::from_sequence(values);
                }
            }
        }
        log::debug!(
            "generation stopped at the max_items bound of {}",
            config.max_items
        );
        Self::from_sequence(values)
    }

    /// Pulls raw values from `source` until one of them is falsy or `config.max_items`
    /// values have been collected. The falsy value is never collected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluent_collection::collection::Collection;
    /// use fluent_collection::generate::GenerateConfig;
    ///
    /// let mut countdown = 6;
    /// let collection = Collection::generate_until_falsy(
    ///     move || {
    ///         countdown -= 1;
    ///         countdown
    ///     },
    ///     GenerateConfig::new().with_max_items(10),
    /// );
    /// assert_eq!(format!("{collection}"), "{0: 5, 1: 4, 2: 3, 3: 2, 4: 1}");
    /// ```
    pub fn generate_until_falsy<F>(source: F, config: GenerateConfig) -> Self
    where
        V: Falsy,
        F: FnMut() -> V,
    {
        Self::generate_with(UntilFalsy::new(source), config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, true)]
    #[case(7, false)]
    #[case(-1, false)]
    fn test_integer_falsiness(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(value.is_falsy(), expected);
    }

    #[rstest]
    fn test_falsy_values() {
        assert!(false.is_falsy());
        assert!(!true.is_falsy());
        assert!("".is_falsy());
        assert!(!"0".is_falsy());
        assert!(String::new().is_falsy());
        assert!(Vec::<i32>::new().is_falsy());
        assert!(!vec![0].is_falsy());
        assert!(0.0_f64.is_falsy());
        assert!(None::<i32>.is_falsy());
        assert!(Some(0).is_falsy());
        assert!(!Some(3).is_falsy());
        assert!(Collection::<usize, i32>::empty().is_falsy());
    }

    #[rstest]
    fn test_until_falsy_stays_exhausted() {
        let mut values = vec![0, 4].into_iter();
        let mut producer = UntilFalsy::new(move || values.next().unwrap_or(9));
        assert_eq!(producer.produce(), None);
        assert_eq!(producer.produce(), None);
    }

    #[rstest]
    fn test_bound_is_checked_before_pulling() {
        let mut pulls = 0;
        let collection = Collection::generate_with(
            || {
                pulls += 1;
                Some(pulls)
            },
            GenerateConfig::new().with_max_items(4),
        );
        assert_eq!(collection.count(), 4);
        assert_eq!(pulls, 4);
    }

    #[rstest]
    fn test_zero_bound_never_pulls() {
        let mut pulls = 0;
        let collection = Collection::generate_with(
            || {
                pulls += 1;
                Some(pulls)
            },
            GenerateConfig::new().with_max_items(0),
        );
        assert!(collection.is_empty());
        assert_eq!(pulls, 0);
    }

    #[rstest]
    fn test_default_bound() {
        let collection = Collection::generate(|| Some('x'));
        assert_eq!(collection.count(), DEFAULT_MAX_ITEMS);
    }
}
