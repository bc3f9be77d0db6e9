//! The immutable keyed collection and its backing store.
//!
//! - [`Collection`]: immutable, ordered, keyed container with pipeline operators
//! - [`OrderedMap`]: owned insertion-ordered map, used as backing store and copy-out type
//! - [`ReadOnlyAccess`]: key-based read capability shared by both
//! - [`Leaves`] and [`Nested`]: leaf extraction for [`Collection::flatten`]
//!
//! # Immutability
//!
//! A collection's key/value set is fixed at construction. Every operator returns a new
//! collection, so a pipeline never disturbs the data it started from:
//!
//! ```rust
//! use fluent_collection::collection::Collection;
//!
//! let numbers = Collection::from_sequence(1..=6);
//! let evens = numbers.filter(|value| value % 2 == 0);
//!
//! assert_eq!(numbers.count(), 6); // Original unchanged
//! assert_eq!(format!("{evens}"), "{1: 2, 3: 4, 5: 6}"); // Keys preserved
//! ```
//!
//! # Keys
//!
//! Keys are unique. Sequence-built collections are keyed `0..n`; `filter`, `take`,
//! `drop` and friends keep the surviving keys, while `sort`, `values`, `tail` and
//! `flatten` re-key their result from `0`.

// =============================================================================
// Key Index Hasher
// =============================================================================

/// Hasher of the `IndexMap` inside [`OrderedMap`].
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// which is faster for small keys but not resistant to hash flooding.
///
/// When the feature is disabled (default), this is the standard library's
/// `RandomState`.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

mod access;
mod flatten;
mod keyed_collection;
mod operators;
mod ordered_map;

pub use access::ReadOnlyAccess;
pub use access::ZeroKey;
pub use flatten::Leaves;
pub use flatten::Nested;
pub use keyed_collection::Collection;
pub use ordered_map::IntoIter;
pub use ordered_map::Iter;
pub use ordered_map::OrderedMap;
