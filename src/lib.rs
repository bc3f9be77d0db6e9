//! # fluent-collection
//!
//! An immutable, ordered, keyed collection with a chainable pipeline API.
//!
//! ## Overview
//!
//! A [`Collection`](collection::Collection) wraps an ordered mapping from keys to
//! values. It offers the usual collection-pipeline operators (filter, map, take,
//! drop, sort, group, flatten, reduce), each of which returns a new collection and
//! leaves the receiver untouched:
//!
//! - **Construction**: [`from_sequence`](collection::Collection::from_sequence),
//!   keyed factories, and [`generate`](collection::Collection::generate) from a
//!   [`Producer`](generate::Producer)
//! - **Introspection**: `count`, `get`, `contains_key`, `to_array`
//! - **Operators**: see [`collection`]
//! - **Errors**: writes are rejected with [`CollectionError`](error::CollectionError)
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for collections, maps and configuration
//! - `fxhash`: use `rustc-hash` for the key index
//!
//! ## Example
//!
//! ```rust
//! use fluent_collection::prelude::*;
//!
//! let total = Collection::from_sequence(1..10)
//!     .filter(|value| value % 2 != 0)
//!     .take(3)
//!     .map(|value| value * 2)
//!     .reduce(|accumulator, value| accumulator + value);
//!
//! assert_eq!(total, Some(18));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fluent_collection::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
    pub use crate::error::CollectionError;
    pub use crate::generate::*;
}

pub mod collection;
pub mod error;
pub mod generate;
