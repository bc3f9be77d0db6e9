//! Error types for collection access.
//!
//! A [`Collection`](crate::collection::Collection) never fails on reads: absent keys
//! and unsuccessful searches yield `None`. The only failure is an attempt to write
//! through a collection, which is always rejected with
//! [`CollectionError::ImmutabilityViolation`].

use thiserror::Error;

/// Errors raised by [`Collection`](crate::collection::Collection).
///
/// # Examples
///
/// ```rust
/// use fluent_collection::error::CollectionError;
///
/// let error = CollectionError::ImmutabilityViolation { operation: "insert" };
/// assert_eq!(
///     format!("{error}"),
///     "cannot insert: collection is immutable"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CollectionError {
    /// A key-based write or delete was attempted on a collection.
    #[error("cannot {operation}: collection is immutable")]
    ImmutabilityViolation {
        /// The rejected operation (`"insert"` or `"remove"`).
        operation: &'static str,
    },
}

/// Result alias used by fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
