//! Read-only keyed access.
//!
//! [`ReadOnlyAccess`] is the capability shared by [`Collection`](super::Collection) and
//! [`OrderedMap`](super::OrderedMap): look a key up, test for its presence, and ask for
//! the number of entries. There is no writable counterpart; a collection cannot be
//! edited through this trait.
//!
//! [`ZeroKey`] names the key that [`Collection::head`](super::Collection::head) looks up.

/// Key-based reads over an ordered mapping.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::{Collection, ReadOnlyAccess};
///
/// fn describe<A: ReadOnlyAccess<usize, &'static str>>(access: &A) -> String {
///     format!("{} entries, first = {:?}", access.size(), access.get(&0))
/// }
///
/// let collection = Collection::from_sequence(["a", "b"]);
/// assert_eq!(describe(&collection), "2 entries, first = Some(\"a\")");
/// ```
pub trait ReadOnlyAccess<K, V> {
    /// Returns the value stored under `key`, or `None` if it is absent.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    fn size(&self) -> usize;
}

/// Key types with a distinguished "zero" key.
///
/// Integer keys use `0`; string keys use `"0"`. Bucket keys from
/// [`Collection::group_by`](super::Collection::group_by) of any of these types can be
/// passed to `head`, which returns `None` when the zero key is absent.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Collection;
///
/// let groups = Collection::from_sequence(["apple", "avocado", "beet"])
///     .group_by(|word| word[..1].to_string());
/// assert_eq!(groups.head(), None);
/// ```
pub trait ZeroKey {
    /// Returns the zero key.
    fn zero_key() -> Self;
}

macro_rules! impl_integer_zero_key {
    ($($integer:ty),* $(,)?) => {
        $(
            impl ZeroKey for $integer {
                #[inline]
                fn zero_key() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer_zero_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ZeroKey for String {
    fn zero_key() -> Self {
        "0".to_owned()
    }
}

impl ZeroKey for &str {
    fn zero_key() -> Self {
        "0"
    }
}
