//! Leaf extraction for [`Collection::flatten`](super::Collection::flatten).
//!
//! A value that implements [`Leaves`] knows how to push every scalar it contains into
//! an output buffer, walking nested structures depth-first in pre-order. Scalars push
//! themselves; containers (`Vec`, arrays, [`OrderedMap`], [`Collection`], [`Nested`])
//! recurse into their elements.
//!
//! [`Nested`] covers values whose nesting depth varies from element to element, such
//! as `[1, [2, [3, 4]], 5]`.

use super::{Collection, OrderedMap};

/// Values that can be walked down to their scalar leaves.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::Leaves;
///
/// let mut output = Vec::new();
/// vec![vec![1_i32, 2], vec![], vec![3]].push_leaves(&mut output);
/// assert_eq!(output, vec![1, 2, 3]);
/// ```
pub trait Leaves {
    /// The scalar type found at the bottom of the structure.
    type Leaf;

    /// Appends every leaf of `self` to `output`, in depth-first pre-order.
    fn push_leaves(&self, output: &mut Vec<Self::Leaf>);
}

macro_rules! impl_scalar_leaves {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl Leaves for $scalar {
                type Leaf = Self;

                #[inline]
                fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
                    output.push(Clone::clone(self));
                }
            }
        )*
    };
}

impl_scalar_leaves!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl<'a> Leaves for &'a str {
    type Leaf = &'a str;

    fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
        output.push(*self);
    }
}

impl<T: Leaves> Leaves for Vec<T> {
    type Leaf = T::Leaf;

    fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
        for element in self {
            element.push_leaves(output);
        }
    }
}

impl<T: Leaves, const N: usize> Leaves for [T; N] {
    type Leaf = T::Leaf;

    fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
        for element in self {
            element.push_leaves(output);
        }
    }
}

impl<K, T: Leaves> Leaves for OrderedMap<K, T> {
    type Leaf = T::Leaf;

    fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
        for value in self.values() {
            value.push_leaves(output);
        }
    }
}

impl<K, T: Leaves> Leaves for Collection<K, T> {
    type Leaf = T::Leaf;

    fn push_leaves(&self, output: &mut Vec<Self::Leaf>) {
        self.store().push_leaves(output);
    }
}

/// A tree of values with arbitrary, per-element nesting depth.
///
/// # Examples
///
/// ```rust
/// use fluent_collection::collection::{Collection, Nested};
///
/// let collection = Collection::from_sequence([
///     Nested::Leaf(1),
///     Nested::Branch(vec![Nested::Leaf(2), Nested::Branch(vec![Nested::Leaf(3)])]),
///     Nested::Leaf(4),
/// ]);
///
/// let flat: Vec<i32> = collection.flatten().iter().map(|(_, value)| *value).collect();
/// assert_eq!(flat, vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single scalar value.
    Leaf(T),
    /// A sequence of nested values.
    Branch(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` for [`Nested::Leaf`].
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T: Clone> Leaves for Nested<T> {
    type Leaf = T;

    fn push_leaves(&self, output: &mut Vec<T>) {
        match self {
            Nested::Leaf(value) => output.push(value.clone()),
            Nested::Branch(children) => {
                for child in children {
                    child.push_leaves(output);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leaves_of<T: Leaves>(value: &T) -> Vec<T::Leaf> {
        let mut output = Vec::new();
        value.push_leaves(&mut output);
        output
    }

    #[rstest]
    fn test_scalar_is_its_own_leaf() {
        assert_eq!(leaves_of(&7), vec![7]);
        assert_eq!(leaves_of(&"text"), vec!["text"]);
        assert_eq!(leaves_of(&String::from("owned")), vec!["owned".to_string()]);
    }

    #[rstest]
    fn test_nested_vectors_preorder() {
        let value = vec![vec![vec![1, 2], vec![3]], vec![], vec![vec![4]]];
        assert_eq!(leaves_of(&value), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_arrays_and_maps() {
        let mut map = OrderedMap::new();
        map.insert("b", [3, 4]);
        map.insert("a", [1, 2]);
        assert_eq!(leaves_of(&map), vec![3, 4, 1, 2]);
    }

    #[rstest]
    fn test_nested_mixed_depth() {
        let value = Nested::Branch(vec![
            Nested::Leaf('a'),
            Nested::Branch(vec![Nested::Branch(vec![Nested::Leaf('b')]), Nested::Leaf('c')]),
            Nested::Branch(vec![]),
            Nested::Leaf('d'),
        ]);
        assert_eq!(leaves_of(&value), vec!['a', 'b', 'c', 'd']);
    }

    #[rstest]
    fn test_nested_from_and_is_leaf() {
        let leaf: Nested<i32> = 5.into();
        assert!(leaf.is_leaf());
        assert!(!Nested::<i32>::Branch(vec![]).is_leaf());
    }
}
