//! Immutable sequences for collecting effect results
//!
//! `Chunk<T>` is a small immutable sequence. Every combining operation returns
//! a new chunk and leaves its inputs untouched. `NonEmptyChunk<T>` carries the
//! extra guarantee of at least one element, so `head()` never needs an `Option`.
//!
//! Elements of different types are expressed with [`Either`](crate::Either):
//!
//! ```
//! use eddy::{Chunk, Either, NonEmptyChunk};
//!
//! let numbers = NonEmptyChunk::make(Either::<i32, &str>::Left(1), vec![Either::Left(2)]);
//! let letters = NonEmptyChunk::make(Either::Right("a"), vec![Either::Right("b")]);
//!
//! let all = numbers.append_all(letters);
//! assert_eq!(all.len(), 4);
//! assert_eq!(
//!     format!("{:?}", all.into_chunk()),
//!     r#"Chunk { values: [Left(1), Left(2), Right("a"), Right("b")] }"#
//! );
//! ```

use std::fmt;

/// An immutable sequence of values.
///
/// # Example
///
/// ```
/// use eddy::Chunk;
///
/// let a = Chunk::from_vec(vec![1, 2]);
/// let b: Chunk<i32> = vec![3].into_iter().collect();
///
/// let joined = a.append_all(&b);
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Chunk<T> {
    values: Vec<T>,
}

impl<T> Chunk<T> {
    /// Create an empty chunk.
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a chunk owning the given values.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the chunk has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Copy the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Concatenate `other` after `self` into a new chunk.
    pub fn append_all(&self, other: &Chunk<T>) -> Chunk<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len() + other.len());
        values.extend_from_slice(&self.values);
        values.extend_from_slice(&other.values);
        Chunk { values }
    }
}

impl<T> Default for Chunk<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk")
            .field("values", &self.values)
            .finish()
    }
}

impl<T> FromIterator<T> for Chunk<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Chunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A chunk guaranteed to contain at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyChunk<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyChunk<T> {
    /// Create a non-empty chunk from its first element and the rest.
    ///
    /// ```
    /// use eddy::NonEmptyChunk;
    ///
    /// let chunk = NonEmptyChunk::make(1, vec![2, 3]);
    /// assert_eq!(chunk.head(), &1);
    /// assert_eq!(chunk.len(), 3);
    /// ```
    pub fn make(head: T, rest: Vec<T>) -> Self {
        Self { head, tail: rest }
    }

    /// The first element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Number of elements. Always >= 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Concatenate `other` after `self`.
    pub fn append_all(mut self, other: NonEmptyChunk<T>) -> NonEmptyChunk<T> {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Forget the non-empty guarantee.
    pub fn into_chunk(self) -> Chunk<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.head);
        values.extend(self.tail);
        Chunk { values }
    }
}

impl<T> From<NonEmptyChunk<T>> for Chunk<T> {
    fn from(chunk: NonEmptyChunk<T>) -> Self {
        chunk.into_chunk()
    }
}

impl<T> IntoIterator for NonEmptyChunk<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Either;

    #[test]
    fn test_empty() {
        let chunk: Chunk<i32> = Chunk::empty();
        assert!(chunk.is_empty());
        assert_eq!(chunk.len(), 0);
        assert_eq!(chunk.get(0), None);
        assert_eq!(chunk, Chunk::default());
    }

    #[test]
    fn test_append_all_leaves_inputs_untouched() {
        let left = Chunk::from_vec(vec![1, 2]);
        let right = Chunk::from_vec(vec![3, 4]);

        let joined = left.append_all(&right);

        assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(left.to_vec(), vec![1, 2]);
        assert_eq!(right.to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_append_all_with_empty() {
        let chunk = Chunk::from_vec(vec!["a"]);
        assert_eq!(chunk.append_all(&Chunk::empty()), chunk);
        assert_eq!(Chunk::empty().append_all(&chunk), chunk);
    }

    #[test]
    fn test_iteration() {
        let chunk: Chunk<i32> = (1..=3).collect();
        assert_eq!(chunk.iter().sum::<i32>(), 6);
        assert_eq!((&chunk).into_iter().count(), 3);
        assert_eq!(chunk.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug_format() {
        let chunk = Chunk::from_vec(vec![1, 2]);
        assert_eq!(format!("{:?}", chunk), "Chunk { values: [1, 2] }");
    }

    #[test]
    fn test_non_empty_make_and_head() {
        let chunk = NonEmptyChunk::make(7, vec![]);
        assert_eq!(chunk.head(), &7);
        assert_eq!(chunk.len(), 1);
        assert!(!chunk.is_empty());
    }

    #[test]
    fn test_non_empty_append_all_mixed() {
        let numbers = NonEmptyChunk::make(Either::<i32, &str>::Left(1), vec![Either::Left(2)]);
        let letters = NonEmptyChunk::make(Either::Right("a"), vec![Either::Right("b")]);

        let all = numbers.append_all(letters);

        assert_eq!(all.head(), &Either::Left(1));
        assert_eq!(
            all.iter().cloned().collect::<Vec<_>>(),
            vec![
                Either::Left(1),
                Either::Left(2),
                Either::Right("a"),
                Either::Right("b"),
            ]
        );
        assert_eq!(
            format!("{:?}", all.into_chunk()),
            r#"Chunk { values: [Left(1), Left(2), Right("a"), Right("b")] }"#
        );
    }

    #[test]
    fn test_into_chunk_preserves_order() {
        let chunk: Chunk<i32> = NonEmptyChunk::make(1, vec![2, 3]).into();
        assert_eq!(chunk.to_vec(), vec![1, 2, 3]);
        assert_eq!(chunk.get(2), Some(&3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_as_sequence() {
        let chunk = Chunk::from_vec(vec![1, 2, 3]);
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(json, "[1,2,3]");

        let back: Chunk<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
    }
}
