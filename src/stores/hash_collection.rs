//! Hash-backed deduplicating collection.
//!
//! This module provides [`HashCollection`], a hash-set-backed container
//! with set semantics: every value is held at most once and membership is
//! O(1) expected.
//!
//! # Overview
//!
//! `HashCollection` is the workhorse store for `T: Eq + Hash` element
//! types. Iteration order is unspecified but stable for a given snapshot.
//! The hasher is the standard library's randomized default, or `FxHasher`
//! under the `fxhash` feature.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity     |
//! |----------------|----------------|
//! | `add`          | O(1) expected  |
//! | `contains`     | O(1) expected  |
//! | `remove`       | O(1) expected  |
//! | `len`          | O(1)           |
//! | `union`        | O(n + m)       |
//! | `intersection` | O(min(n, m))   |
//!
//! # Examples
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! let mut collection: HashCollection<i32> = HashCollection::new();
//! collection.add(1);
//! collection.add(1); // deduplicated
//! assert_eq!(collection.len(), 1);
//!
//! let other: HashCollection<i32> = [1, 2, 3].into_iter().collect();
//! assert!(collection.is_subset(&other));
//! ```

use std::fmt;
use std::hash::Hash;

use super::DefaultHashSet;
use crate::contract::Collection;

// =============================================================================
// HashCollection Definition
// =============================================================================

/// A hash-set-backed collection with set semantics.
///
/// # Uniqueness policy
///
/// Deduplicating: [`Collection::add`] of an already-present element is a
/// no-op, so `len` counts distinct values.
///
/// # Equality
///
/// Two `HashCollection`s are equal iff they hold the same distinct
/// elements; size mismatch short-circuits.
///
/// # Examples
///
/// ```rust
/// use kollect::prelude::*;
///
/// let collection = HashCollection::singleton(42);
/// assert!(collection.contains(&42));
/// assert!(!collection.contains(&0));
/// ```
#[derive(Clone)]
pub struct HashCollection<T> {
    elements: DefaultHashSet<T>,
}

impl<T> HashCollection<T> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let collection: HashCollection<i32> = HashCollection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: DefaultHashSet::default(),
        }
    }

    /// Creates a new empty collection with space for at least `capacity`
    /// elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: DefaultHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

// =============================================================================
// Collection Contract
// =============================================================================

impl<T: Eq + Hash> Collection<T> for HashCollection<T> {
    type Iter<'a>
        = HashCollectionIterator<'a, T>
    where
        T: 'a;

    fn add(&mut self, value: T) {
        self.elements.insert(value);
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn remove(&mut self, value: &T) {
        self.elements.remove(value);
    }

    fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(|element| predicate(element));
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashCollectionIterator {
            inner: self.elements.iter(),
        }
    }

    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        elements.extend(other.elements.iter().cloned());
        Self { elements }
    }

    fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        // Iterate over the smaller set for better performance.
        let (smaller, larger) = if self.elements.len() <= other.elements.len() {
            (self, other)
        } else {
            (other, self)
        };

        Self {
            elements: smaller
                .elements
                .iter()
                .filter(|element| larger.elements.contains(*element))
                .cloned()
                .collect(),
        }
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        self.elements.is_disjoint(&other.elements)
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// A borrowing iterator over a [`HashCollection`].
pub struct HashCollectionIterator<'a, T> {
    inner: std::collections::hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for HashCollectionIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashCollectionIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over a [`HashCollection`].
pub struct HashCollectionIntoIterator<T> {
    inner: std::collections::hash_set::IntoIter<T>,
}

impl<T> Iterator for HashCollectionIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashCollectionIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for HashCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for HashCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for HashCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for HashCollection<T> {
    type Item = T;
    type IntoIter = HashCollectionIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        HashCollectionIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a HashCollection<T> {
    type Item = &'a T;
    type IntoIter = HashCollectionIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash> PartialEq for HashCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq + Hash> Eq for HashCollection<T> {}

impl<T: fmt::Debug> fmt::Debug for HashCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

/// Human-readable rendering for diagnostics.
///
/// The output is not parseable back into a collection.
impl<T: fmt::Display> fmt::Display for HashCollection<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for HashCollection<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct HashCollectionVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> HashCollectionVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for HashCollectionVisitor<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    type Value = HashCollection<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = DefaultHashSet::default();
        while let Some(element) = seq.next_element()? {
            elements.insert(element);
        }
        Ok(HashCollection { elements })
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for HashCollection<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(HashCollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
