//! The collection contract.
//!
//! This module provides the [`Collection`] trait, the single contract every
//! backing store in this crate implements: membership, bulk mutation,
//! set algebra, derived-key comparison, iteration, and conversion.
//!
//! # Design
//!
//! The trait follows the required-kernel / provided-methods shape: a store
//! implements seven primitive operations (`add`, `clear`, `contains`,
//! `len`, `remove`, `retain`, `iter`) and inherits everything else as
//! provided methods built on that kernel. Stores are free to override a
//! provided method when the backing representation offers a faster path.
//!
//! Capabilities that Rust already expresses as independent traits stay
//! there rather than being folded into the contract:
//!
//! - whole-collection equality is `PartialEq`/`Eq` on the store
//! - copying is `Clone` (structurally deep, element-shallow)
//! - diagnostics rendering is `Display` (non-round-trippable) and `Debug`
//! - serialization is serde's `Serialize`/`Deserialize` (`serde` feature)
//! - owning iteration is `IntoIterator`, construction is
//!   `FromIterator`/`Extend`
//!
//! # Element identity
//!
//! Operations come in two comparison modes. The plain variants use the
//! element type's own equality. The `*_by_key` variants take a key
//! function `Fn(&T) -> String` at the call site and compare elements by
//! the derived key instead, so different calls can compare by different
//! identities.
//!
//! # Examples
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! let mut collection: VecCollection<i32> = VecCollection::new();
//! collection.add_all([1, 2, 3]);
//! assert_eq!(collection.len(), 3);
//!
//! let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();
//! let intersection = collection.intersection(&other);
//! assert_eq!(intersection.to_vec(), vec![2, 3]);
//!
//! collection.retain_all(&other);
//! assert_eq!(collection.to_vec(), vec![2, 3]);
//! ```

use std::collections::HashSet;

/// A mutable, type-parameterized container of elements of type `T`.
///
/// # Required Methods
///
/// - `add`: insert one element
/// - `clear`: remove every element
/// - `contains`: membership query
/// - `len`: current element count
/// - `remove`: remove one element by value
/// - `retain`: keep only elements satisfying a predicate
/// - `iter`: borrow-iterate the elements
///
/// # Provided Methods
///
/// All other operations have default implementations built on the kernel:
/// bulk mutation (`add_all`, `remove_all`), bulk membership
/// (`contains_all`, `contains_any`), set algebra (`retain_all`, `union`,
/// `intersection`, `difference`, `symmetric_difference`), derived-key
/// variants (`remove_all_by_key`, `retain_all_by_key`,
/// `intersection_by_key`), probes (`is_subset`, `is_superset`,
/// `is_disjoint`), and conversion (`to_vec`, `for_each`).
///
/// # Totality
///
/// Every operation is total: removing an absent element, passing empty
/// bulk inputs, and operating on empty collections are valid, never
/// errors. No contract operation panics.
///
/// # Uniqueness policy
///
/// Whether `add` of an already-present element grows the container is the
/// store's choice; each implementation documents its policy.
/// [`VecCollection`](crate::stores::VecCollection) permits duplicates,
/// [`HashCollection`](crate::stores::HashCollection) and
/// [`CompactCollection`](crate::stores::CompactCollection) deduplicate.
///
/// # Examples
///
/// ```rust
/// use kollect::prelude::*;
///
/// let mut collection: HashCollection<&str> = HashCollection::new();
/// collection.add("a");
/// collection.add("b");
///
/// assert!(collection.contains(&"a"));
/// assert!(collection.contains_all(&["a", "b"]));
/// assert!(!collection.contains_any(&["c", "d"]));
/// ```
pub trait Collection<T>: Default {
    /// The borrowing iterator returned by [`iter`](Collection::iter).
    ///
    /// Every call to `iter` produces fresh iterator state, so iteration
    /// is restartable: independent passes never interfere.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts one element.
    ///
    /// Whether inserting an already-present element grows the container
    /// depends on the store's uniqueness policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = VecCollection::new();
    /// collection.add(42);
    /// assert_eq!(collection.len(), 1);
    /// ```
    fn add(&mut self, value: T);

    /// Removes every element. Afterwards `len() == 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    /// collection.clear();
    /// assert!(collection.is_empty());
    /// ```
    fn clear(&mut self);

    /// Returns `true` iff an element equal to `value` is currently held.
    fn contains(&self, value: &T) -> bool;

    /// Returns the number of elements currently held.
    ///
    /// # Complexity
    ///
    /// O(1) for every store in this crate.
    fn len(&self) -> usize;

    /// Removes one element equal to `value`.
    ///
    /// No-op when absent. Duplicate-permitting stores remove the first
    /// occurrence only; deduplicating stores hold at most one occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = [1, 2, 1].into_iter().collect();
    /// collection.remove(&1);
    /// assert_eq!(collection.to_vec(), vec![2, 1]);
    /// collection.remove(&7); // absent: no-op
    /// assert_eq!(collection.len(), 2);
    /// ```
    fn remove(&mut self, value: &T);

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// This is the mutation primitive the bulk-removal and retain
    /// operations build on.
    fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool;

    /// Returns an iterator over the elements in the store's iteration
    /// order.
    ///
    /// The order is implementation-defined but stable for a given
    /// snapshot: two passes over an unmodified collection visit the same
    /// elements in the same order.
    fn iter(&self) -> Self::Iter<'_>;

    // =========================================================================
    // Provided: size probes
    // =========================================================================

    /// Returns `true` if the collection contains no elements.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the collection contains at least one element.
    #[must_use]
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    // =========================================================================
    // Provided: construction and bulk mutation
    // =========================================================================

    /// Creates a collection containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let collection = HashCollection::singleton(42);
    /// assert_eq!(collection.len(), 1);
    /// assert!(collection.contains(&42));
    /// ```
    #[must_use]
    fn singleton(value: T) -> Self {
        let mut collection = Self::default();
        collection.add(value);
        collection
    }

    /// Inserts every element of `values`, equivalent to repeated
    /// [`add`](Collection::add) in input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = VecCollection::new();
    /// collection.add_all([1, 2, 3]);
    /// assert_eq!(collection.to_vec(), vec![1, 2, 3]);
    /// ```
    fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Removes every held element that equals any element of `values`
    /// (all occurrences).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = [1, 2, 1, 3].into_iter().collect();
    /// collection.remove_all(&[1, 3]);
    /// assert_eq!(collection.to_vec(), vec![2]);
    /// ```
    fn remove_all(&mut self, values: &[T])
    where
        T: PartialEq,
    {
        if values.is_empty() {
            return;
        }
        self.retain(|element| !values.contains(element));
    }

    /// Removes every held element whose derived key equals the derived
    /// key of some element of `values`.
    ///
    /// This enables removal by derived identity when full value equality
    /// is too strict or unavailable.
    ///
    /// # Arguments
    ///
    /// * `values` - Elements whose keys select what to remove
    /// * `key_fn` - Maps an element to its derived string key
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<&str> =
    ///     ["a1", "a2", "b1"].into_iter().collect();
    ///
    /// // Remove everything sharing a first character with "a9".
    /// collection.remove_all_by_key(&["a9"], |value| {
    ///     value.chars().take(1).collect()
    /// });
    ///
    /// assert_eq!(collection.to_vec(), vec!["b1"]);
    /// ```
    fn remove_all_by_key<F>(&mut self, values: &[T], key_fn: F)
    where
        F: Fn(&T) -> String,
    {
        if values.is_empty() {
            return;
        }
        let doomed_keys: HashSet<String> = values.iter().map(&key_fn).collect();
        self.retain(|element| !doomed_keys.contains(&key_fn(element)));
    }

    // =========================================================================
    // Provided: bulk membership
    // =========================================================================

    /// Returns `true` iff every element of `values` is present.
    ///
    /// Empty input is vacuously `true`.
    #[must_use]
    fn contains_all(&self, values: &[T]) -> bool {
        values.iter().all(|value| self.contains(value))
    }

    /// Returns `true` iff at least one element of `values` is present.
    ///
    /// Empty input is `false`.
    #[must_use]
    fn contains_any(&self, values: &[T]) -> bool {
        values.iter().any(|value| self.contains(value))
    }

    // =========================================================================
    // Provided: in-place set algebra
    // =========================================================================

    /// In-place intersection: retains only elements also present in
    /// `other`.
    ///
    /// The subtractive operation ("receiver minus other") is
    /// [`difference`](Collection::difference); this method never means
    /// that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let mut collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// collection.retain_all(&other);
    /// assert_eq!(collection.to_vec(), vec![2, 3]);
    /// ```
    fn retain_all(&mut self, other: &Self) {
        self.retain(|element| other.contains(element));
    }

    /// Same as [`retain_all`](Collection::retain_all), comparing elements
    /// by derived key instead of full equality.
    fn retain_all_by_key<F>(&mut self, other: &Self, key_fn: F)
    where
        F: Fn(&T) -> String,
    {
        let kept_keys: HashSet<String> = other.iter().map(&key_fn).collect();
        self.retain(|element| kept_keys.contains(&key_fn(element)));
    }

    // =========================================================================
    // Provided: new-allocation set algebra
    // =========================================================================

    /// Returns a new collection containing every element present in the
    /// receiver or in `other`. Neither operand is mutated.
    ///
    /// Elements of `other` already present in the receiver are not added
    /// a second time; a duplicate-permitting receiver keeps its own
    /// duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let collection: HashCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let other: HashCollection<i32> = [3, 4, 5].into_iter().collect();
    ///
    /// let union = collection.union(&other);
    /// assert_eq!(union.len(), 5);
    /// ```
    #[must_use]
    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::default();
        for element in self.iter() {
            result.add(element.clone());
        }
        for element in other.iter() {
            if !result.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    /// Returns a new collection of the elements present in both the
    /// receiver and `other`, by full value equality. Neither operand is
    /// mutated.
    ///
    /// The kept elements are the receiver's.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let collection: VecCollection<i32> = [1, 2, 3].into_iter().collect();
    /// let other: VecCollection<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let intersection = collection.intersection(&other);
    /// assert_eq!(intersection.to_vec(), vec![2, 3]);
    /// ```
    #[must_use]
    fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::default();
        for element in self.iter() {
            if other.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    /// Same as [`intersection`](Collection::intersection), matching
    /// elements by derived key.
    ///
    /// When keys match, the receiver's element is the one kept, which
    /// makes the result deterministic even when the two sides hold
    /// different values under the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let first_char = |value: &&str| -> String { value.chars().take(1).collect() };
    ///
    /// let collection: VecCollection<&str> = ["a1", "b1"].into_iter().collect();
    /// let other: VecCollection<&str> = ["a2", "c2"].into_iter().collect();
    ///
    /// let intersection = collection.intersection_by_key(&other, first_char);
    /// // "a1" (the receiver's element) is kept, not "a2".
    /// assert_eq!(intersection.to_vec(), vec!["a1"]);
    /// ```
    #[must_use]
    fn intersection_by_key<F>(&self, other: &Self, key_fn: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> String,
    {
        let other_keys: HashSet<String> = other.iter().map(&key_fn).collect();
        let mut result = Self::default();
        for element in self.iter() {
            if other_keys.contains(&key_fn(element)) {
                result.add(element.clone());
            }
        }
        result
    }

    /// Returns a new collection of the receiver's elements not present in
    /// `other`. Neither operand is mutated.
    ///
    /// This is the unambiguous name for "receiver minus other".
    #[must_use]
    fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::default();
        for element in self.iter() {
            if !other.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    /// Returns a new collection of elements present in exactly one of the
    /// two operands. Neither operand is mutated.
    #[must_use]
    fn symmetric_difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut result = Self::default();
        for element in self.iter() {
            if !other.contains(element) {
                result.add(element.clone());
            }
        }
        for element in other.iter() {
            if !self.contains(element) {
                result.add(element.clone());
            }
        }
        result
    }

    // =========================================================================
    // Provided: relation probes
    // =========================================================================

    /// Returns `true` if every element of the receiver is present in
    /// `other`.
    #[must_use]
    fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is present in the
    /// receiver.
    #[must_use]
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the receiver and `other` share no element.
    #[must_use]
    fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }

    // =========================================================================
    // Provided: conversion and traversal
    // =========================================================================

    /// Materializes every element into a `Vec`, in iteration order.
    #[must_use]
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Applies `function` to every `(index, element)` pair in iteration
    /// order.
    ///
    /// The collection is borrowed for the duration of the call, so the
    /// callback cannot mutate it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kollect::prelude::*;
    ///
    /// let collection: VecCollection<&str> = ["a", "b"].into_iter().collect();
    /// let mut seen = Vec::new();
    /// collection.for_each(|index, element| seen.push((index, *element)));
    /// assert_eq!(seen, vec![(0, "a"), (1, "b")]);
    /// ```
    fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(usize, &T),
    {
        for (index, element) in self.iter().enumerate() {
            function(index, element);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
