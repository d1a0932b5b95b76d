//! Backing stores implementing the [`Collection`](crate::Collection)
//! contract.
//!
//! This module provides three concrete containers with different
//! trade-offs behind the same contract:
//!
//! - [`VecCollection`]: insertion-ordered, duplicate-permitting (multiset)
//! - [`HashCollection`]: unordered, deduplicating (set)
//! - [`CompactCollection`]: deduplicating, inline up to 8 elements
//!
//! # Examples
//!
//! ## `VecCollection`
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! let mut collection: VecCollection<i32> = VecCollection::new();
//! collection.add(1);
//! collection.add(1); // duplicates are kept
//! assert_eq!(collection.len(), 2);
//! assert_eq!(collection.to_vec(), vec![1, 1]);
//! ```
//!
//! ## `HashCollection`
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! let mut collection: HashCollection<i32> = HashCollection::new();
//! collection.add(1);
//! collection.add(1); // deduplicated
//! assert_eq!(collection.len(), 1);
//!
//! let other: HashCollection<i32> = [1, 2].into_iter().collect();
//! let union = collection.union(&other);
//! assert_eq!(union.len(), 2);
//! ```
//!
//! ## `CompactCollection`
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! // Stays inline up to 8 elements, spills to a hash set beyond.
//! let mut collection: CompactCollection<i32> = (0..20).collect();
//! assert_eq!(collection.len(), 20);
//! collection.retain(|element| *element < 4);
//! assert_eq!(collection.len(), 4); // back to inline storage
//! ```

// =============================================================================
// Hasher Type Alias
// =============================================================================

/// Hash set type used by the hash-backed stores.
///
/// When the `fxhash` feature is enabled, this is `rustc-hash`'s
/// `FxHashSet`, which is faster but not HashDoS-resistant.
///
/// When the `fxhash` feature is disabled (default), this is the standard
/// library's `HashSet` with its randomized default hasher.
#[cfg(feature = "fxhash")]
pub(crate) type DefaultHashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fxhash"))]
pub(crate) type DefaultHashSet<T> = std::collections::HashSet<T>;

mod compact_collection;
mod hash_collection;
mod vec_collection;

pub use compact_collection::CompactCollection;
pub use compact_collection::CompactCollectionIntoIterator;
pub use compact_collection::CompactCollectionIterator;
pub use hash_collection::HashCollection;
pub use hash_collection::HashCollectionIntoIterator;
pub use hash_collection::HashCollectionIterator;
pub use vec_collection::VecCollection;
pub use vec_collection::VecCollectionIntoIterator;
pub use vec_collection::VecCollectionIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod default_hash_set_tests {
    use super::DefaultHashSet;
    use rstest::rstest;

    #[rstest]
    fn test_default_hash_set_basic_operations() {
        let mut set: DefaultHashSet<i32> = DefaultHashSet::default();
        set.insert(1);
        set.insert(1);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1));
    }
}
