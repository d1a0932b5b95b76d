//! # kollect
//!
//! A generic collection library for Rust providing a unified container
//! contract, set algebra, and pluggable backing stores.
//!
//! ## Overview
//!
//! This library centers on a single trait, [`Collection`], describing a
//! mutable, type-parameterized container: membership queries, bulk
//! mutation, set-style algebra (union, intersection, difference, retain),
//! comparison by value equality or by a caller-supplied key function,
//! iteration, serialization, and copying. Three backing stores implement
//! the contract with different trade-offs:
//!
//! - [`VecCollection`](stores::VecCollection): insertion-ordered,
//!   duplicate-permitting (multiset semantics), works for any
//!   `T: PartialEq`
//! - [`HashCollection`](stores::HashCollection): unordered, deduplicating
//!   (set semantics), O(1) expected membership for `T: Eq + Hash`
//! - [`CompactCollection`](stores::CompactCollection): deduplicating with
//!   inline storage for up to 8 elements, spilling to a hash set beyond
//!   that
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every store,
//!   encoded as a plain sequence of elements
//! - `fxhash`: swap the hasher of the hash-backed stores for
//!   `rustc-hash`'s `FxHasher`
//!
//! ## Example
//!
//! ```rust
//! use kollect::prelude::*;
//!
//! let mut primes: HashCollection<i32> = [2, 3, 5, 7].into_iter().collect();
//! let odds: HashCollection<i32> = [1, 3, 5, 7, 9].into_iter().collect();
//!
//! let odd_primes = primes.intersection(&odds);
//! assert_eq!(odd_primes.len(), 3);
//!
//! primes.add(11);
//! assert!(primes.contains(&11));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection contract and every backing store.
///
/// # Usage
///
/// ```rust
/// use kollect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::Collection;
    pub use crate::stores::*;
}

pub mod contract;
pub mod stores;

pub use contract::Collection;
pub use stores::{CompactCollection, HashCollection, VecCollection};
