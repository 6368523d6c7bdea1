//! # setalgebra
//!
//! A generic, in-memory mathematical set over any hashable value type.
//!
//! ## Overview
//!
//! [`Set`] keeps distinct values and supports:
//!
//! - **Construction**: [`Set::new`], [`Set::from_values`], the [`set!`] macro
//! - **Mutation**: `insert`, `insert_all`, `delete`, `delete_all`, `pop_any`
//! - **Membership**: `contains`, `contains_all`, `contains_any`, `is_superset`
//! - **Algebra**: `union`, `intersection`, `difference`, `symmetric_difference`
//!
//! Derived sets are always newly allocated. Iteration order is unspecified.
//!
//! ## Feature Flags
//!
//! - `fxhash`: hash with `rustc_hash::FxBuildHasher`
//! - `ahash`: hash with `ahash::RandomState`
//! - `serde`: `Serialize`/`Deserialize` for [`Set`]
//! - `tracing`: trace events for whole-set operations
//! - `full`: `serde` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use setalgebra::prelude::*;
//!
//! let s = set![1, 2, 3];
//! let t = set![1, 2, 4, 5];
//!
//! assert_eq!(s.difference(&t), set![3]);
//! assert_eq!(t.difference(&s), set![4, 5]);
//! assert_eq!(&s & &t, set![1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use setalgebra::prelude::*;
///
/// let set: Set<i32> = set![];
/// assert!(set.is_empty());
/// ```
pub mod prelude {
    pub use crate::Set;
    pub use crate::set;
}

pub mod hasher;
mod hashset;
mod trace;

pub use hashset::{Set, SetIntoIterator, SetIterator};

/// Creates a [`Set`] from a list of values.
///
/// Duplicate values collapse into a single member.
///
/// # Syntax
///
/// - `set![]` - An empty set
/// - `set![a, b, c]` - A set holding `a`, `b` and `c`
///
/// # Examples
///
/// ```rust
/// use setalgebra::{Set, set};
///
/// let empty: Set<&str> = set![];
/// assert!(empty.is_empty());
///
/// let set = set!["foo", "bar", "foo"];
/// assert_eq!(set.len(), 2);
/// assert!(set.contains_all(["foo", "bar"]));
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Set::from_values([$($value),+])
    };
}
