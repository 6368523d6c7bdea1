//! Hasher selection for [`Set`](crate::Set).
//!
//! The `BuildHasher` behind every set is chosen at compile time through
//! cargo features:
//!
//! | Feature     | Hasher                                        |
//! |-------------|-----------------------------------------------|
//! | (none)      | `std::collections::hash_map::RandomState`     |
//! | `fxhash`    | `rustc_hash::FxBuildHasher`                   |
//! | `ahash`     | `ahash::RandomState`                          |
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::hasher::hasher_name;
//!
//! assert!(!hasher_name().is_empty());
//! ```

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// Returns a short name for the active hasher.
#[must_use]
pub const fn hasher_name() -> &'static str {
    if cfg!(feature = "fxhash") {
        "fxhash"
    } else if cfg!(feature = "ahash") {
        "ahash"
    } else {
        "siphash"
    }
}
