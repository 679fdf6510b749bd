//! Memoization: caching function results keyed by the exact argument tuple.
//!
//! This module provides:
//!
//! - [`memoize`]: wraps a function in a private result cache
//! - [`Memo`]: an explicit memoization cell, with an open-recursion
//!   constructor for memoized recursive definitions
//! - `SyncMemo`: a thread-safe memoization cell (feature `sync`)
//!
//! # Cache semantics
//!
//! A cache is created empty when the wrapper is built, is owned exclusively
//! by that wrapper, grows without bound, and is never evicted or expired.
//! Given equal arguments, the second and subsequent calls return a clone of
//! the value computed on the first call without re-invoking the wrapped
//! function. A call that panics stores nothing; retrying with the same
//! arguments invokes the function again.
//!
//! # Thread safety
//!
//! [`Memo`] and [`memoize`] use a [`RefCell`](std::cell::RefCell)-backed
//! cache and are deliberately not `Sync`; single-threaded use is enforced by
//! the type system rather than by convention. For sharing across threads,
//! enable the `sync` feature and use `SyncMemo`.
//!
//! # Examples
//!
//! ```rust
//! use fncomb::memo::Memo;
//!
//! let fibonacci = Memo::recursive(|fibonacci, n: u64| {
//!     if n <= 1 {
//!         u128::from(n)
//!     } else {
//!         fibonacci.call(n - 1) + fibonacci.call(n - 2)
//!     }
//! });
//!
//! // Linear, not exponential: every intermediate result is cached.
//! assert_eq!(fibonacci.call(100), 354_224_848_179_261_915_075);
//! ```

mod cell;
#[cfg(feature = "sync")]
mod sync;

pub use cell::{Memo, memoize};
#[cfg(feature = "sync")]
pub use sync::SyncMemo;

/// The map type backing memo caches.
///
/// With the `fxhash` feature enabled, caches use the FxHash hasher instead
/// of the standard library's SipHash.
#[cfg(feature = "fxhash")]
pub(crate) type CacheMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// The map type backing memo caches.
#[cfg(not(feature = "fxhash"))]
pub(crate) type CacheMap<K, V> = std::collections::HashMap<K, V>;
