//! # fncomb
//!
//! Higher-order function combinators for Rust: composition, piping,
//! partial application, and memoization.
//!
//! ## Overview
//!
//! This library provides a small set of combinators that build new callables
//! out of existing ones:
//!
//! - **Composition**: [`compose()`](fn@compose::compose), [`pipe()`](fn@compose::pipe)
//!   and the variadic [`compose!`] and [`pipe!`] macros
//! - **Partial Application**: [`apply_head`](compose::apply_head) and
//!   [`apply_tail`](compose::apply_tail) fix a prefix or suffix of a
//!   function's arguments at creation time
//! - **Memoization**: [`memoize`](memo::memoize), [`Memo`](memo::Memo) and
//!   the thread-safe `SyncMemo` cache results keyed by the exact argument
//!   tuple
//!
//! Multi-argument functions are handled through argument tuples: the
//! [`TupleCall`](compose::TupleCall) trait spreads a tuple into a
//! multi-argument call, and [`TupleConcat`](compose::TupleConcat) joins a
//! fixed tuple with call-time arguments. Where a dynamic language would fail
//! at runtime on an argument-shape or arity mismatch, these traits turn the
//! mismatch into a compile error.
//!
//! ## Feature Flags
//!
//! - `compose`: composition, piping, and partial application
//! - `memo`: memoization
//! - `sync`: thread-safe memoization backed by `parking_lot`
//! - `fxhash`: use the FxHash hasher for memo caches
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fncomb::compose::{compose, pipe};
//!
//! let square = |x: i32| x * x;
//! let increment = |x: i32| x + 1;
//!
//! // compose applies right-to-left, pipe left-to-right
//! assert_eq!(compose(square, increment)(5), 36);
//! assert_eq!(pipe(square, increment)(5), 26);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fncomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "memo")]
pub mod memo;
