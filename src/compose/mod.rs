//! Function composition, piping, and partial application.
//!
//! This module provides combinators that build new callables out of existing
//! ones, in a declarative, point-free style.
//!
//! # Overview
//!
//! - [`compose()`](fn@compose) / [`compose!`]: compose functions right-to-left
//!   (mathematical composition)
//! - [`pipe()`](fn@pipe) / [`pipe!`]: compose functions left-to-right (data flow style)
//! - [`compose_spread`] / [`pipe_spread`]: composition where the upstream
//!   result is an argument tuple spread into a multi-argument downstream
//!   function
//! - [`apply_head`] / [`apply_tail`]: partial application fixing a prefix or
//!   suffix of a function's arguments
//!
//! # Helper Functions
//!
//! - [`identity`]: the identity function - returns its argument unchanged
//! - [`constant`]: creates a function that always returns the same value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`tupled`]: adapts a multi-argument function to take its argument tuple
//!
//! # Argument Tuples
//!
//! Several combinators here deal with functions of more than one argument.
//! Rather than inspecting arity at runtime, the argument list is represented
//! statically as a tuple: `(A,)`, `(A, B)`, and so on up to six elements.
//! The [`TupleCall`] trait spreads such a tuple into an ordinary function
//! call, and [`TupleConcat`] concatenates two of them. An upstream result
//! that cannot be spread into the downstream function's parameter list is a
//! type error, not a runtime failure.
//!
//! # Examples
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use fncomb::compose::compose;
//!
//! let square = |x: i32| x * x;
//! let increment = |x: i32| x + 1;
//!
//! // compose(f, g)(x) = f(g(x))
//! let composed = compose(square, increment);
//! assert_eq!(composed(5), 36); // square(increment(5)) = square(6) = 36
//! ```
//!
//! ## Piping (left-to-right)
//!
//! ```
//! use fncomb::compose::pipe;
//!
//! let square = |x: i32| x * x;
//! let increment = |x: i32| x + 1;
//!
//! // pipe(f, g)(x) = g(f(x))
//! let piped = pipe(square, increment);
//! assert_eq!(piped(5), 26); // increment(square(5)) = increment(25) = 26
//! ```
//!
//! ## Partial application
//!
//! ```
//! use fncomb::compose::{apply_head, apply_tail};
//!
//! fn power(base: i64, exponent: u32) -> i64 {
//!     base.pow(exponent)
//! }
//!
//! let power_of_ten = apply_head(power, (10,));
//! assert_eq!(power_of_ten((2,)), 100);
//!
//! let to_the_tenth = apply_tail(power, (10,));
//! assert_eq!(to_the_tenth((2,)), 1024);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Mirror**: `pipe(f, g)(x) == compose(g, f)(x)`

mod arguments;
mod compose_macro;
mod partial;
mod pipe_macro;
mod utils;

pub use arguments::{TupleCall, TupleConcat, tupled};
pub use partial::{apply_head, apply_tail};
pub use utils::{compose, compose_spread, constant, flip, identity, pipe, pipe_spread};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
