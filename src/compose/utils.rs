//! Core composition combinators and helper functions.
//!
//! The named operations [`compose()`](fn@compose) and [`pipe()`](fn@pipe) are the primary interface
//! for combining two unary functions; [`compose_spread`] and [`pipe_spread`]
//! cover the case where the value flowing between the two functions is an
//! argument tuple that must be spread into a multi-argument call.
//!
//! Alongside them live the classic helper combinators:
//!
//! - [`identity`]: the identity function (I combinator)
//! - [`constant`]: a function that always returns the same value (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)

use super::arguments::TupleCall;

/// Composes two functions right-to-left.
///
/// `compose(f, g)` returns a new function computing `f(g(x))`: the inner
/// function `g` is applied first, then the outer function `f`. This follows
/// the mathematical convention for function composition and is the mirror
/// image of [`pipe()`](fn@pipe).
///
/// Both source functions are captured by the returned closure and are never
/// mutated.
///
/// # Examples
///
/// ```
/// use fncomb::compose::compose;
///
/// let square = |x: i32| x * x;
/// let increment = |x: i32| x + 1;
///
/// let composed = compose(square, increment);
/// assert_eq!(composed(5), 36); // square(increment(5))
/// ```
#[inline]
pub fn compose<Input, Intermediate, Output, Outer, Inner>(
    outer: Outer,
    inner: Inner,
) -> impl Fn(Input) -> Output
where
    Outer: Fn(Intermediate) -> Output,
    Inner: Fn(Input) -> Intermediate,
{
    move |input| outer(inner(input))
}

/// Pipes two functions left-to-right.
///
/// `pipe(f, g)` returns a new function computing `g(f(x))`: `f` is applied
/// first, then `g`. This is the mirror image of [`compose()`](fn@compose) and matches the
/// mental model of data flowing through a pipeline.
///
/// # Examples
///
/// ```
/// use fncomb::compose::pipe;
///
/// let square = |x: i32| x * x;
/// let increment = |x: i32| x + 1;
///
/// let piped = pipe(square, increment);
/// assert_eq!(piped(5), 26); // increment(square(5))
/// ```
#[inline]
pub fn pipe<Input, Intermediate, Output, First, Second>(
    first: First,
    second: Second,
) -> impl Fn(Input) -> Output
where
    First: Fn(Input) -> Intermediate,
    Second: Fn(Intermediate) -> Output,
{
    move |input| second(first(input))
}

/// Composes right-to-left, spreading the inner result into the outer
/// function.
///
/// Like [`compose()`](fn@compose), but the inner function produces an argument tuple which
/// is spread across the outer function's parameter list via [`TupleCall`].
/// An inner result whose shape does not match the outer parameter list is a
/// compile error. A unit result `()` spreads into a zero-argument outer
/// function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::compose_spread;
///
/// fn split(n: i32) -> (i32, i32) { (n / 10, n % 10) }
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let digit_sum = compose_spread(add, split);
/// assert_eq!(digit_sum(47), 11);
/// ```
#[inline]
pub fn compose_spread<Input, Intermediate, Outer, Inner>(
    outer: Outer,
    inner: Inner,
) -> impl Fn(Input) -> Outer::Output
where
    Outer: TupleCall<Intermediate>,
    Inner: Fn(Input) -> Intermediate,
{
    move |input| outer.call_with(inner(input))
}

/// Pipes left-to-right, spreading the first result into the second function.
///
/// Mirror image of [`compose_spread`]: the first function runs first and its
/// argument-tuple result is spread into the second function.
///
/// # Examples
///
/// ```
/// use fncomb::compose::pipe_spread;
///
/// fn split(n: i32) -> (i32, i32) { (n / 10, n % 10) }
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let digit_product = pipe_spread(split, multiply);
/// assert_eq!(digit_product(47), 28);
/// ```
#[inline]
pub fn pipe_spread<Input, Intermediate, First, Second>(
    first: First,
    second: Second,
) -> impl Fn(Input) -> Second::Output
where
    First: Fn(Input) -> Intermediate,
    Second: TupleCall<Intermediate>,
{
    move |input| second.call_with(first(input))
}

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` are both equivalent
/// to `f`.
///
/// # Examples
///
/// ```
/// use fncomb::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// Also known as the K combinator.
///
/// # Examples
///
/// ```
/// use fncomb::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns a new function `g` such that `g(b, a) == f(a, b)`.
/// Flipping twice restores the original argument order.
///
/// # Examples
///
/// ```
/// use fncomb::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped = flip(divide);
/// assert_eq!(flipped(2.0, 10.0), 5.0);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
