//! Partial application: fixing a prefix or suffix of a function's arguments.
//!
//! [`apply_head`] captures a tuple of leading arguments at creation time and
//! prepends it to the call-time arguments; [`apply_tail`] does the same for
//! trailing arguments. The fixed tuple is captured once and cloned into each
//! invocation; the wrapped function itself is never mutated.
//!
//! Argument counts are checked by the type system through
//! [`TupleConcat`] and [`TupleCall`], so a prefix/suffix that leaves the
//! wrong number of call-time arguments is a compile error.

use super::arguments::{TupleCall, TupleConcat};

/// Fixes a tuple of leading arguments of a function.
///
/// `apply_head(f, head)` returns a new function taking the remaining
/// arguments as a tuple `rest` and computing `f(*head, *rest)`. The `head`
/// tuple is captured when `apply_head` is called and reused (cloned) on
/// every invocation.
///
/// # Examples
///
/// ```
/// use fncomb::compose::apply_head;
///
/// fn power(base: i64, exponent: u32) -> i64 {
///     base.pow(exponent)
/// }
///
/// // Fix the base to 10; the exponent is supplied per call.
/// let power_of_ten = apply_head(power, (10,));
/// assert_eq!(power_of_ten((2,)), 100);
/// assert_eq!(power_of_ten((3,)), 1000);
/// ```
///
/// ## Fixing more than one argument
///
/// ```
/// use fncomb::compose::apply_head;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let clamp_percent = apply_head(clamp, (0, 100));
/// assert_eq!(clamp_percent((150,)), 100);
/// assert_eq!(clamp_percent((-3,)), 0);
/// ```
#[inline]
pub fn apply_head<Function, Head, Rest>(
    function: Function,
    head: Head,
) -> impl Fn(Rest) -> Function::Output
where
    Head: TupleConcat<Rest> + Clone,
    Function: TupleCall<Head::Joined>,
{
    move |rest| function.call_with(head.clone().concat(rest))
}

/// Fixes a tuple of trailing arguments of a function.
///
/// `apply_tail(f, tail)` returns a new function taking the remaining
/// arguments as a tuple `rest` and computing `f(*rest, *tail)`. The `tail`
/// tuple is captured when `apply_tail` is called and reused (cloned) on
/// every invocation.
///
/// # Examples
///
/// ```
/// use fncomb::compose::apply_tail;
///
/// fn power(base: i64, exponent: u32) -> i64 {
///     base.pow(exponent)
/// }
///
/// // Fix the exponent to 10; the base is supplied per call.
/// let to_the_tenth = apply_tail(power, (10,));
/// assert_eq!(to_the_tenth((2,)), 1024);
/// ```
#[inline]
pub fn apply_tail<Function, Rest, Tail>(
    function: Function,
    tail: Tail,
) -> impl Fn(Rest) -> Function::Output
where
    Rest: TupleConcat<Tail>,
    Tail: Clone,
    Function: TupleCall<Rest::Joined>,
{
    move |rest| function.call_with(rest.concat(tail.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(base: i64, exponent: u32) -> i64 {
        base.pow(exponent)
    }

    fn join(first: &str, second: &str, third: &str) -> String {
        format!("{first}-{second}-{third}")
    }

    #[test]
    fn test_apply_head_fixes_first_argument() {
        let power_of_ten = apply_head(power, (10,));
        assert_eq!(power_of_ten((2,)), 100);
    }

    #[test]
    fn test_apply_tail_fixes_last_argument() {
        let to_the_tenth = apply_tail(power, (10,));
        assert_eq!(to_the_tenth((2,)), 1024);
    }

    #[test]
    fn test_apply_head_fixes_all_arguments() {
        // All arguments fixed: the result is a thunk taking the unit tuple.
        let hundred = apply_head(power, (10, 2));
        assert_eq!(hundred(()), 100);
    }

    #[test]
    fn test_apply_tail_fixes_all_arguments() {
        let kilo = apply_tail(power, (2, 10));
        assert_eq!(kilo(()), 1024);
    }

    #[test]
    fn test_apply_head_with_two_fixed_and_one_free() {
        let prefixed = apply_head(join, ("a", "b"));
        assert_eq!(prefixed(("c",)), "a-b-c");
    }

    #[test]
    fn test_apply_tail_with_two_fixed_and_one_free() {
        let suffixed = apply_tail(join, ("b", "c"));
        assert_eq!(suffixed(("a",)), "a-b-c");
    }

    #[test]
    fn test_fixed_arguments_are_reused_across_calls() {
        let add_ten = apply_head(|a: i32, b: i32| a + b, (10,));
        assert_eq!(add_ten((1,)), 11);
        assert_eq!(add_ten((2,)), 12);
        assert_eq!(add_ten((3,)), 13);
    }
}
