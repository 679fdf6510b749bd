//! The `compose!` macro for variadic right-to-left composition.

/// Composes any number of unary functions from right to left.
///
/// `compose!(f, g, h)` returns a new callable equivalent to `|x| f(g(h(x)))`:
/// the rightmost function is applied first, following the mathematical
/// convention. `compose!(f)` returns `f` unchanged.
///
/// The two-function form matches [`compose()`](fn@crate::compose::compose); the
/// macro exists for chains of three or more.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ```
/// use fncomb::compose;
///
/// let increment = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let square = |x: i32| x * x;
///
/// // compose!(f, g, h)(x) = f(g(h(x)))
/// let composed = compose!(increment, double, square);
/// assert_eq!(composed(3), 19); // increment(double(square(3)))
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr) => {
        $function
    };

    // Two functions: compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // Three or more: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_compose_single_is_identity_composition() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_compose_two_applies_right_first() {
        let square = |x: i32| x * x;
        let increment = |x: i32| x + 1;
        let composed = compose!(square, increment);
        assert_eq!(composed(5), 36);
    }

    #[test]
    fn test_compose_four_functions() {
        let increment = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        let negate = |x: i32| -x;
        // negate(2) = -2, square(-2) = 4, double(4) = 8, increment(8) = 9
        let composed = compose!(increment, double, square, negate);
        assert_eq!(composed(2), 9);
    }
}
