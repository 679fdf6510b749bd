//! The `pipe!` macro for variadic left-to-right composition.

/// Pipes any number of unary functions from left to right.
///
/// `pipe!(f, g, h)` returns a new callable equivalent to `|x| h(g(f(x)))`:
/// the leftmost function is applied first, matching the order in which data
/// flows through the pipeline. `pipe!(f)` returns `f` unchanged.
///
/// This is the mirror image of [`compose!`](crate::compose!):
/// `pipe!(f, g)` is `compose!(g, f)`. The two-function form matches
/// [`pipe()`](fn@crate::compose::pipe).
///
/// # Examples
///
/// ```
/// use fncomb::pipe;
///
/// let square = |x: i32| x * x;
/// let increment = |x: i32| x + 1;
///
/// // pipe!(f, g)(x) = g(f(x))
/// let piped = pipe!(square, increment);
/// assert_eq!(piped(5), 26); // increment(square(5))
/// ```
///
/// ## Longer pipelines
///
/// ```
/// use fncomb::pipe;
///
/// fn trim(s: &str) -> &str {
///     s.trim()
/// }
/// let shout = |s: &str| s.to_uppercase();
/// let decorate = |s: String| format!("[{s}]");
///
/// let normalize = pipe!(trim, shout, decorate);
/// assert_eq!(normalize("  hello "), "[HELLO]");
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function: identity pipeline
    ($function:expr) => {
        $function
    };

    // Two functions: pipe!(f, g)(x) = g(f(x))
    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    // Three or more: pipe!(f, g, h, ...) = feed f's output into pipe!(g, h, ...)
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest_piped = $crate::pipe!($($remaining_functions),+);
        move |input| rest_piped(first(input))
    }};
}
