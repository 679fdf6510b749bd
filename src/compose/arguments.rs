//! Argument tuples: static spreading and concatenation of argument lists.
//!
//! Dynamic languages decide at runtime whether to pass a value through as a
//! single argument or to spread it across a function's parameter list. Here
//! that decision is made statically: an argument list is an ordinary tuple,
//! [`TupleCall`] spreads it into a call, and [`TupleConcat`] joins two of
//! them. Functions of zero to six arguments are supported, mirroring the
//! arity range covered elsewhere in this crate.

/// Calls a function by spreading a tuple of its arguments.
///
/// `TupleCall<Args>` is implemented for every [`Fn`] whose parameter list
/// matches the tuple `Args`, up to six parameters. A zero-argument function
/// is called with the unit tuple `()`.
///
/// This trait is the static counterpart of runtime arity introspection: a
/// tuple whose shape does not match the function's parameter list simply
/// does not satisfy the bound, so an argument-shape mismatch is a compile
/// error rather than a runtime failure.
///
/// # Examples
///
/// ```
/// use fncomb::compose::TupleCall;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(add.call_with((3, 4)), 7);
/// ```
pub trait TupleCall<Args> {
    /// The function's return type.
    type Output;

    /// Invokes the function with the given argument tuple.
    fn call_with(&self, arguments: Args) -> Self::Output;
}

/// Concatenates two argument tuples.
///
/// `head.concat(tail)` produces a single tuple containing the elements of
/// `head` followed by the elements of `tail`. Implemented for every pair of
/// tuples whose combined length does not exceed six.
///
/// This is how [`apply_head`](super::apply_head) and
/// [`apply_tail`](super::apply_tail) join fixed arguments with call-time
/// arguments.
///
/// # Examples
///
/// ```
/// use fncomb::compose::TupleConcat;
///
/// assert_eq!((1, 2).concat(("three",)), (1, 2, "three"));
/// assert_eq!(().concat((1, 2)), (1, 2));
/// ```
pub trait TupleConcat<Tail> {
    /// The concatenated tuple type.
    type Joined;

    /// Joins `self` and `tail` into a single tuple.
    fn concat(self, tail: Tail) -> Self::Joined;
}

/// Adapts a multi-argument function into a unary function over its argument
/// tuple.
///
/// This bridges the combinators that work on argument tuples (such as
/// [`memoize`](crate::memo::memoize)) with ordinary multi-argument
/// functions.
///
/// # Examples
///
/// ```
/// use fncomb::compose::tupled;
///
/// fn power(base: i64, exponent: u32) -> i64 { base.pow(exponent) }
///
/// let power_tupled = tupled(power);
/// assert_eq!(power_tupled((2, 10)), 1024);
/// ```
#[inline]
pub fn tupled<Function, Arguments>(function: Function) -> impl Fn(Arguments) -> Function::Output
where
    Function: TupleCall<Arguments>,
{
    move |arguments| function.call_with(arguments)
}

macro_rules! impl_tuple_call {
    ($($argument:ident),*) => {
        impl<Function, Output $(, $argument)*> TupleCall<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> Output,
        {
            type Output = Output;

            #[allow(non_snake_case)]
            #[inline]
            fn call_with(&self, arguments: ($($argument,)*)) -> Output {
                let ($($argument,)*) = arguments;
                self($($argument),*)
            }
        }
    };
}

impl_tuple_call!();
impl_tuple_call!(A1);
impl_tuple_call!(A1, A2);
impl_tuple_call!(A1, A2, A3);
impl_tuple_call!(A1, A2, A3, A4);
impl_tuple_call!(A1, A2, A3, A4, A5);
impl_tuple_call!(A1, A2, A3, A4, A5, A6);

macro_rules! impl_tuple_concat {
    (($($head:ident),*), ($($tail:ident),*)) => {
        impl<$($head,)* $($tail,)*> TupleConcat<($($tail,)*)> for ($($head,)*) {
            type Joined = ($($head,)* $($tail,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            #[inline]
            fn concat(self, tail: ($($tail,)*)) -> Self::Joined {
                let ($($head,)*) = self;
                let ($($tail,)*) = tail;
                ($($head,)* $($tail,)*)
            }
        }
    };
}

impl_tuple_concat!((), ());
impl_tuple_concat!((), (T1));
impl_tuple_concat!((), (T1, T2));
impl_tuple_concat!((), (T1, T2, T3));
impl_tuple_concat!((), (T1, T2, T3, T4));
impl_tuple_concat!((), (T1, T2, T3, T4, T5));
impl_tuple_concat!((), (T1, T2, T3, T4, T5, T6));
impl_tuple_concat!((H1), ());
impl_tuple_concat!((H1), (T1));
impl_tuple_concat!((H1), (T1, T2));
impl_tuple_concat!((H1), (T1, T2, T3));
impl_tuple_concat!((H1), (T1, T2, T3, T4));
impl_tuple_concat!((H1), (T1, T2, T3, T4, T5));
impl_tuple_concat!((H1, H2), ());
impl_tuple_concat!((H1, H2), (T1));
impl_tuple_concat!((H1, H2), (T1, T2));
impl_tuple_concat!((H1, H2), (T1, T2, T3));
impl_tuple_concat!((H1, H2), (T1, T2, T3, T4));
impl_tuple_concat!((H1, H2, H3), ());
impl_tuple_concat!((H1, H2, H3), (T1));
impl_tuple_concat!((H1, H2, H3), (T1, T2));
impl_tuple_concat!((H1, H2, H3), (T1, T2, T3));
impl_tuple_concat!((H1, H2, H3, H4), ());
impl_tuple_concat!((H1, H2, H3, H4), (T1));
impl_tuple_concat!((H1, H2, H3, H4), (T1, T2));
impl_tuple_concat!((H1, H2, H3, H4, H5), ());
impl_tuple_concat!((H1, H2, H3, H4, H5), (T1));
impl_tuple_concat!((H1, H2, H3, H4, H5, H6), ());
