//! The single-threaded memoization cell.
//!
//! [`Memo`] caches results keyed by the exact argument tuple, and its
//! [`recursive`](Memo::recursive) constructor supports memoized recursive
//! definitions without manual cache plumbing. [`memoize`] is the closure
//! form for when no introspection or recursion is needed.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

use super::CacheMap;

/// A memoized function: results are cached keyed by the exact arguments.
///
/// `Memo` wraps a function together with a private cache. [`call`](Memo::call)
/// looks the arguments up first; on a hit the stored result is cloned out
/// without invoking the function, on a miss the function runs and its result
/// is stored. Entries are never removed or expired; the cache lives exactly
/// as long as the `Memo`.
///
/// Multi-argument functions are memoized over their argument tuple, either
/// written directly as a closure over a tuple or adapted with
/// [`tupled`](crate::compose::tupled).
///
/// # Recursion
///
/// [`Memo::recursive`] builds a memoized function whose body receives the
/// `Memo` itself as its first parameter. Recursive calls go through the
/// cache, so intermediate and base-case results are stored as the recursion
/// unwinds. This is what collapses the exponential naive Fibonacci recursion
/// to a linear number of invocations.
///
/// # Panics
///
/// A panic in the wrapped function propagates to the caller and stores
/// nothing: the failing arguments are looked up fresh, and the function
/// re-invoked, on the next call. Unlike a lazy cell there is no poisoned
/// state.
///
/// # Thread Safety
///
/// This type is not `Sync`: the cache is a [`RefCell`]. Use `SyncMemo`
/// (feature `sync`) to share a memoized function across threads.
///
/// # Examples
///
/// ## Plain memoization
///
/// ```rust
/// use fncomb::memo::Memo;
/// use std::cell::Cell;
///
/// let invocations = Cell::new(0);
/// let double = Memo::new(|n: i32| {
///     invocations.set(invocations.get() + 1);
///     n * 2
/// });
///
/// assert_eq!(double.call(21), 42);
/// assert_eq!(double.call(21), 42);
/// assert_eq!(invocations.get(), 1); // second call served from the cache
/// ```
///
/// ## Memoized recursion
///
/// ```rust
/// use fncomb::memo::Memo;
///
/// let factorial = Memo::recursive(|factorial, n: u64| {
///     if n <= 1 { 1 } else { n * factorial.call(n - 1) }
/// });
///
/// assert_eq!(factorial.call(10), 3_628_800);
/// ```
pub struct Memo<'function, Args, Output> {
    cache: RefCell<CacheMap<Args, Output>>,
    function: Box<dyn Fn(&Memo<'function, Args, Output>, Args) -> Output + 'function>,
}

impl<'function, Args, Output> Memo<'function, Args, Output>
where
    Args: Eq + Hash + Clone,
    Output: Clone,
{
    /// Creates a memoized version of `function` with an empty cache.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fncomb::memo::Memo;
    ///
    /// let square = Memo::new(|n: i64| n * n);
    /// assert_eq!(square.call(12), 144);
    /// ```
    pub fn new<Function>(function: Function) -> Self
    where
        Function: Fn(Args) -> Output + 'function,
    {
        Self::recursive(move |_, arguments| function(arguments))
    }

    /// Creates a memoized recursive function.
    ///
    /// The wrapped function receives the `Memo` itself as its first
    /// parameter; recursive calls made through it are served from the cache
    /// when possible and cached otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fncomb::memo::Memo;
    ///
    /// let fibonacci = Memo::recursive(|fibonacci, n: u64| {
    ///     if n <= 1 {
    ///         u128::from(n)
    ///     } else {
    ///         fibonacci.call(n - 1) + fibonacci.call(n - 2)
    ///     }
    /// });
    ///
    /// assert_eq!(fibonacci.call(100), 354_224_848_179_261_915_075);
    /// ```
    pub fn recursive<Function>(function: Function) -> Self
    where
        Function: Fn(&Self, Args) -> Output + 'function,
    {
        Self {
            cache: RefCell::new(CacheMap::default()),
            function: Box::new(function),
        }
    }

    /// Invokes the memoized function.
    ///
    /// On a cache hit the stored result is cloned out and the wrapped
    /// function is not invoked. On a miss the function runs, its result is
    /// stored, and a clone is returned.
    ///
    /// # Panics
    ///
    /// Propagates any panic from the wrapped function; nothing is cached in
    /// that case.
    pub fn call(&self, arguments: Args) -> Output {
        {
            let cache = self.cache.borrow();
            if let Some(cached) = cache.get(&arguments) {
                return cached.clone();
            }
        }
        // Borrow released above: the wrapped function may re-enter `call`.
        let result = (self.function)(self, arguments.clone());
        self.cache.borrow_mut().insert(arguments, result.clone());
        result
    }

    /// Returns the cached result for `arguments`, if present.
    ///
    /// Never invokes the wrapped function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fncomb::memo::Memo;
    ///
    /// let square = Memo::new(|n: i64| n * n);
    /// assert_eq!(square.cached(&3), None);
    ///
    /// square.call(3);
    /// assert_eq!(square.cached(&3), Some(9));
    /// ```
    pub fn cached(&self, arguments: &Args) -> Option<Output> {
        self.cache.borrow().get(arguments).cloned()
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<Args, Output> fmt::Debug for Memo<'_, Args, Output> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memo")
            .field("cached_entries", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Wraps a function in a private result cache.
///
/// The returned closure behaves like `function`, except that results are
/// cached keyed by the exact arguments: equal arguments invoke `function`
/// only once. The cache is created empty, grows without bound, and lives as
/// long as the returned closure.
///
/// The argument type may itself be a tuple; combine with
/// [`tupled`](crate::compose::tupled) to memoize a multi-argument function.
///
/// For recursive definitions or cache introspection, use [`Memo`].
///
/// # Examples
///
/// ```rust
/// use fncomb::compose::tupled;
/// use fncomb::memo::memoize;
///
/// fn power(base: i64, exponent: u32) -> i64 {
///     base.pow(exponent)
/// }
///
/// let memoized_power = memoize(tupled(power));
/// assert_eq!(memoized_power((2, 10)), 1024);
/// assert_eq!(memoized_power((2, 10)), 1024); // cache hit
/// ```
pub fn memoize<Args, Output, Function>(function: Function) -> impl Fn(Args) -> Output
where
    Args: Eq + Hash + Clone,
    Output: Clone,
    Function: Fn(Args) -> Output,
{
    let cache = RefCell::new(CacheMap::<Args, Output>::default());
    move |arguments| {
        {
            let cache = cache.borrow();
            if let Some(cached) = cache.get(&arguments) {
                return cached.clone();
            }
        }
        let result = function(arguments.clone());
        cache.borrow_mut().insert(arguments, result.clone());
        result
    }
}
