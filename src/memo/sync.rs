//! Thread-safe memoization.
//!
//! [`SyncMemo`] is the sharable counterpart of [`Memo`](super::Memo): the
//! cache sits behind a [`parking_lot::Mutex`] so the memoized function can
//! be called from several threads at once.
//!
//! # Locking discipline
//!
//! The lock is held only for cache lookups and inserts, never while the
//! wrapped function runs. Two threads that miss on the same arguments may
//! therefore both compute the result; the first insert wins and is the value
//! every caller observes from then on. This trades possible duplicate
//! computation for freedom from deadlocks and from lost-update corruption.
//!
//! # Examples
//!
//! ```rust
//! use fncomb::memo::SyncMemo;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let square = Arc::new(SyncMemo::new(|n: u64| n * n));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let square = Arc::clone(&square);
//!         thread::spawn(move || square.call(12))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 144);
//! }
//! ```

use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use super::CacheMap;

/// A thread-safe memoized function.
///
/// Like [`Memo`](super::Memo), results are cached keyed by the exact
/// arguments, the cache starts empty, grows without bound, and is never
/// evicted. Unlike `Memo`, the cache is guarded by a mutex, so `SyncMemo`
/// is `Sync` whenever the wrapped function and its argument and result
/// types are.
///
/// There is no recursive constructor: a recursive definition would have to
/// re-enter the cell while another thread holds interest in the same keys,
/// and the single-threaded [`Memo`](super::Memo) covers that use case.
///
/// # Panics
///
/// A panic in the wrapped function propagates to the calling thread and
/// stores nothing. The mutex is a [`parking_lot::Mutex`] and is not held
/// during the call, so the cache is never poisoned.
pub struct SyncMemo<Args, Output, Function> {
    cache: Mutex<CacheMap<Args, Output>>,
    function: Function,
}

impl<Args, Output, Function> SyncMemo<Args, Output, Function>
where
    Args: Eq + Hash + Clone,
    Output: Clone,
    Function: Fn(Args) -> Output,
{
    /// Creates a memoized version of `function` with an empty cache.
    pub fn new(function: Function) -> Self {
        Self {
            cache: Mutex::new(CacheMap::default()),
            function,
        }
    }

    /// Invokes the memoized function.
    ///
    /// On a cache hit the stored result is cloned out without invoking the
    /// wrapped function. On a miss the function runs outside the lock; if
    /// another thread inserted the same arguments in the meantime, that
    /// earlier result is kept and returned.
    pub fn call(&self, arguments: Args) -> Output {
        if let Some(cached) = self.cache.lock().get(&arguments) {
            return cached.clone();
        }
        let result = (self.function)(arguments.clone());
        self.cache
            .lock()
            .entry(arguments)
            .or_insert(result)
            .clone()
    }

    /// Returns the cached result for `arguments`, if present.
    ///
    /// Never invokes the wrapped function.
    pub fn cached(&self, arguments: &Args) -> Option<Output> {
        self.cache.lock().get(arguments).cloned()
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

impl<Args, Output, Function> fmt::Debug for SyncMemo<Args, Output, Function> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncMemo")
            .field("cached_entries", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}
