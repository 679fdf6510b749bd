//! Unit tests for memoization.
//!
//! Covers cache idempotence, memoized recursion, the failed-call retry
//! behavior, and the thread-safe cell behind the `sync` feature.

#![cfg(feature = "memo")]

use fncomb::memo::{Memo, memoize};
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

// =============================================================================
// idempotence
// =============================================================================

#[test]
fn test_memoize_invokes_function_once_per_argument() {
    let invocations = Cell::new(0);
    let square = memoize(|n: i64| {
        invocations.set(invocations.get() + 1);
        n * n
    });

    assert_eq!(square(7), 49);
    assert_eq!(square(7), 49);
    assert_eq!(square(7), 49);
    assert_eq!(invocations.get(), 1);

    assert_eq!(square(8), 64);
    assert_eq!(invocations.get(), 2);
}

#[test]
fn test_memoize_keys_on_exact_argument_tuple() {
    let invocations = Cell::new(0);
    let concatenate = memoize(|(left, right): (String, String)| {
        invocations.set(invocations.get() + 1);
        format!("{left}{right}")
    });

    // ("ab", "c") and ("a", "bc") produce equal output but are distinct keys.
    assert_eq!(concatenate(("ab".into(), "c".into())), "abc");
    assert_eq!(concatenate(("a".into(), "bc".into())), "abc");
    assert_eq!(invocations.get(), 2);

    assert_eq!(concatenate(("ab".into(), "c".into())), "abc");
    assert_eq!(invocations.get(), 2);
}

#[test]
fn test_memo_cache_is_private_per_wrapper() {
    let first = Memo::new(|n: i32| n + 1);
    let second = Memo::new(|n: i32| n + 1);

    first.call(1);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 0);
}

// =============================================================================
// memoized recursion
// =============================================================================

#[test]
fn test_memoized_factorial() {
    let factorial = Memo::recursive(|factorial, n: u64| {
        if n <= 1 { 1 } else { n * factorial.call(n - 1) }
    });
    assert_eq!(factorial.call(10), 3_628_800);
}

#[test]
fn test_memoized_fibonacci_of_one_hundred() {
    // Naively exponential; memoization makes it linear in n.
    let fibonacci = Memo::recursive(|fibonacci, n: u64| {
        if n <= 1 {
            u128::from(n)
        } else {
            fibonacci.call(n - 1) + fibonacci.call(n - 2)
        }
    });
    assert_eq!(fibonacci.call(100), 354_224_848_179_261_915_075);
}

#[test]
fn test_recursion_caches_intermediate_results() {
    let invocations = Cell::new(0u32);
    let fibonacci = Memo::recursive(|fibonacci, n: u32| {
        invocations.set(invocations.get() + 1);
        if n <= 1 {
            u64::from(n)
        } else {
            fibonacci.call(n - 1) + fibonacci.call(n - 2)
        }
    });

    assert_eq!(fibonacci.call(30), 832_040);
    // One invocation per distinct argument 0..=30.
    assert_eq!(invocations.get(), 31);

    // The whole chain below 30 is now cached.
    assert_eq!(fibonacci.cached(&29), Some(514_229));
    fibonacci.call(29);
    assert_eq!(invocations.get(), 31);
}

// =============================================================================
// failure propagation
// =============================================================================

#[test]
fn test_failed_call_is_not_cached_and_is_retried() {
    let invocations = Cell::new(0);
    let failing = Memo::new(|n: i32| {
        invocations.set(invocations.get() + 1);
        assert!(n >= 0, "negative input");
        n
    });

    let first = catch_unwind(AssertUnwindSafe(|| failing.call(-1)));
    assert!(first.is_err());
    assert!(failing.is_empty());

    // An identical retry invokes the function again, and fails again.
    let second = catch_unwind(AssertUnwindSafe(|| failing.call(-1)));
    assert!(second.is_err());
    assert_eq!(invocations.get(), 2);
}

#[test]
fn test_failure_does_not_poison_other_entries() {
    let failing = Memo::new(|n: i32| {
        assert!(n >= 0, "negative input");
        n * 2
    });

    let _ = catch_unwind(AssertUnwindSafe(|| failing.call(-1)));
    assert_eq!(failing.call(5), 10);
    assert_eq!(failing.cached(&5), Some(10));
}

// =============================================================================
// interaction with composition (feature `compose`)
// =============================================================================

#[cfg(feature = "compose")]
mod with_compose {
    use fncomb::compose::{apply_head, tupled};
    use fncomb::memo::memoize;
    use std::cell::Cell;

    fn power(base: i64, exponent: u32) -> i64 {
        base.pow(exponent)
    }

    #[test]
    fn test_memoize_a_tupled_function() {
        let invocations = Cell::new(0);
        let power_counted = |base: i64, exponent: u32| {
            invocations.set(invocations.get() + 1);
            base.pow(exponent)
        };

        let memoized = memoize(tupled(power_counted));
        assert_eq!(memoized((2, 10)), 1024);
        assert_eq!(memoized((2, 10)), 1024);
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn test_memoize_a_partially_applied_function() {
        let power_of_ten = apply_head(power, (10,));
        let memoized = memoize(power_of_ten);
        assert_eq!(memoized((2,)), 100);
        assert_eq!(memoized((3,)), 1000);
        assert_eq!(memoized((2,)), 100);
    }
}

// =============================================================================
// thread-safe cell (feature `sync`)
// =============================================================================

#[cfg(feature = "sync")]
mod sync_memo {
    use fncomb::memo::SyncMemo;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_sync_memo_single_invocation_when_sequential() {
        let invocations = AtomicUsize::new(0);
        let square = SyncMemo::new(|n: u64| {
            invocations.fetch_add(1, Ordering::SeqCst);
            n * n
        });

        assert_eq!(square.call(9), 81);
        assert_eq!(square.call(9), 81);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sync_memo_concurrent_callers_agree() {
        let fingerprint = Arc::new(SyncMemo::new(|n: u64| n.wrapping_mul(0x9E37_79B9)));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let fingerprint = Arc::clone(&fingerprint);
                thread::spawn(move || fingerprint.call(42))
            })
            .collect();

        let expected = fingerprint.call(42);
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(fingerprint.len(), 1);
    }
}
