//! Unit tests for the AsyncOutcome container.
//!
//! AsyncOutcome wraps an Outcome in a deferred-completion cell. Tests cover:
//! - Construction and direct awaiting
//! - Laziness of deferred containers
//! - The transform combinators and their settled fast path
//! - Terminal extraction (unwrap_or)
//! - Auto-trait guarantees

#![cfg(feature = "async")]

use rstest::rstest;
use static_assertions::assert_impl_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use yepnah::effect::{AsyncOutcome, nah, yep};
use yepnah::outcome::Outcome;

// =============================================================================
// Auto-Trait Guarantees
// =============================================================================

assert_impl_all!(AsyncOutcome<i32, String>: Send, Future);

// =============================================================================
// Basic Construction and Awaiting
// =============================================================================

#[rstest]
#[tokio::test]
async fn yep_settles_to_success() {
    let container = yep::<i32, String>(42);
    assert_eq!(container.await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn nah_settles_to_failure() {
    let container = nah::<i32, String>("oops".to_string());
    assert_eq!(container.await, Outcome::Failure("oops".to_string()));
}

#[rstest]
#[tokio::test]
async fn settled_hands_out_the_stored_outcome() {
    let container = AsyncOutcome::settled(Outcome::<i32, String>::Success(7));
    assert_eq!(container.await, Outcome::Success(7));
}

#[rstest]
#[tokio::test]
async fn new_runs_the_deferred_computation() {
    let container = AsyncOutcome::<i32, String>::new(|| async { Outcome::Success(10 + 20) });
    assert_eq!(container.await, Outcome::Success(30));
}

#[rstest]
#[tokio::test]
async fn new_supports_real_suspension() {
    let container = AsyncOutcome::<&str, String>::new(|| async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        Outcome::Success("delayed")
    });
    assert_eq!(container.await, Outcome::Success("delayed"));
}

#[rstest]
#[tokio::test]
async fn from_future_adapts_an_existing_future() {
    let future = async { Outcome::<i32, String>::Success(42) };
    let container = AsyncOutcome::from_future(future);
    assert_eq!(container.await, Outcome::Success(42));
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
#[tokio::test]
async fn deferred_computation_does_not_run_until_polled() {
    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = executed.clone();

    let container = AsyncOutcome::<i32, String>::new(move || {
        let flag = executed_clone.clone();
        async move {
            flag.store(true, Ordering::SeqCst);
            Outcome::Success(42)
        }
    });

    // Not executed yet
    assert!(!executed.load(Ordering::SeqCst));

    let result = container.await;
    assert!(executed.load(Ordering::SeqCst));
    assert_eq!(result, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn combinators_on_deferred_containers_stay_lazy() {
    let executed = Arc::new(AtomicUsize::new(0));
    let executed_clone = executed.clone();

    let container = AsyncOutcome::<i32, String>::new(move || {
        let counter = executed_clone.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Outcome::Success(1)
        }
    })
    .map(|n| n + 1)
    .flat(|n| yep::<i32, String>(n * 2));

    assert_eq!(executed.load(Ordering::SeqCst), 0);
    assert_eq!(container.await, Outcome::Success(4));
    assert_eq!(executed.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Transform Combinators
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_transforms_settled_success() {
    let container = yep::<i32, String>(21).map(|n| n * 2);
    assert_eq!(container.await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn map_passes_failure_through() {
    let container = nah::<i32, String>("oops".to_string()).map(|n| n * 2);
    assert_eq!(container.await, Outcome::Failure("oops".to_string()));
}

#[rstest]
#[tokio::test]
async fn map_transforms_deferred_success() {
    let container = AsyncOutcome::<i32, String>::new(|| async { Outcome::Success(21) }).map(|n| n * 2);
    assert_eq!(container.await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn map_err_transforms_failure() {
    let container = nah::<i32, String>("oops".to_string()).map_err(|e| e.len());
    assert_eq!(container.await, Outcome::Failure(4));
}

#[rstest]
#[tokio::test]
async fn map_err_passes_success_through() {
    let container = yep::<i32, String>(42).map_err(|e| e.len());
    assert_eq!(container.await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn flat_sequences_async_steps() {
    let container = yep::<i32, String>(10)
        .flat(|n| yep::<i32, String>(n + 5))
        .flat(|n| yep::<i32, String>(n * 2));
    assert_eq!(container.await, Outcome::Success(30));
}

#[rstest]
#[tokio::test]
async fn flat_surfaces_step_failure() {
    let container = yep::<i32, String>(1).flat(|n| nah::<i32, String>(format!("err with {n}")));
    assert_eq!(container.await, Outcome::Failure("err with 1".to_string()));
}

#[rstest]
#[tokio::test]
async fn flat_short_circuits_on_failure() {
    let container = nah::<i32, String>("original".to_string())
        .flat(|_| -> AsyncOutcome<i32, String> { panic!("step must not run on failure") });
    assert_eq!(container.await, Outcome::Failure("original".to_string()));
}

#[rstest]
#[tokio::test]
async fn flat_can_chain_deferred_steps() {
    let container = yep::<i32, String>(5).flat(|n| {
        AsyncOutcome::new(move || async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Outcome::<i32, String>::Success(n * 2)
        })
    });
    assert_eq!(container.await, Outcome::Success(10));
}

#[rstest]
#[tokio::test]
async fn or_else_recovers_failure() {
    let container = nah::<i32, String>("oops".to_string()).or_else(|_| yep::<i32, String>(0));
    assert_eq!(container.await, Outcome::Success(0));
}

#[rstest]
#[tokio::test]
async fn or_else_can_fail_again() {
    let container = nah::<i32, &str>("err").or_else(|_| nah::<i32, String>("other err".to_string()));
    assert_eq!(container.await, Outcome::Failure("other err".to_string()));
}

#[rstest]
#[tokio::test]
async fn or_else_passes_success_through() {
    let container = yep::<i32, String>(42)
        .or_else(|_| -> AsyncOutcome<i32, String> { panic!("recovery must not run on success") });
    assert_eq!(container.await, Outcome::Success(42));
}

#[rstest]
#[tokio::test]
async fn tap_observes_success_only() {
    let seen = Arc::new(AtomicUsize::new(0));

    let seen_clone = seen.clone();
    let container = yep::<usize, String>(42).tap(move |v| seen_clone.store(*v, Ordering::SeqCst));
    assert_eq!(container.await, Outcome::Success(42));
    assert_eq!(seen.load(Ordering::SeqCst), 42);

    let container = nah::<usize, String>("oops".to_string())
        .tap(|_| panic!("tap must not observe a failure"));
    assert_eq!(container.await, Outcome::Failure("oops".to_string()));
}

// =============================================================================
// Terminal Extraction
// =============================================================================

#[rstest]
#[tokio::test]
async fn unwrap_or_returns_success_value() {
    let result = yep::<i32, String>(42).unwrap_or(0).await;
    assert_eq!(result, 42);
}

#[rstest]
#[tokio::test]
async fn unwrap_or_returns_default_on_failure() {
    let result = nah::<i32, String>("oops".to_string()).unwrap_or(0).await;
    assert_eq!(result, 0);
}

#[rstest]
#[tokio::test]
async fn full_chain_settles_to_default_on_failure() {
    let result = yep::<i32, String>(5)
        .map(|n| n + 1)
        .flat(|n| if n == 6 { nah("six".to_string()) } else { yep(n) })
        .unwrap_or(0)
        .await;
    assert_eq!(result, 0);
}
