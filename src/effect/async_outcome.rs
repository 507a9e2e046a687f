//! `AsyncOutcome` - the container behind a deferred completion.
//!
//! An `AsyncOutcome<T, E>` describes an asynchronous fallible computation.
//! Nothing runs until the value is polled; combinators registered on an
//! unsettled container become continuations that fire once the input
//! settles.
//!
//! # Settled fast path
//!
//! A container built from [`yep`], [`nah`] or [`AsyncOutcome::settled`] is
//! already completed. Combinators applied to a settled container transform
//! the inner [`Outcome`] immediately, without allocating a future - the
//! transformation is pure, so evaluating it at composition time is
//! indistinguishable from evaluating it at await time. Deferred containers
//! ([`AsyncOutcome::new`], [`AsyncOutcome::from_future`]) box their
//! computation for type erasure and run it on first poll.
//!
//! # Settling discipline
//!
//! The cell settles exactly once. There is no cancellation and no timeout at
//! this layer: once a chain is started, downstream steps always eventually
//! run, or the pending container never settles - bounding the wait is the
//! caller's responsibility.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::outcome::Outcome;

/// Boxed settling future, type-erased for storage in the state machine.
type SettleFuture<T, E> = Pin<Box<dyn Future<Output = Outcome<T, E>> + Send>>;

pin_project! {
    /// An [`Outcome`] wrapped in a single-assignment deferred-completion cell.
    ///
    /// `AsyncOutcome<T, E>` implements [`Future`] with output
    /// `Outcome<T, E>`, so it can be awaited directly:
    ///
    /// ```rust
    /// use yepnah::effect::yep;
    /// use yepnah::outcome::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcome = yep::<i32, String>(42).await;
    /// assert_eq!(outcome, Outcome::Success(42));
    /// # }
    /// ```
    ///
    /// # Type Parameters
    ///
    /// - `T`: The type of the success value.
    /// - `E`: The type of the failure value.
    pub struct AsyncOutcome<T, E> {
        #[pin]
        state: AsyncOutcomeState<T, E>,
    }
}

pin_project! {
    /// Internal state machine for `AsyncOutcome`.
    ///
    /// State transitions:
    ///
    /// - `Settled` -> `Completed` (first poll returns the stored outcome)
    /// - `Defer` -> `Running` (first poll invokes the thunk to create the future)
    /// - `Running` -> `Completed` (the inner future settles)
    #[project = AsyncOutcomeStateProj]
    enum AsyncOutcomeState<T, E> {
        /// An already-settled container; the outcome is handed out on first poll.
        Settled {
            outcome: Option<Outcome<T, E>>,
        },
        /// A deferred computation (thunk) that creates the settling future when polled.
        Defer {
            thunk: Option<Box<dyn FnOnce() -> SettleFuture<T, E> + Send>>,
        },
        /// The settling future created from the deferred thunk.
        Running {
            #[pin]
            future: SettleFuture<T, E>,
        },
        /// The container has settled (used only as a transition state).
        Completed,
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<T, E> Future for AsyncOutcome<T, E> {
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                AsyncOutcomeStateProj::Settled { outcome } => {
                    // INVARIANT: Settled state is polled at most once before
                    // transitioning to Completed
                    let result = outcome.take().expect(
                        "AsyncOutcome internal error: settled outcome was already consumed. \
                         This indicates the AsyncOutcome was polled after completion.",
                    );
                    this.state.set(AsyncOutcomeState::Completed);
                    return Poll::Ready(result);
                }
                AsyncOutcomeStateProj::Defer { thunk } => {
                    // INVARIANT: Defer state is polled at most once before
                    // transitioning to Running
                    let thunk = thunk.take().expect(
                        "AsyncOutcome internal error: deferred thunk was already consumed. \
                         This indicates a state machine invariant violation.",
                    );
                    let future = thunk();
                    this.state.set(AsyncOutcomeState::Running { future });
                    // Loop to poll the newly created future
                }
                AsyncOutcomeStateProj::Running { future } => match future.poll(context) {
                    Poll::Ready(result) => {
                        this.state.set(AsyncOutcomeState::Completed);
                        return Poll::Ready(result);
                    }
                    Poll::Pending => return Poll::Pending,
                },
                AsyncOutcomeStateProj::Completed => {
                    panic!("AsyncOutcome polled after completion")
                }
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncOutcome<T, E> {
    /// Creates a deferred `AsyncOutcome` from a closure producing a settling
    /// future.
    ///
    /// The closure runs on first poll; building the container performs no
    /// work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::effect::AsyncOutcome;
    /// use yepnah::outcome::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let container = AsyncOutcome::<i32, String>::new(|| async {
    ///     Outcome::Success(40 + 2)
    /// });
    /// assert_eq!(container.await, Outcome::Success(42));
    /// # }
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            state: AsyncOutcomeState::Defer {
                thunk: Some(Box::new(move || Box::pin(action()))),
            },
        }
    }

    /// Creates an `AsyncOutcome` from an existing future of an [`Outcome`].
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self {
            state: AsyncOutcomeState::Defer {
                thunk: Some(Box::new(move || Box::pin(future))),
            },
        }
    }

    /// Wraps an already-settled [`Outcome`] in the deferred cell.
    ///
    /// Non-suspending: awaiting the container yields the outcome on the
    /// first poll.
    pub const fn settled(outcome: Outcome<T, E>) -> Self {
        Self {
            state: AsyncOutcomeState::Settled {
                outcome: Some(outcome),
            },
        }
    }
}

// =============================================================================
// Transform Combinators
// =============================================================================

impl<T, E> AsyncOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transforms the success value once the container settles.
    ///
    /// The async counterpart of [`Outcome::map`]; a failure passes through
    /// unchanged. A settled input is transformed immediately without
    /// allocation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::effect::yep;
    /// use yepnah::outcome::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let container = yep::<i32, String>(21).map(|n| n * 2);
    /// assert_eq!(container.await, Outcome::Success(42));
    /// # }
    /// ```
    pub fn map<U, F>(self, function: F) -> AsyncOutcome<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        match self {
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(outcome) },
            } => AsyncOutcome::settled(outcome.map(function)),
            other => AsyncOutcome::new(move || async move { other.await.map(function) }),
        }
    }

    /// Transforms the failure value once the container settles.
    ///
    /// The async counterpart of [`Outcome::map_err`]; a success passes
    /// through unchanged.
    pub fn map_err<F, O>(self, function: O) -> AsyncOutcome<T, F>
    where
        O: FnOnce(E) -> F + Send + 'static,
        F: Send + 'static,
    {
        match self {
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(outcome) },
            } => AsyncOutcome::settled(outcome.map_err(function)),
            other => AsyncOutcome::new(move || async move { other.await.map_err(function) }),
        }
    }

    /// Sequences another fallible async step after this one.
    ///
    /// The async counterpart of [`Outcome::flat`]: on success, `function`
    /// runs with the settled value and its container is awaited in turn; on
    /// failure, the step is skipped and the original error is carried into
    /// the combined error type via [`Into`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yepnah::effect::{nah, yep};
    /// use yepnah::outcome::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let container = yep::<i32, String>(5)
    ///     .flat(|n| if n > 3 { nah(format!("{n} too big")) } else { yep(n) });
    /// assert_eq!(container.await, Outcome::Failure("5 too big".to_string()));
    /// # }
    /// ```
    pub fn flat<U, F, O>(self, function: O) -> AsyncOutcome<U, F>
    where
        O: FnOnce(T) -> AsyncOutcome<U, F> + Send + 'static,
        E: Into<F>,
        U: Send + 'static,
        F: Send + 'static,
    {
        match self {
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(Outcome::Success(value)) },
            } => function(value),
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(Outcome::Failure(error)) },
            } => AsyncOutcome::settled(Outcome::Failure(error.into())),
            other => AsyncOutcome::new(move || async move {
                match other.await {
                    Outcome::Success(value) => function(value).await,
                    Outcome::Failure(error) => Outcome::Failure(error.into()),
                }
            }),
        }
    }

    /// Recovers from a failure with another async step.
    ///
    /// The async counterpart of [`Outcome::or_else`]: on failure, `function`
    /// runs with the settled error; on success, the value passes through
    /// re-wrapped at the recovery step's error type.
    pub fn or_else<F, O>(self, function: O) -> AsyncOutcome<T, F>
    where
        O: FnOnce(E) -> AsyncOutcome<T, F> + Send + 'static,
        F: Send + 'static,
    {
        match self {
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(Outcome::Success(value)) },
            } => AsyncOutcome::settled(Outcome::Success(value)),
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(Outcome::Failure(error)) },
            } => function(error),
            other => AsyncOutcome::new(move || async move {
                match other.await {
                    Outcome::Success(value) => Outcome::Success(value),
                    Outcome::Failure(error) => function(error).await,
                }
            }),
        }
    }

    /// Terminal extraction: the success value, or `default` on failure.
    ///
    /// This is the point where the caller leaves the container world: the
    /// returned future yields a plain value once the chain settles.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Observes the success value once the container settles.
    ///
    /// `function` is never invoked for a failure.
    pub fn tap<O>(self, function: O) -> Self
    where
        O: FnOnce(&T) + Send + 'static,
    {
        match self {
            Self {
                state: AsyncOutcomeState::Settled { outcome: Some(outcome) },
            } => Self::settled(outcome.tap(function)),
            other => Self::new(move || async move { other.await.tap(function) }),
        }
    }
}

// =============================================================================
// Constructors (free functions)
// =============================================================================

/// Wraps a value in an already-settled success container.
///
/// The async-flavor admission point for successes.
///
/// # Examples
///
/// ```rust
/// use yepnah::effect::yep;
/// use yepnah::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(yep::<i32, String>(1).await, Outcome::Success(1));
/// # }
/// ```
#[inline]
pub const fn yep<T, E>(value: T) -> AsyncOutcome<T, E> {
    AsyncOutcome::settled(Outcome::Success(value))
}

/// Wraps an error in an already-settled failure container.
///
/// The async-flavor admission point for failures.
///
/// # Examples
///
/// ```rust
/// use yepnah::effect::nah;
/// use yepnah::outcome::Outcome;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(nah::<i32, &str>("oops").await, Outcome::Failure("oops"));
/// # }
/// ```
#[inline]
pub const fn nah<T, E>(error: E) -> AsyncOutcome<T, E> {
    AsyncOutcome::settled(Outcome::Failure(error))
}
