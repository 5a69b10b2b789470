//! Deferred fallible computation
//!
//! [`AsyncResult`] wraps a producer that, each time it is executed, builds a
//! future resolving to `Result<A, E>`. Nothing runs at construction time:
//! combinators only describe the work, and [`AsyncResult::execute`] starts it.
//!
//! ```ignore
//! let combined = fetch_animal()
//!     .chain(|animal| fetch_machine().map(move |machine| Combined::merge(&animal, &machine)));
//!
//! match combined.execute().await {
//!     Ok(record) => println!("Success! {record}"),
//!     Err(error) => eprintln!("An error occurred: {}", error.message),
//! }
//! ```

use futures::future::{self, BoxFuture, FutureExt};
use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;

type Producer<E, A> = dyn Fn() -> BoxFuture<'static, Result<A, E>> + Send + Sync;

/// A computation that may fail, computed asynchronously (Value Object)
///
/// Failures are values: the producer yields `Err(E)`, it does not panic.
/// Cloning is cheap and every clone shares the same producer; executing a
/// clone runs the producer again.
pub struct AsyncResult<E, A> {
    producer: Arc<Producer<E, A>>,
}

impl<E, A> AsyncResult<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Wrap a deferred producer.
    ///
    /// The producer is not called here; it is called once per execution.
    pub fn new<F, Fut>(producer: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            producer: Arc::new(move || producer().boxed()),
        }
    }

    /// Lift an already known outcome
    pub fn from_result(result: Result<A, E>) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::new(move || future::ready(result.clone()))
    }

    /// An always-succeeding computation
    pub fn success(value: A) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::from_result(Ok(value))
    }

    /// An always-failing computation
    pub fn failure(error: E) -> Self
    where
        E: Clone + Sync,
        A: Clone + Sync,
    {
        Self::from_result(Err(error))
    }

    /// Transform the success value.
    ///
    /// `f` must be total. It is not called when the computation fails.
    pub fn map<B, F>(self, f: F) -> AsyncResult<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncResult::new(move || {
            let run = self.execute();
            let f = Arc::clone(&f);
            async move { run.await.map(|value| f(value)) }
        })
    }

    /// Transform the failure value, leaving success untouched.
    pub fn map_err<E2, F>(self, f: F) -> AsyncResult<E2, A>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncResult::new(move || {
            let run = self.execute();
            let f = Arc::clone(&f);
            async move { run.await.map_err(|error| f(error)) }
        })
    }

    /// Sequence a second computation after this one.
    ///
    /// `f` is invoked at most once per execution, only after this
    /// computation has succeeded. A failure short-circuits and is returned
    /// unchanged.
    pub fn chain<B, F>(self, f: F) -> AsyncResult<E, B>
    where
        B: Send + 'static,
        F: Fn(A) -> AsyncResult<E, B> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncResult::new(move || {
            let run = self.execute();
            let f = Arc::clone(&f);
            async move {
                match run.await {
                    Ok(value) => f(value).execute().await,
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Observe each outcome without changing it
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: Fn(&Result<A, E>) + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncResult::new(move || {
            let run = self.execute();
            let f = Arc::clone(&f);
            async move {
                let outcome = run.await;
                f(&outcome);
                outcome
            }
        })
    }

    /// Run the producer and return a future for its outcome.
    ///
    /// Each call starts an independent run; outcomes are never cached.
    pub fn execute(&self) -> BoxFuture<'static, Result<A, E>> {
        (self.producer)()
    }
}

impl<E, A> Clone for AsyncResult<E, A> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<E, A> fmt::Debug for AsyncResult<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncResult").finish_non_exhaustive()
    }
}

impl<E, A> IntoFuture for AsyncResult<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output = Result<A, E>;
    type IntoFuture = BoxFuture<'static, Result<A, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(calls: &Arc<AtomicUsize>, value: u32) -> AsyncResult<FetchError, u32> {
        let calls = Arc::clone(calls);
        AsyncResult::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(value) }
        })
    }

    #[tokio::test]
    async fn test_construction_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let computation = counting(&calls, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(computation.execute().await, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_execute_reruns_producer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let computation = counting(&calls, 1);

        computation.execute().await.unwrap();
        computation.execute().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_map_success() {
        let doubled = AsyncResult::<FetchError, u32>::success(21).map(|n| n * 2);
        assert_eq!(doubled.execute().await, Ok(42));
    }

    #[tokio::test]
    async fn test_map_failure_skips_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&calls);
        let mapped = AsyncResult::<FetchError, u32>::failure(FetchError::new("boom")).map(
            move |n| {
                spy.fetch_add(1, Ordering::SeqCst);
                n + 1
            },
        );

        assert_eq!(mapped.execute().await, Err(FetchError::new("boom")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_map_err_transforms_failure_only() {
        let failed = AsyncResult::<FetchError, u32>::failure(FetchError::new("timeout"))
            .map_err(|e| format!("upstream: {}", e.message));
        assert_eq!(failed.execute().await, Err("upstream: timeout".to_string()));

        let ok = AsyncResult::<FetchError, u32>::success(3).map_err(|e| e.message);
        assert_eq!(ok.execute().await, Ok(3));
    }

    #[tokio::test]
    async fn test_chain_success_runs_second() {
        let chained = AsyncResult::<FetchError, u32>::success(4)
            .chain(|n| AsyncResult::success(format!("{n} legs")));
        assert_eq!(chained.execute().await, Ok("4 legs".to_string()));
    }

    #[tokio::test]
    async fn test_chain_failure_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&calls);
        let chained = AsyncResult::<FetchError, u32>::failure(FetchError::new("network down"))
            .chain(move |n| {
                spy.fetch_add(1, Ordering::SeqCst);
                AsyncResult::success(n)
            });

        assert_eq!(chained.execute().await, Err(FetchError::new("network down")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chain_propagates_second_failure() {
        let chained = AsyncResult::<FetchError, u32>::success(1)
            .chain(|_| AsyncResult::<FetchError, u32>::failure(FetchError::new("second")));
        assert_eq!(chained.execute().await, Err(FetchError::new("second")));
    }

    #[tokio::test]
    async fn test_chain_is_sequential() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let first_log = Arc::clone(&log);
        let first = AsyncResult::<FetchError, u32>::new(move || {
            let log = Arc::clone(&first_log);
            async move {
                log.lock().unwrap().push("first:start");
                tokio::task::yield_now().await;
                log.lock().unwrap().push("first:end");
                Ok(1)
            }
        });

        let second_log = Arc::clone(&log);
        let chained = first.chain(move |n| {
            second_log.lock().unwrap().push("second:built");
            AsyncResult::success(n + 1)
        });

        assert_eq!(chained.execute().await, Ok(2));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:start", "first:end", "second:built"]
        );
    }

    #[tokio::test]
    async fn test_inspect_sees_outcome() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let observed = AsyncResult::<FetchError, u32>::success(9)
            .inspect(move |outcome| *sink.lock().unwrap() = Some(outcome.is_ok()));

        assert_eq!(observed.execute().await, Ok(9));
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }

    #[tokio::test]
    async fn test_into_future_awaits_execution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let value = counting(&calls, 5).map(|n| n * 10).await;
        assert_eq!(value, Ok(50));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clone_shares_producer() {
        let calls = Arc::new(AtomicUsize::new(0));
        let original = counting(&calls, 2);
        let copy = original.clone();

        original.execute().await.unwrap();
        copy.execute().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
