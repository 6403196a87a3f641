use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::Unsettled;

/// Create a linked completion handler and invocation
///
/// The [`Completion`] goes to whoever performs the remote call; the
/// [`Invocation`] goes to the caller and resolves with whatever the
/// completion is settled with.
pub fn completion<T, E>() -> (Completion<T, E>, Invocation<T, E>) {
    let (tx, rx) = oneshot::channel();
    (Completion { tx }, Invocation { rx })
}

/// One-shot completion handler for a single invocation
///
/// Settling consumes the handler, so an outcome is delivered at most once.
/// Dropping it unsettled rejects the invocation with [`Unsettled`].
pub struct Completion<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Completion<T, E> {
    /// Deliver the outcome of the remote call
    ///
    /// If the caller already dropped its [`Invocation`] the outcome is
    /// discarded.
    pub fn settle(self, outcome: Result<T, E>) {
        let _ = self.tx.send(outcome);
    }

    /// Settle with a success value
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settle with an error
    pub fn reject(self, error: E) {
        self.settle(Err(error));
    }

    /// Whether the caller has dropped its [`Invocation`]
    pub fn is_discarded(&self) -> bool {
        self.tx.is_closed()
    }

    /// Turn this handler into a callback that may be called any number of times
    ///
    /// For callback registries that take `FnMut`. The first call settles the
    /// invocation; every later call is ignored.
    pub fn into_callback(self) -> impl FnMut(Result<T, E>) + Send
    where
        T: Send,
        E: Send,
    {
        let mut pending = Some(self);
        move |outcome| {
            if let Some(completion) = pending.take() {
                completion.settle(outcome);
            }
        }
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("discarded", &self.is_discarded())
            .finish()
    }
}

/// The caller's side of an invocation
///
/// A future that is `Pending` until the remote call completes, then yields
/// `Ok` (resolved) or `Err` (rejected). It holds no borrow of the client
/// handle, so it can be spawned, stored, or raced against a timer. Dropping
/// it discards the result; the remote call is not cancelled.
#[must_use = "an invocation does nothing with its result unless awaited"]
pub struct Invocation<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Future for Invocation<T, E>
where
    E: From<Unsettled>,
{
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(outcome) => outcome,
            Err(_) => Err(E::from(Unsettled)),
        })
    }
}

impl<T, E> fmt::Debug for Invocation<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Remote(&'static str),
        Unsettled,
    }

    impl From<Unsettled> for TestError {
        fn from(_: Unsettled) -> Self {
            TestError::Unsettled
        }
    }

    #[tokio::test]
    async fn test_resolve_delivers_value() {
        let (done, invocation) = completion::<u32, TestError>();
        done.resolve(7);
        assert_eq!(invocation.await, Ok(7));
    }

    #[tokio::test]
    async fn test_reject_delivers_error() {
        let (done, invocation) = completion::<u32, TestError>();
        done.reject(TestError::Remote("boom"));
        assert_eq!(invocation.await, Err(TestError::Remote("boom")));
    }

    #[tokio::test]
    async fn test_dropped_completion_rejects_with_unsettled() {
        let (done, invocation) = completion::<u32, TestError>();
        drop(done);
        assert_eq!(invocation.await, Err(TestError::Unsettled));
    }

    #[tokio::test]
    async fn test_callback_settles_only_once() {
        let (done, invocation) = completion::<u32, TestError>();
        let mut callback = done.into_callback();
        callback(Ok(1));
        callback(Err(TestError::Remote("late")));
        callback(Ok(2));
        assert_eq!(invocation.await, Ok(1));
    }

    #[tokio::test]
    async fn test_unfired_callback_rejects_with_unsettled() {
        let (done, invocation) = completion::<u32, TestError>();
        let callback = done.into_callback();
        drop(callback);
        assert_eq!(invocation.await, Err(TestError::Unsettled));
    }

    #[tokio::test]
    async fn test_discarded_invocation_is_visible_to_completion() {
        let (done, invocation) = completion::<u32, TestError>();
        assert!(!done.is_discarded());
        drop(invocation);
        assert!(done.is_discarded());
        // Settling after the caller left is a no-op
        done.resolve(3);
    }

    #[tokio::test]
    async fn test_settled_from_another_task() {
        let (done, invocation) = completion::<String, TestError>();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            done.resolve("from task".to_string());
        });
        assert_eq!(invocation.await, Ok("from task".to_string()));
    }
}
