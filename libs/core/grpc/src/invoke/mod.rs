//! Callback-to-future invocation adapter
//!
//! A client handle exposes remote operations through [`Dispatch`]: it starts
//! the call and reports back through a one-shot [`Completion`]. [`invoke`]
//! wraps that into an [`Invocation`] the caller can await.
//!
//! The adapter is a pure pass-through. The response is handed over exactly as
//! the handle produced it, errors are not retried, wrapped or classified, and
//! invocations share no state with each other.

mod completion;
mod operation;

pub use completion::{Completion, Invocation, completion};
pub use operation::{Operation, Service};

use crate::error::Unsettled;

/// A client handle that can start remote operations of service `S`
///
/// Implementations start exactly one remote call per `dispatch` and settle
/// the completion once with its outcome. They must not block: the call runs
/// in the background and the completion fires when it finishes.
pub trait Dispatch<S: Service> {
    /// Error the handle rejects with, passed through to callers unchanged
    type Error: From<Unsettled> + Send + 'static;

    /// Start `Op` with `request`, settling `completion` when it finishes
    fn dispatch<Op>(&self, request: Op::Request, completion: Completion<Op::Response, Self::Error>)
    where
        Op: Operation<Service = S>;
}

/// Invoke `Op` on `handle` and return the pending result
///
/// The call is dispatched before this function returns, so two invocations
/// issued back to back are both in flight even if neither has been awaited.
/// Ordering between invocations is up to the caller: await one before
/// issuing the next when it matters.
///
/// # Example
/// ```ignore
/// use grpc_client::invoke;
///
/// let first = invoke::<Cmd, _>(&handle, Command { cmd: "version".into() });
/// let second = invoke::<Cmd, _>(&handle, Command { cmd: "status".into() });
/// let (first, second) = tokio::join!(first, second);
/// ```
pub fn invoke<Op, H>(handle: &H, request: Op::Request) -> Invocation<Op::Response, H::Error>
where
    Op: Operation,
    H: Dispatch<Op::Service>,
{
    let (completion, invocation) = completion();
    handle.dispatch::<Op>(request, completion);
    invocation
}
