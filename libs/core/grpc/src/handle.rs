use std::fmt;
use std::marker::PhantomData;

use tonic::client::{Grpc, GrpcService};
use tonic::codec::CompressionEncoding;
use tonic::codegen::{Body, Bytes, InterceptedService, StdError, http::uri::PathAndQuery};
use tonic::service::Interceptor;
use tonic::transport::Channel;
use tonic::{GrpcMethod, Request, Status};
use tracing::Instrument;

use crate::client::ConfigurableClient;
use crate::interceptors::TracingInterceptor;
use crate::invoke::{Completion, Dispatch, Operation, Service};

/// Client handle bound to one gRPC service
///
/// Wraps a tonic channel and an interceptor. Any operation of `S` can be
/// dispatched on it; each dispatch runs as its own task, so the handle never
/// waits on an in-flight call and can be shared freely. Cloning is cheap and
/// shares the underlying channel.
pub struct GrpcHandle<S, I = TracingInterceptor> {
    grpc: Grpc<InterceptedService<Channel, I>>,
    service: PhantomData<fn() -> S>,
}

impl<S: Service> GrpcHandle<S, TracingInterceptor> {
    /// Handle with the default tracing interceptor
    pub fn new(channel: Channel) -> Self {
        Self::with_interceptor(channel, TracingInterceptor::new())
    }
}

impl<S: Service, I: Interceptor> GrpcHandle<S, I> {
    /// Handle that runs `interceptor` on every outgoing request
    pub fn with_interceptor(channel: Channel, interceptor: I) -> Self {
        Self {
            grpc: Grpc::new(InterceptedService::new(channel, interceptor)),
            service: PhantomData,
        }
    }
}

impl<S, I: Clone> Clone for GrpcHandle<S, I> {
    fn clone(&self) -> Self {
        Self {
            grpc: self.grpc.clone(),
            service: PhantomData,
        }
    }
}

impl<S: Service, I> fmt::Debug for GrpcHandle<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrpcHandle")
            .field("service", &S::NAME)
            .finish_non_exhaustive()
    }
}

impl<S, I> Dispatch<S> for GrpcHandle<S, I>
where
    S: Service,
    I: Interceptor + Clone + Send + Sync + 'static,
{
    type Error = Status;

    /// Spawn the unary call onto the current Tokio runtime
    ///
    /// Transport failures and non-OK gRPC statuses reject with the
    /// [`Status`] tonic produced.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    fn dispatch<Op>(&self, request: Op::Request, completion: Completion<Op::Response, Status>)
    where
        Op: Operation<Service = S>,
    {
        let grpc = self.grpc.clone();
        let span = tracing::debug_span!(
            target: "grpc_client",
            "grpc_call",
            service = S::NAME,
            operation = Op::NAME,
        );

        tokio::spawn(
            async move {
                let outcome = unary::<Op, _>(grpc, request).await;
                match &outcome {
                    Ok(_) => tracing::debug!(target: "grpc_client", "call completed"),
                    Err(status) => tracing::debug!(
                        target: "grpc_client",
                        code = ?status.code(),
                        message = status.message(),
                        "call failed"
                    ),
                }
                if completion.is_discarded() {
                    tracing::trace!(target: "grpc_client", "caller went away, result dropped");
                }
                completion.settle(outcome);
            }
            .instrument(span),
        );
    }
}

async fn unary<Op, T>(mut grpc: Grpc<T>, request: Op::Request) -> Result<Op::Response, Status>
where
    Op: Operation,
    T: GrpcService<tonic::body::Body>,
    T::Error: Into<StdError>,
    T::ResponseBody: Body<Data = Bytes> + Send + 'static,
    <T::ResponseBody as Body>::Error: Into<StdError> + Send,
{
    grpc.ready()
        .await
        .map_err(|e| Status::unknown(format!("Service was not ready: {}", e.into())))?;

    let codec = tonic_prost::ProstCodec::<Op::Request, Op::Response>::default();
    let path = PathAndQuery::from_static(Op::PATH);
    let mut request = Request::new(request);
    request
        .extensions_mut()
        .insert(GrpcMethod::new(<Op::Service as Service>::NAME, Op::NAME));

    grpc.unary(request, path, codec)
        .await
        .map(tonic::Response::into_inner)
}

impl<S, I> ConfigurableClient for GrpcHandle<S, I> {
    fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.grpc = self.grpc.accept_compressed(encoding);
        self
    }

    fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
        self.grpc = self.grpc.send_compressed(encoding);
        self
    }

    fn max_decoding_message_size(mut self, limit: usize) -> Self {
        self.grpc = self.grpc.max_decoding_message_size(limit);
        self
    }

    fn max_encoding_message_size(mut self, limit: usize) -> Self {
        self.grpc = self.grpc.max_encoding_message_size(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::create_channel_lazy;
    use crate::invoke::invoke;

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct Probe {
        #[prost(string, tag = "1")]
        pub value: String,
    }

    mod table {
        use super::Probe;

        crate::operations! {
            service Nowhere = "test.v1.Nowhere";
            Reach(Probe) -> Probe;
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_rejects_with_status() {
        // Nothing listens on port 1
        let channel = create_channel_lazy("http://127.0.0.1:1").unwrap();
        let handle = GrpcHandle::<table::Nowhere>::new(channel);

        let status = invoke::<table::Reach, _>(&handle, Probe::default())
            .await
            .unwrap_err();
        assert!(matches!(
            status.code(),
            tonic::Code::Unavailable | tonic::Code::Unknown
        ));
    }

    #[tokio::test]
    async fn test_debug_names_service() {
        let channel = create_channel_lazy("http://127.0.0.1:1").unwrap();
        let handle = GrpcHandle::<table::Nowhere>::new(channel);
        assert!(format!("{handle:?}").contains("test.v1.Nowhere"));
    }
}
