use tonic::service::Interceptor;
use tonic::{Request, Status};

/// Run `first`, then `second`, on every outgoing request
///
/// A rejection from `first` fails the call before `second` sees it.
///
/// ```ignore
/// use grpc_client::{AuthInterceptor, GrpcHandle, TracingInterceptor, compose_interceptors};
///
/// let headers = compose_interceptors(AuthInterceptor::bearer(token), TracingInterceptor::new());
/// let handle = GrpcHandle::<MilvusService, _>::with_interceptor(channel, headers);
/// ```
pub fn compose_interceptors<A, B>(first: A, second: B) -> ComposedInterceptor<A, B>
where
  A: Interceptor,
  B: Interceptor,
{
  ComposedInterceptor { first, second }
}

/// Two interceptors applied in sequence; see [`compose_interceptors`]
#[derive(Clone, Debug)]
pub struct ComposedInterceptor<A, B> {
  first: A,
  second: B,
}

impl<A: Interceptor, B: Interceptor> ComposedInterceptor<A, B> {
  /// Append a third interceptor, run after both of these
  pub fn then<C: Interceptor>(self, next: C) -> ComposedInterceptor<Self, C> {
    compose_interceptors(self, next)
  }
}

impl<A: Interceptor, B: Interceptor> Interceptor for ComposedInterceptor<A, B> {
  fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
    self.second.call(self.first.call(request)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::interceptors::{AuthInterceptor, TracingInterceptor};
  use tonic::metadata::MetadataValue;

  #[test]
  fn test_both_sets_of_headers_present() {
    let mut headers = compose_interceptors(AuthInterceptor::bearer("root:Milvus"), TracingInterceptor::new());
    let req = headers.call(Request::new(())).unwrap();

    assert_eq!(req.metadata().get("authorization").unwrap(), "Bearer root:Milvus");
    assert!(req.metadata().get("x-request-id").is_some());
    assert!(req.metadata().get("traceparent").is_some());
  }

  #[test]
  fn test_no_token_adds_no_authorization() {
    let mut headers = compose_interceptors(AuthInterceptor::none(), TracingInterceptor::new());
    let req = headers.call(Request::new(())).unwrap();
    assert!(req.metadata().get("authorization").is_none());
  }

  #[test]
  fn test_rejection_stops_the_chain() {
    let mut headers = compose_interceptors(AuthInterceptor::bearer("bad\ntoken"), TracingInterceptor::new());
    let status = headers.call(Request::new(())).unwrap_err();
    assert_eq!(status.code(), tonic::Code::Unauthenticated);
  }

  #[test]
  fn test_then_runs_in_order() {
    let tag = |value: &'static str| {
      move |mut req: Request<()>| -> Result<Request<()>, Status> {
        req.metadata_mut().append("x-order", MetadataValue::from_static(value));
        Ok(req)
      }
    };
    let mut chain = compose_interceptors(tag("a"), tag("b")).then(tag("c"));
    let req = chain.call(Request::new(())).unwrap();

    let order: Vec<_> = req
      .metadata()
      .get_all("x-order")
      .iter()
      .map(|v| v.to_str().unwrap().to_string())
      .collect();
    assert_eq!(order, ["a", "b", "c"]);
  }
}
