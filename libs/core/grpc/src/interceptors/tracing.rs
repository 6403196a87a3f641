use tonic::metadata::{MetadataMap, MetadataValue};
use tonic::{GrpcMethod, Request, Status};

/// Interceptor for request correlation
///
/// Adds an `x-request-id` (UUID v4) and a W3C `traceparent` header to every
/// outgoing call, plus `x-client-name` when one is set. Requests that already
/// carry a header keep it.
///
/// # Example
/// ```ignore
/// use grpc_client::{GrpcHandle, TracingInterceptor};
///
/// let tracing = TracingInterceptor::new().with_client_name("milvus-cli");
/// let handle = GrpcHandle::<MilvusService, _>::with_interceptor(channel, tracing);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor {
    client_name: Option<String>,
}

impl TracingInterceptor {
    /// Create a new tracing interceptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Identify the calling program in `x-client-name`
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }
}

/// `00-<trace-id>-<parent-id>-01`, sampled
fn traceparent() -> String {
    let trace_id = uuid::Uuid::new_v4().simple().to_string();
    let span_id = uuid::Uuid::new_v4().simple().to_string();
    format!("00-{}-{}-01", trace_id, &span_id[..16])
}

fn insert_if_absent(request: &mut Request<()>, key: &'static str, value: &str) -> Result<(), Status> {
    if request.metadata().contains_key(key) {
        return Ok(());
    }
    let value: MetadataValue<_> = value
        .parse()
        .map_err(|_| Status::internal(format!("Invalid {key} header")))?;
    request.metadata_mut().insert(key, value);
    Ok(())
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        insert_if_absent(&mut request, "x-request-id", &uuid::Uuid::new_v4().to_string())?;
        insert_if_absent(&mut request, "traceparent", &traceparent())?;
        if let Some(name) = &self.client_name {
            insert_if_absent(&mut request, "x-client-name", name)?;
        }

        let method = request
            .extensions()
            .get::<GrpcMethod>()
            .map(|m| m.method())
            .unwrap_or("unknown");

        let request_id = MetadataExtractor::new(request.metadata()).request_id().unwrap_or("-");
        tracing::debug!(
            target: "grpc_client",
            request_id,
            method,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}

/// Read the correlation headers back out of request metadata
///
/// Server-side counterpart of [`TracingInterceptor`], used by test servers
/// to check what a client sent.
#[derive(Debug, Clone, Copy)]
pub struct MetadataExtractor<'a> {
    metadata: &'a MetadataMap,
}

impl<'a> MetadataExtractor<'a> {
    pub fn new(metadata: &'a MetadataMap) -> Self {
        Self { metadata }
    }

    fn get(&self, key: &str) -> Option<&'a str> {
        self.metadata.get(key).and_then(|v| v.to_str().ok())
    }

    pub fn request_id(&self) -> Option<&'a str> {
        self.get("x-request-id")
    }

    /// Trace id part of `traceparent`
    pub fn trace_id(&self) -> Option<&'a str> {
        self.get("traceparent")?.split('-').nth(1)
    }

    pub fn client_name(&self) -> Option<&'a str> {
        self.get("x-client-name")
    }

    pub fn authorization(&self) -> Option<&'a str> {
        self.get("authorization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_tracing_interceptor() {
        let mut tracing = TracingInterceptor::new();
        let req = tracing.call(Request::new(())).unwrap();
        let id_str = req.metadata().get("x-request-id").unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id_str).is_ok());
        assert!(req.metadata().get("x-client-name").is_none());
    }

    #[test]
    fn test_traceparent_format() {
        let mut tracing = TracingInterceptor::new();
        let req = tracing.call(Request::new(())).unwrap();
        let header = req.metadata().get("traceparent").unwrap().to_str().unwrap();
        let parts: Vec<&str> = header.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], "00");
        assert_eq!(parts[1].len(), 32);
        assert_eq!(parts[2].len(), 16);
        assert_eq!(parts[3], "01");
    }

    #[test]
    fn test_existing_request_id_is_kept() {
        let mut tracing = TracingInterceptor::new().with_client_name("milvus-cli");
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert("x-request-id", "fixed".parse().unwrap());
        let req = tracing.call(request).unwrap();
        assert_eq!(req.metadata().get("x-request-id").unwrap(), "fixed");
        assert_eq!(req.metadata().get("x-client-name").unwrap(), "milvus-cli");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_logs_the_request_id_that_is_sent() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert("x-request-id", "caller-chosen-id".parse().unwrap());
        tracing::subscriber::with_default(subscriber, || {
            TracingInterceptor::new().call(request).unwrap();
        });

        let logged = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("caller-chosen-id"), "{logged}");
    }

    #[test]
    fn test_extractor_reads_back_headers() {
        let mut tracing = TracingInterceptor::new().with_client_name("reader");
        let req = tracing.call(Request::new(())).unwrap();
        let extracted = MetadataExtractor::new(req.metadata());
        assert!(extracted.request_id().is_some());
        assert_eq!(extracted.trace_id().map(str::len), Some(32));
        assert_eq!(extracted.client_name(), Some("reader"));
        assert_eq!(extracted.authorization(), None);
    }
}
