use tonic::metadata::MetadataValue;
use tonic::{Request, Status};

/// Interceptor for injecting the `authorization` header
///
/// A client may or may not be configured with credentials, so the
/// interceptor can also be empty ([`AuthInterceptor::none`]), in which case
/// requests pass through untouched. That keeps the handle's type the same
/// either way.
///
/// # Example
/// ```ignore
/// use grpc_client::{AuthInterceptor, GrpcHandle};
///
/// let auth = AuthInterceptor::bearer("my-token");
/// let handle = GrpcHandle::<MilvusService, _>::with_interceptor(channel, auth);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AuthInterceptor {
    header_value: Option<String>,
}

impl AuthInterceptor {
    /// Interceptor that adds nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Create an interceptor with a Bearer token
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            header_value: Some(format!("Bearer {}", token.into())),
        }
    }

    /// Bearer token if one is configured, otherwise [`AuthInterceptor::none`]
    pub fn from_token(token: Option<String>) -> Self {
        token.map(Self::bearer).unwrap_or_default()
    }

    /// Create an interceptor with a custom authorization header value
    ///
    /// # Example
    /// ```ignore
    /// let auth = AuthInterceptor::custom("Basic dXNlcjpwYXNz");
    /// ```
    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            header_value: Some(value.into()),
        }
    }

    /// Whether requests get an `authorization` header
    pub fn is_enabled(&self) -> bool {
        self.header_value.is_some()
    }
}

impl tonic::service::Interceptor for AuthInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if let Some(value) = &self.header_value {
            let value: MetadataValue<_> = value
                .parse()
                .map_err(|_| Status::unauthenticated("Invalid auth header"))?;
            request.metadata_mut().insert("authorization", value);
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_bearer_token() {
        let mut auth = AuthInterceptor::bearer("test-token");
        let req = auth.call(Request::new(())).unwrap();
        let auth_header = req.metadata().get("authorization").unwrap();
        assert_eq!(auth_header, "Bearer test-token");
    }

    #[test]
    fn test_custom() {
        let mut auth = AuthInterceptor::custom("Basic xyz123");
        let req = auth.call(Request::new(())).unwrap();
        assert_eq!(req.metadata().get("authorization").unwrap(), "Basic xyz123");
    }

    #[test]
    fn test_none_leaves_request_untouched() {
        let mut auth = AuthInterceptor::from_token(None);
        assert!(!auth.is_enabled());
        let req = auth.call(Request::new(())).unwrap();
        assert!(req.metadata().get("authorization").is_none());
    }

    #[test]
    fn test_unprintable_token_is_rejected() {
        let mut auth = AuthInterceptor::bearer("line\nbreak");
        let status = auth.call(Request::new(())).unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unauthenticated);
    }
}
