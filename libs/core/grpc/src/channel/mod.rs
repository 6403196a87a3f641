pub mod config;

pub use config::{ChannelConfig, KeepAlive};

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

/// Normalize a server address into an endpoint URI
///
/// Bare `host:port` addresses (the form Milvus and most gRPC servers are
/// configured with) get an `http://` scheme. Addresses that already carry a
/// scheme are returned unchanged.
///
/// ## Example
/// ```ignore
/// assert_eq!(endpoint_uri("127.0.0.1:19530"), "http://127.0.0.1:19530");
/// assert_eq!(endpoint_uri("https://milvus.internal:443"), "https://milvus.internal:443");
/// ```
pub fn endpoint_uri(addr: &str) -> String {
  let addr = addr.trim();
  if addr.contains("://") {
    addr.to_string()
  } else {
    format!("http://{addr}")
  }
}

fn endpoint(addr: impl Into<String>, config: ChannelConfig) -> GrpcResult<Endpoint> {
  config.validate()?;

  let uri = endpoint_uri(&addr.into());
  let endpoint = Endpoint::from_shared(uri.clone()).map_err(|e| {
    tracing::error!(target: "grpc_client", addr = %uri, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;

  config.apply_to_endpoint(endpoint)
}

/// Connect to a gRPC server with the default [`ChannelConfig`]
///
/// Fails fast with [`GrpcError::ConnectionFailed`] when nothing answers
/// within the connect timeout.
///
/// ## Example
/// ```ignore
/// use grpc_client::create_channel;
///
/// let channel = create_channel("127.0.0.1:19530").await?;
/// ```
pub async fn create_channel(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_with_config(addr, ChannelConfig::default()).await
}

/// Creates a lazy gRPC channel that connects on first request
///
/// Returns immediately. Connection problems surface later as the status of
/// the first call made over the channel.
pub fn create_channel_lazy(addr: impl Into<String>) -> GrpcResult<Channel> {
  create_channel_lazy_with_config(addr, ChannelConfig::default())
}

/// Creates a lazy gRPC channel with custom configuration
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let endpoint = endpoint(addr, config)?;

  tracing::debug!(
    target: "grpc_client",
    addr = %endpoint.uri(),
    "Creating lazy gRPC channel (connects on first request)"
  );

  Ok(endpoint.connect_lazy())
}

/// Connect to a gRPC server with custom configuration
///
/// ## Example
/// ```ignore
/// use grpc_client::{create_channel_with_config, ChannelConfig};
/// use std::time::Duration;
///
/// let config = ChannelConfig::default()
///     .with_connect_timeout(Duration::from_secs(10))
///     .with_request_timeout(Duration::from_secs(120));
///
/// let channel = create_channel_with_config("milvus.internal:19530", config).await?;
/// ```
pub async fn create_channel_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let endpoint = endpoint(addr, config)?;
  let uri = endpoint.uri().clone();

  tracing::debug!(target: "grpc_client", addr = %uri, "Creating gRPC channel");

  endpoint.connect().await.map_err(|e| {
    tracing::error!(
      target: "grpc_client",
      addr = %uri,
      error = ?e,
      "Failed to connect to gRPC service"
    );
    GrpcError::ConnectionFailed(e)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_endpoint_uri_adds_scheme() {
    assert_eq!(endpoint_uri("127.0.0.1:19530"), "http://127.0.0.1:19530");
    assert_eq!(endpoint_uri(" localhost:19530 "), "http://localhost:19530");
  }

  #[test]
  fn test_endpoint_uri_keeps_existing_scheme() {
    assert_eq!(endpoint_uri("http://[::1]:19530"), "http://[::1]:19530");
    assert_eq!(endpoint_uri("https://milvus.internal"), "https://milvus.internal");
  }

  #[test]
  fn test_invalid_uri() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let result = runtime.block_on(create_channel("not a valid uri"));
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidUri(_)));
  }

  #[test]
  fn test_zero_timeout_rejected_before_connecting() {
    let config = ChannelConfig::new().with_connect_timeout(Duration::ZERO);
    let result = create_channel_lazy_with_config("127.0.0.1:19530", config);
    assert!(matches!(result.unwrap_err(), GrpcError::InvalidConfig(_)));
  }

  #[test]
  fn test_connection_failed() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = ChannelConfig::new().with_connect_timeout(Duration::from_millis(500));
    // Nothing listens on port 1
    let result = runtime.block_on(create_channel_with_config("127.0.0.1:1", config));
    assert!(matches!(result.unwrap_err(), GrpcError::ConnectionFailed(_)));
  }
}
