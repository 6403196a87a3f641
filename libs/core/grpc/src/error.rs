use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors that can occur while building a channel or a client handle
///
/// These never come out of an invocation: once a handle exists, transport
/// failures are reported through the handle's own error type.
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),

  /// Failed to establish connection
  #[error("Connection failed: {0}")]
  ConnectionFailed(tonic::transport::Error),

  /// Invalid configuration
  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_) | GrpcError::InvalidConfig(_) => {
        tonic::Status::invalid_argument(err.to_string())
      }
      GrpcError::ConnectionFailed(_) => tonic::Status::unavailable(err.to_string()),
    }
  }
}

/// A completion handler was dropped before it delivered an outcome
///
/// Raised when the work driving an invocation goes away (task aborted,
/// runtime shut down, dispatcher panicked) without resolving or rejecting.
/// Handle error types convert it so the invocation still settles.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invocation ended without a result")]
pub struct Unsettled;

impl From<Unsettled> for tonic::Status {
  fn from(err: Unsettled) -> Self {
    tonic::Status::cancelled(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unsettled_maps_to_cancelled() {
    let status = tonic::Status::from(Unsettled);
    assert_eq!(status.code(), tonic::Code::Cancelled);
    assert_eq!(status.message(), "invocation ended without a result");
  }

  #[test]
  fn test_invalid_config_maps_to_invalid_argument() {
    let status = tonic::Status::from(GrpcError::InvalidConfig("zero timeout".to_string()));
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(status.message().contains("zero timeout"));
  }
}
