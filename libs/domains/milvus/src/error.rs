use core_config::ConfigError;
use grpc_client::GrpcError;
use protos::milvus::{ErrorCode, Status, WithStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MilvusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connection error: {0}")]
    Connection(#[from] GrpcError),

    /// The call never produced a reply
    #[error("gRPC error: {0}")]
    Transport(#[from] tonic::Status),

    /// The reply arrived but Milvus reported a failure in it
    #[error("Milvus reported {0}")]
    Remote(Status),
}

pub type MilvusResult<T> = Result<T, MilvusError>;

impl MilvusError {
    /// Service-level error code, for [`MilvusError::Remote`] only
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            MilvusError::Remote(status) => status.code(),
            _ => None,
        }
    }
}

/// Turn a reply that carries a failure status into an error
///
/// The client never does this on its own: wrappers resolve with whatever
/// Milvus sent. Callers that would rather treat a non-success status as an
/// error opt in here.
pub fn ensure_success<R: WithStatus>(reply: R) -> MilvusResult<R> {
    match reply.status() {
        Some(status) if !status.is_success() => Err(MilvusError::Remote(status.clone())),
        _ => Ok(reply),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protos::milvus::BoolReply;

    #[test]
    fn test_success_passes_through() {
        let reply = BoolReply {
            status: Some(Status::success()),
            bool_reply: true,
        };
        let reply = ensure_success(reply).unwrap();
        assert!(reply.bool_reply);
    }

    #[test]
    fn test_failure_becomes_remote_error() {
        let reply = BoolReply {
            status: Some(Status::error(ErrorCode::IllegalCollectionName, "bad name")),
            bool_reply: false,
        };
        let err = ensure_success(reply).unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::IllegalCollectionName));
        assert_eq!(err.to_string(), "Milvus reported ILLEGAL_COLLECTION_NAME: bad name");
    }

    #[test]
    fn test_transport_error_has_no_code() {
        let err = MilvusError::from(tonic::Status::unavailable("down"));
        assert_eq!(err.error_code(), None);
        assert!(err.to_string().contains("down"));
    }
}
