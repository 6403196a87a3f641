use std::fmt;

use super::{
    BoolReply, CollectionInfo, CollectionNameList, CollectionRowCount, CollectionSchema,
    ErrorCode, IndexParam, PartitionList, Status, StringReply, TopKQueryResult, VectorIds,
    VectorsData,
};

impl Status {
    pub fn success() -> Self {
        Self {
            error_code: ErrorCode::Success as i32,
            reason: String::new(),
        }
    }

    pub fn error(code: ErrorCode, reason: impl Into<String>) -> Self {
        Self {
            error_code: code as i32,
            reason: reason.into(),
        }
    }

    /// Compares the raw code, so codes this client does not know about
    /// count as failures
    pub fn is_success(&self) -> bool {
        self.error_code == ErrorCode::Success as i32
    }

    /// The error code, or `None` if the server sent a value outside the enum
    pub fn code(&self) -> Option<ErrorCode> {
        ErrorCode::try_from(self.error_code).ok()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}", code.as_str_name())?,
            None => write!(f, "UNKNOWN({})", self.error_code)?,
        }
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        Ok(())
    }
}

/// Replies that embed a service-level [`Status`]
///
/// A reply that arrived at all was transported fine; whether the server
/// actually did the work is reported here. A reply without a status is
/// treated as successful.
pub trait WithStatus {
    fn status(&self) -> Option<&Status>;

    fn is_success(&self) -> bool {
        self.status().is_none_or(Status::is_success)
    }

    fn error_code(&self) -> Option<ErrorCode> {
        match self.status() {
            Some(status) => status.code(),
            None => Some(ErrorCode::Success),
        }
    }

    fn reason(&self) -> &str {
        self.status().map(|s| s.reason.as_str()).unwrap_or_default()
    }
}

impl WithStatus for Status {
    fn status(&self) -> Option<&Status> {
        Some(self)
    }
}

macro_rules! with_status {
    ($($reply:ty),+ $(,)?) => {
        $(
            impl WithStatus for $reply {
                fn status(&self) -> Option<&Status> {
                    self.status.as_ref()
                }
            }
        )+
    };
}

with_status!(
    BoolReply,
    CollectionInfo,
    CollectionNameList,
    CollectionRowCount,
    CollectionSchema,
    IndexParam,
    PartitionList,
    StringReply,
    TopKQueryResult,
    VectorIds,
    VectorsData,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_success() {
        assert!(Status::default().is_success());
        assert_eq!(Status::default().code(), Some(ErrorCode::Success));
    }

    #[test]
    fn test_unknown_code_is_not_success() {
        let status = Status {
            error_code: 99,
            reason: "from the future".to_string(),
        };
        assert!(!status.is_success());
        assert_eq!(status.code(), None);
        assert_eq!(status.to_string(), "UNKNOWN(99): from the future");
    }

    #[test]
    fn test_reply_without_status_counts_as_success() {
        let reply = BoolReply {
            status: None,
            bool_reply: true,
        };
        assert!(reply.is_success());
        assert_eq!(reply.reason(), "");
    }

    #[test]
    fn test_reply_exposes_embedded_failure() {
        let reply = CollectionRowCount {
            status: Some(Status::error(ErrorCode::CollectionNotExists, "no such collection")),
            collection_row_count: 0,
        };
        assert!(!reply.is_success());
        assert_eq!(reply.error_code(), Some(ErrorCode::CollectionNotExists));
        assert_eq!(reply.reason(), "no such collection");
        assert_eq!(
            reply.status().map(ToString::to_string).as_deref(),
            Some("COLLECTION_NOT_EXISTS: no such collection")
        );
    }
}
