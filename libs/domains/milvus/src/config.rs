use std::fmt;
use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_duration_secs, env_optional, env_or_default, env_parse};
use grpc_client::{
    AuthInterceptor, ChannelConfig, ComposedInterceptor, DEFAULT_MESSAGE_LIMIT, TracingInterceptor,
    compose_interceptors,
};

/// Interceptor stack every Milvus handle runs
pub type MilvusInterceptor = ComposedInterceptor<AuthInterceptor, TracingInterceptor>;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:19530";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Milvus connection configuration
#[derive(Clone)]
pub struct MilvusConfig {
    /// `host:port`, scheme optional
    pub address: String,
    pub connect_timeout: Duration,
    /// Per-call deadline applied by the channel
    pub request_timeout: Duration,
    /// Largest message sent or accepted, in bytes
    pub max_message_size: usize,
    /// Sent as `authorization: Bearer <token>`
    pub token: Option<String>,
    /// Sent as `x-client-name`
    pub client_name: Option<String>,
}

impl MilvusConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_message_size(mut self, bytes: usize) -> Self {
        self.max_message_size = bytes;
        self
    }

    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Reject settings that would make every call fail
    ///
    /// Timeouts are checked by the channel; this covers what the channel
    /// does not see.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_message_size == 0 {
            return Err(ConfigError::Invalid {
                key: "max_message_size".to_string(),
                details: "must be at least one byte".to_string(),
            });
        }
        Ok(())
    }

    pub fn channel_config(&self) -> ChannelConfig {
        ChannelConfig::new()
            .with_connect_timeout(self.connect_timeout)
            .with_request_timeout(self.request_timeout)
            .with_user_agent(concat!("domain_milvus/", env!("CARGO_PKG_VERSION")))
    }

    pub fn interceptor(&self) -> MilvusInterceptor {
        let tracing = match &self.client_name {
            Some(name) => TracingInterceptor::new().with_client_name(name.clone()),
            None => TracingInterceptor::new(),
        };
        compose_interceptors(AuthInterceptor::from_token(self.token.clone()), tracing)
    }
}

impl FromEnv for MilvusConfig {
    /// Reads:
    /// - MILVUS_ADDRESS: defaults to 127.0.0.1:19530
    /// - MILVUS_CONNECT_TIMEOUT_SECS: defaults to 5
    /// - MILVUS_REQUEST_TIMEOUT_SECS: defaults to 30
    /// - MILVUS_MAX_MESSAGE_SIZE: bytes, defaults to 8 MiB
    /// - MILVUS_TOKEN: optional
    /// - MILVUS_CLIENT_NAME: optional
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            address: env_or_default("MILVUS_ADDRESS", DEFAULT_ADDRESS),
            connect_timeout: env_duration_secs("MILVUS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT)?,
            request_timeout: env_duration_secs("MILVUS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT)?,
            max_message_size: match env_parse("MILVUS_MAX_MESSAGE_SIZE", DEFAULT_MESSAGE_LIMIT)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: "MILVUS_MAX_MESSAGE_SIZE".to_string(),
                        details: "must be at least one byte".to_string(),
                    });
                }
                bytes => bytes,
            },
            token: env_optional("MILVUS_TOKEN"),
            client_name: env_optional("MILVUS_CLIENT_NAME"),
        })
    }
}

impl Default for MilvusConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_message_size: DEFAULT_MESSAGE_LIMIT,
            token: None,
            client_name: None,
        }
    }
}

impl fmt::Debug for MilvusConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MilvusConfig")
            .field("address", &self.address)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("max_message_size", &self.max_message_size)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("client_name", &self.client_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "MILVUS_ADDRESS",
        "MILVUS_CONNECT_TIMEOUT_SECS",
        "MILVUS_REQUEST_TIMEOUT_SECS",
        "MILVUS_MAX_MESSAGE_SIZE",
        "MILVUS_TOKEN",
        "MILVUS_CLIENT_NAME",
    ];

    #[test]
    fn test_from_env_with_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = MilvusConfig::from_env().unwrap();
            assert_eq!(config.address, "127.0.0.1:19530");
            assert_eq!(config.connect_timeout, Duration::from_secs(5));
            assert_eq!(config.request_timeout, Duration::from_secs(30));
            assert_eq!(config.max_message_size, 8 * 1024 * 1024);
            assert_eq!(config.token, None);
            assert_eq!(config.client_name, None);
        });
    }

    #[test]
    fn test_from_env_with_values() {
        temp_env::with_vars(
            [
                ("MILVUS_ADDRESS", Some("milvus.internal:19530")),
                ("MILVUS_CONNECT_TIMEOUT_SECS", Some("2")),
                ("MILVUS_REQUEST_TIMEOUT_SECS", Some("120")),
                ("MILVUS_MAX_MESSAGE_SIZE", Some("33554432")),
                ("MILVUS_TOKEN", Some("root:Milvus")),
                ("MILVUS_CLIENT_NAME", Some("ingest")),
            ],
            || {
                let config = MilvusConfig::from_env().unwrap();
                assert_eq!(config.address, "milvus.internal:19530");
                assert_eq!(config.connect_timeout, Duration::from_secs(2));
                assert_eq!(config.request_timeout, Duration::from_secs(120));
                assert_eq!(config.max_message_size, 32 * 1024 * 1024);
                assert_eq!(config.token.as_deref(), Some("root:Milvus"));
                assert_eq!(config.client_name.as_deref(), Some("ingest"));
            },
        );
    }

    #[test]
    fn test_from_env_bad_timeout_names_variable() {
        temp_env::with_var("MILVUS_REQUEST_TIMEOUT_SECS", Some("thirty"), || {
            let err = MilvusConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MILVUS_REQUEST_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_from_env_zero_timeout_rejected() {
        temp_env::with_var("MILVUS_CONNECT_TIMEOUT_SECS", Some("0"), || {
            let err = MilvusConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MILVUS_CONNECT_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_from_env_zero_message_size_rejected() {
        temp_env::with_var("MILVUS_MAX_MESSAGE_SIZE", Some("0"), || {
            let err = MilvusConfig::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MILVUS_MAX_MESSAGE_SIZE"));
        });
    }

    #[test]
    fn test_validate_rejects_zero_message_size() {
        assert!(MilvusConfig::default().validate().is_ok());

        let err = MilvusConfig::default().with_max_message_size(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "max_message_size"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = MilvusConfig::new("localhost:19530").with_token("secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_channel_config_carries_timeouts() {
        let config = MilvusConfig::default().with_request_timeout(Duration::from_secs(3));
        let channel = config.channel_config();
        assert_eq!(channel.request_timeout, Duration::from_secs(3));
        assert_eq!(channel.connect_timeout, Duration::from_secs(5));
    }
}
