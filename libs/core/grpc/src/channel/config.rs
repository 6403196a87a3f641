use std::time::Duration;
use tonic::transport::Endpoint;

use crate::error::{GrpcError, GrpcResult};

/// HTTP/2 PING settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAlive {
  pub interval: Duration,
  /// How long to wait for the PING ack before closing the connection
  pub timeout: Duration,
  /// Keep pinging while no call is in flight
  pub while_idle: bool,
}

impl Default for KeepAlive {
  fn default() -> Self {
    Self {
      interval: Duration::from_secs(30),
      timeout: Duration::from_secs(10),
      while_idle: true,
    }
  }
}

/// Settings applied to the tonic endpoint a channel is built from
///
/// The request timeout applies to every call made over the channel; a call
/// that outlives it rejects with the status tonic reports for an expired
/// deadline. Search replies can be large, so flow-control windows default to
/// 4MB rather than HTTP/2's 64KB.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  pub connect_timeout: Duration,
  pub request_timeout: Duration,
  /// `None` disables HTTP/2 keep-alive
  pub keep_alive: Option<KeepAlive>,
  /// Initial connection and stream window, in bytes
  pub window_size: Option<u32>,
  pub adaptive_window: bool,
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
  pub user_agent: Option<String>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      connect_timeout: Duration::from_secs(5),
      request_timeout: Duration::from_secs(30),
      keep_alive: Some(KeepAlive::default()),
      window_size: Some(4 * 1024 * 1024),
      adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
      user_agent: None,
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Deadline for each call made over the channel
  ///
  /// # Example
  /// ```ignore
  /// // Building an index on a large collection can take minutes
  /// let config = ChannelConfig::new()
  ///     .with_request_timeout(Duration::from_secs(600));
  /// ```
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.request_timeout = timeout;
    self
  }

  pub fn with_keep_alive(mut self, keep_alive: KeepAlive) -> Self {
    self.keep_alive = Some(keep_alive);
    self
  }

  pub fn without_keep_alive(mut self) -> Self {
    self.keep_alive = None;
    self
  }

  /// Set the connection and stream windows to `size` bytes
  pub fn with_window_size(mut self, size: u32) -> Self {
    self.window_size = Some(size);
    self
  }

  /// Value sent in the `user-agent` header, ahead of tonic's own
  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = Some(user_agent.into());
    self
  }

  /// Reject settings tonic would accept but that make every call fail
  pub fn validate(&self) -> GrpcResult<()> {
    if self.connect_timeout.is_zero() {
      return Err(GrpcError::InvalidConfig("connect timeout must be non-zero".to_string()));
    }
    if self.request_timeout.is_zero() {
      return Err(GrpcError::InvalidConfig("request timeout must be non-zero".to_string()));
    }
    if self.window_size == Some(0) {
      return Err(GrpcError::InvalidConfig("window size must be non-zero".to_string()));
    }
    if let Some(keep_alive) = &self.keep_alive
      && (keep_alive.interval.is_zero() || keep_alive.timeout.is_zero())
    {
      return Err(GrpcError::InvalidConfig("keep-alive interval and timeout must be non-zero".to_string()));
    }
    Ok(())
  }

  pub(crate) fn apply_to_endpoint(self, endpoint: Endpoint) -> GrpcResult<Endpoint> {
    let mut endpoint = endpoint
      .connect_timeout(self.connect_timeout)
      .timeout(self.request_timeout)
      .http2_adaptive_window(self.adaptive_window)
      .tcp_nodelay(self.tcp_nodelay)
      .tcp_keepalive(self.tcp_keepalive)
      .initial_connection_window_size(self.window_size)
      .initial_stream_window_size(self.window_size);

    if let Some(keep_alive) = self.keep_alive {
      endpoint = endpoint
        .http2_keep_alive_interval(keep_alive.interval)
        .keep_alive_timeout(keep_alive.timeout)
        .keep_alive_while_idle(keep_alive.while_idle);
    }

    if let Some(user_agent) = self.user_agent {
      endpoint = endpoint
        .user_agent(user_agent)
        .map_err(|e| GrpcError::InvalidConfig(format!("invalid user agent: {e}")))?;
    }

    Ok(endpoint)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_suit_large_replies() {
    let config = ChannelConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.window_size, Some(4 * 1024 * 1024));
    assert_eq!(config.keep_alive, Some(KeepAlive::default()));
    assert!(config.user_agent.is_none());
  }

  #[test]
  fn test_builder() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(10))
      .with_request_timeout(Duration::from_secs(600))
      .with_window_size(1024 * 1024)
      .with_user_agent("milvus-tests")
      .without_keep_alive();

    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.request_timeout, Duration::from_secs(600));
    assert_eq!(config.window_size, Some(1024 * 1024));
    assert_eq!(config.user_agent.as_deref(), Some("milvus-tests"));
    assert_eq!(config.keep_alive, None);
  }

  #[test]
  fn test_validate() {
    assert!(ChannelConfig::default().validate().is_ok());
    assert!(ChannelConfig::new().with_request_timeout(Duration::ZERO).validate().is_err());
    assert!(ChannelConfig::new().with_window_size(0).validate().is_err());

    let stalled = KeepAlive {
      interval: Duration::ZERO,
      ..KeepAlive::default()
    };
    assert!(ChannelConfig::new().with_keep_alive(stalled).validate().is_err());
  }

  #[test]
  fn test_bad_user_agent_is_a_config_error() {
    let endpoint = Endpoint::from_static("http://127.0.0.1:19530");
    let result = ChannelConfig::new().with_user_agent("bad\nagent").apply_to_endpoint(endpoint);
    assert!(matches!(result, Err(GrpcError::InvalidConfig(_))));
  }
}
