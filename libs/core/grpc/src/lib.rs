//! # gRPC Client Library
//!
//! Typed unary invocation over tonic channels, plus the channel tuning,
//! compression helpers and interceptors shared by every client in the workspace.
//!
//! ## Features
//!
//! - **Operation tables**: each remote operation is a zero-sized marker type
//!   implementing [`Operation`], so a call site can only pair an operation with
//!   its own request and response types
//! - **Invocation adapter**: [`invoke`] turns a callback-style dispatch into a
//!   single-shot [`Invocation`] future that resolves or rejects exactly once
//! - **Channel creation**: HTTP/2 and TCP tuning through [`ChannelConfig`],
//!   eager or lazy connection
//! - **Interceptors**: auth (authorization header) and tracing (request IDs,
//!   W3C `traceparent`)
//!
//! ## Quick Start
//!
//! ### Declaring operations
//! ```ignore
//! grpc_client::operations! {
//!     service MilvusService = "milvus.grpc.MilvusService";
//!     HasCollection(CollectionName) -> BoolReply;
//!     Cmd(Command) -> StringReply;
//! }
//! ```
//!
//! ### Invoking them
//! ```ignore
//! use grpc_client::{GrpcHandle, create_channel_lazy, invoke};
//!
//! let channel = create_channel_lazy("127.0.0.1:19530")?;
//! let handle = GrpcHandle::<MilvusService>::new(channel);
//!
//! let reply = invoke::<HasCollection, _>(&handle, CollectionName { collection_name: "docs".into() }).await?;
//! ```
//!
//! ### With Custom Configuration
//! ```ignore
//! use grpc_client::{create_channel_with_config, ChannelConfig};
//! use std::time::Duration;
//!
//! let config = ChannelConfig::default()
//!     .with_connect_timeout(Duration::from_secs(10))
//!     .with_request_timeout(Duration::from_secs(120));
//!
//! let channel = create_channel_with_config("http://[::1]:19530", config).await?;
//! ```

pub mod channel;
pub mod client;
pub mod error;
pub mod handle;
pub mod interceptors;
pub mod invoke;

// Re-export main types and functions for convenience
pub use channel::{
  ChannelConfig, KeepAlive, create_channel, create_channel_lazy, create_channel_lazy_with_config,
  create_channel_with_config, endpoint_uri,
};
pub use client::{
  ConfigurableClient, DEFAULT_MESSAGE_LIMIT, configure_client, with_compression, with_limits, with_standard_limits,
  with_zstd_compression,
};
pub use error::{GrpcError, GrpcResult, Unsettled};
pub use handle::GrpcHandle;
pub use invoke::{Completion, Dispatch, Invocation, Operation, Service, completion, invoke};

// Re-export interceptors for convenience
pub use interceptors::{
  AuthInterceptor, ComposedInterceptor, MetadataExtractor, TracingInterceptor,
  compose_interceptors,
};
