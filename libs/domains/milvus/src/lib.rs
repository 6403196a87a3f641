//! Milvus Domain Library
//!
//! A thin client for the Milvus 0.10 vector database. Each remote operation
//! is one method on [`MilvusClient`] that hands its request to the generic
//! invocation adapter in `grpc_client` and returns the pending reply.
//!
//! # Errors come in two tiers
//!
//! - A call that never produced a reply (server unreachable, deadline hit,
//!   non-OK gRPC status) rejects with [`tonic::Status`].
//! - A call that produced a reply always resolves, even if Milvus reported a
//!   failure inside it. Check the embedded status with
//!   [`WithStatus`](protos::milvus::WithStatus), or opt into turning it into
//!   an error with [`ensure_success`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use domain_milvus::{MilvusClient, MilvusConfig, ensure_success};
//! use protos::milvus::{CollectionSchema, MetricType, PartitionParam};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MilvusConfig::from_env()?;
//! let client = MilvusClient::from_config(&config)?;
//!
//! ensure_success(client.create_collection(CollectionSchema::new("docs", 128, MetricType::L2)).await?)?;
//! ensure_success(client.create_partition(PartitionParam::new("docs", "2024")).await?)?;
//!
//! let partitions = client.show_partitions("docs").await?;
//! println!("{:?}", partitions.partition_tag_array);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{Call, MilvusClient, MilvusHandle};
pub use config::{DEFAULT_ADDRESS, MilvusConfig, MilvusInterceptor};
pub use error::{MilvusError, MilvusResult, ensure_success};
