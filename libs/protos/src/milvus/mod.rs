//! `milvus.grpc` package (Milvus 0.10 API)
//!
//! Generated messages, the `MilvusService` server stub, the operation table
//! in [`ops`], and helpers for reading the `Status` carried by replies.

include!("../generated/milvus/grpc/milvus.grpc.rs");

mod convert;
pub mod ops;
pub mod params;
mod status;

pub use params::{IndexType, MetricType};
pub use status::WithStatus;
