//! Protocol definitions for the services this workspace talks to
//!
//! Message and server code under `src/generated` is produced from `proto/`
//! and checked in. Hand-written helpers live next to it in each service
//! module.

pub mod milvus;
