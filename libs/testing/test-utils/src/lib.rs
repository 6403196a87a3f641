//! Shared test utilities for the Milvus client crates
//!
//! - `FakeMilvus`: in-memory implementation of the Milvus gRPC service that
//!   records every call (always available)
//! - `TestServer`: serves a `FakeMilvus` on an ephemeral port (always available)
//! - `TestMilvus`: real Milvus container with automatic cleanup (feature: "container")
//! - `TestDataBuilder`: deterministic names and vectors (always available)
//! - `assertions`: custom assertion helpers (always available)
//!
//! # Usage
//!
//! ## Against the fake
//!
//! ```rust,no_run
//! use test_utils::{FakeMilvus, TestDataBuilder, TestServer};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let fake = FakeMilvus::new();
//!     let server = TestServer::spawn(fake.clone()).await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let collection = builder.collection_name("main");
//!     // connect a client to server.address() ...
//! }
//! ```
//!
//! ## Against real Milvus
//!
//! Add `features = ["container"]` to your dev-dependencies:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["container"] }
//! ```

mod fake;
mod server;

#[cfg(feature = "container")]
mod container;

pub use fake::{DEFAULT_PARTITION, FAKE_VERSION, FakeMilvus, RecordedCall};
pub use server::{TestServer, unused_address};

#[cfg(feature = "container")]
pub use container::TestMilvus;

use protos::milvus::RowRecord;
use uuid::Uuid;

/// Builder for test data with deterministic randomization
///
/// The same seed always yields the same names and vectors, so failures
/// reproduce.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_partition");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Collection name unique to this seed
    ///
    /// Milvus names allow letters, digits and underscores only.
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).collection_name("main");
    /// assert_eq!(name, "test_7_main");
    /// ```
    pub fn collection_name(&self, suffix: &str) -> String {
        format!("test_{}_{}", self.seed, suffix)
    }

    /// Partition tag unique to this seed
    pub fn partition_tag(&self, suffix: &str) -> String {
        format!("part_{}_{}", self.seed % 100_000, suffix)
    }

    /// Random-looking request id, stable for the seed
    pub fn request_id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// The `index`-th vector of `dimension` components in [-1, 1)
    pub fn vector(&self, index: u64, dimension: usize) -> Vec<f32> {
        // xorshift64*, seeded per vector
        let mut state = (self.seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)) | 1;
        (0..dimension)
            .map(|_| {
                state ^= state >> 12;
                state ^= state << 25;
                state ^= state >> 27;
                let bits = state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 40;
                (bits as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
            })
            .collect()
    }

    /// `count` row records of `dimension` components
    pub fn records(&self, count: usize, dimension: usize) -> Vec<RowRecord> {
        (0..count as u64)
            .map(|i| RowRecord::from(self.vector(i, dimension)))
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    use protos::milvus::{ErrorCode, WithStatus};

    /// Assert that a reply carries a success status
    pub fn assert_success<R: WithStatus>(reply: &R, context: &str) {
        assert!(
            reply.is_success(),
            "{}: expected success, got {:?}: {}",
            context,
            reply.error_code(),
            reply.reason()
        );
    }

    /// Assert that a reply carries the given failure code
    pub fn assert_error_code<R: WithStatus>(reply: &R, expected: ErrorCode, context: &str) {
        assert_eq!(
            reply.error_code(),
            Some(expected),
            "{}: expected {:?}, reason was {:?}",
            context,
            expected,
            reply.reason()
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.request_id(), builder2.request_id());
        assert_eq!(builder1.collection_name("a"), builder2.collection_name("a"));
        assert_eq!(builder1.vector(3, 16), builder2.vector(3, 16));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.collection_name("a"), builder2.collection_name("a"));
        assert_ne!(builder1.vector(0, 8), builder2.vector(0, 8));
    }

    #[test]
    fn test_vectors_stay_in_range() {
        let builder = TestDataBuilder::new(1);
        let records = builder.records(10, 32);
        assert_eq!(records.len(), 10);
        for record in &records {
            assert_eq!(record.float_data.len(), 32);
            assert!(record.float_data.iter().all(|x| (-1.0..1.0).contains(x)));
        }
        assert_ne!(records[0], records[1]);
    }

    #[test]
    fn test_collection_names_are_valid_milvus_names() {
        let name = TestDataBuilder::from_test_name("anything").collection_name("x");
        assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }
}
