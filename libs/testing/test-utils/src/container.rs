//! Real Milvus in a container
//!
//! Needs Docker. Tests that use it should be `#[ignore]` so they only run
//! when asked for (`cargo test -- --ignored`).

use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const IMAGE: &str = "milvusdb/milvus";
const TAG: &str = "0.10.6-cpu-d022221-64ddc2";
const GRPC_PORT: u16 = 19530;

/// Milvus 0.10 standalone, removed when dropped
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMilvus;
///
/// # async fn example() {
/// let milvus = TestMilvus::new().await;
/// println!("Milvus at {}", milvus.address);
/// # }
/// ```
pub struct TestMilvus {
    #[allow(dead_code)]
    container: ContainerAsync<GenericImage>,
    /// `host:port` of the gRPC endpoint
    pub address: String,
}

impl TestMilvus {
    pub async fn new() -> Self {
        let container = GenericImage::new(IMAGE, TAG)
            .with_exposed_port(GRPC_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Milvus server started successfully!"))
            .start()
            .await
            .expect("Failed to start Milvus container");

        let host_port = container
            .get_host_port_ipv4(GRPC_PORT)
            .await
            .expect("Failed to get Milvus port");

        let address = format!("127.0.0.1:{host_port}");
        tracing::info!(port = host_port, "Test Milvus ready ({IMAGE}:{TAG})");

        Self { container, address }
    }
}
