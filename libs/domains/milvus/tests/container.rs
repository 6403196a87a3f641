//! Against a real Milvus 0.10 container
//!
//! Run with `cargo test -p domain_milvus --test container -- --ignored`.

use domain_milvus::{MilvusClient, ensure_success};
use protos::milvus::{CollectionSchema, MetricType, PartitionParam};
use test_utils::{TestDataBuilder, TestMilvus};

#[tokio::test]
#[ignore = "needs Docker"]
async fn test_version_against_real_server() {
    let milvus = TestMilvus::new().await;
    let client = MilvusClient::new(&milvus.address).unwrap();

    let reply = ensure_success(client.server_version().await.unwrap()).unwrap();
    assert!(reply.string_reply.starts_with("0.10"));
}

#[tokio::test]
#[ignore = "needs Docker"]
async fn test_partition_lifecycle_against_real_server() {
    let milvus = TestMilvus::new().await;
    let client = MilvusClient::new(&milvus.address).unwrap();
    let data = TestDataBuilder::from_test_name("real_partitions");
    let collection = data.collection_name("real");
    let param = PartitionParam::new(&collection, data.partition_tag("a"));

    ensure_success(
        client
            .create_collection(CollectionSchema::new(&collection, 4, MetricType::L2))
            .await
            .unwrap(),
    )
    .unwrap();
    ensure_success(client.create_partition(param.clone()).await.unwrap()).unwrap();
    assert!(client.has_partition(param.clone()).await.unwrap().bool_reply);
    ensure_success(client.drop_partition(param).await.unwrap()).unwrap();
    ensure_success(client.drop_collection(collection.as_str()).await.unwrap()).unwrap();
}
