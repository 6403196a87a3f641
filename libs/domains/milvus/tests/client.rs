//! Invocation behaviour of `MilvusClient` against an in-process server

use std::time::Duration;

use domain_milvus::{MilvusClient, MilvusConfig, MilvusError, ensure_success};
use protos::milvus::ops;
use protos::milvus::{CollectionName, CollectionSchema, Command, ErrorCode, MetricType, WithStatus};
use test_utils::assertions::{assert_error_code, assert_success};
use test_utils::{FAKE_VERSION, FakeMilvus, TestDataBuilder, TestServer, unused_address};
use tokio::time::Instant;

async fn setup() -> (FakeMilvus, TestServer, MilvusClient) {
    let fake = FakeMilvus::new();
    let server = TestServer::spawn(fake.clone()).await;
    let client = MilvusClient::new(server.address()).unwrap();
    (fake, server, client)
}

#[tokio::test]
async fn test_ping_resolves_with_default_success_reply() {
    let (_fake, _server, client) = setup().await;

    let reply = client.server_version().await.unwrap();
    assert_success(&reply, "version");
    assert_eq!(reply.string_reply, FAKE_VERSION);
}

#[tokio::test]
async fn test_each_call_is_sent_exactly_once_with_its_payload() {
    let (fake, _server, client) = setup().await;

    client.has_collection("docs").await.unwrap();

    assert_eq!(fake.calls("HasCollection"), 1);
    assert_eq!(fake.total_calls(), 1);
    assert_eq!(
        fake.requests::<CollectionName>("HasCollection"),
        vec![CollectionName::from("docs")]
    );
}

#[tokio::test]
async fn test_reply_is_resolved_as_sent() {
    let (_fake, _server, client) = setup().await;
    let name = TestDataBuilder::from_test_name("reply_identity").collection_name("main");

    let schema = CollectionSchema::new(&name, 16, MetricType::Ip);
    assert_success(&client.create_collection(schema.clone()).await.unwrap(), "create");

    let described = client.describe_collection(name.as_str()).await.unwrap();
    assert_eq!(
        described,
        CollectionSchema {
            status: Some(protos::milvus::Status::success()),
            ..schema
        }
    );
}

#[tokio::test]
async fn test_transport_error_rejects_unchanged() {
    let (fake, _server, client) = setup().await;
    fake.fail_next("DropCollection", tonic::Status::permission_denied("read-only replica"));

    let status = client.drop_collection("docs").await.unwrap_err();
    assert_eq!(status.code(), tonic::Code::PermissionDenied);
    assert_eq!(status.message(), "read-only replica");
    assert_eq!(fake.calls("DropCollection"), 1);
}

#[tokio::test]
async fn test_remote_failure_resolves_with_status() {
    let (_fake, _server, client) = setup().await;

    let reply = client.count_collection("missing").await.unwrap();
    assert!(!reply.is_success());
    assert_error_code(&reply, ErrorCode::CollectionNotExists, "count");

    let err = ensure_success(reply).unwrap_err();
    assert!(matches!(err, MilvusError::Remote(_)));
}

#[tokio::test]
async fn test_unreachable_address_rejects_with_connection_error() {
    let client = MilvusClient::new(unused_address().await).unwrap();

    let status = client.server_version().await.unwrap_err();
    assert!(
        matches!(status.code(), tonic::Code::Unavailable | tonic::Code::Unknown),
        "unexpected code {:?}",
        status.code()
    );
}

#[tokio::test]
async fn test_eager_connect_fails_fast() {
    let config = MilvusConfig::new(unused_address().await)
        .with_connect_timeout(Duration::from_millis(500));

    let err = MilvusClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, MilvusError::Connection(_)));
}

#[test]
#[should_panic]
fn test_construction_needs_a_runtime() {
    let _ = MilvusClient::new("127.0.0.1:19530");
}

#[tokio::test]
async fn test_zero_message_size_rejected_before_connecting() {
    let (fake, server, _client) = setup().await;
    let config = MilvusConfig::new(server.address()).with_max_message_size(0);

    let err = MilvusClient::from_config(&config).unwrap_err();
    assert!(matches!(err, MilvusError::Config(_)));

    let err = MilvusClient::connect(&config).await.unwrap_err();
    assert!(matches!(err, MilvusError::Config(_)));
    assert_eq!(fake.total_calls(), 0);
}

#[tokio::test]
async fn test_back_to_back_calls_settle_independently() {
    let (fake, _server, client) = setup().await;
    let started = Instant::now();

    let slow = client.cmd("sleep 400");
    let fast = client.cmd("echo fast");

    let fast = fast.await.unwrap();
    assert_eq!(fast.string_reply, "fast");
    // The fast reply did not wait behind the slow one
    assert!(started.elapsed() < Duration::from_millis(400));

    let slow = slow.await.unwrap();
    assert_eq!(slow.string_reply, "slept 400");
    assert_eq!(fake.calls("Cmd"), 2);
}

#[tokio::test]
async fn test_overlapping_calls_do_not_interfere() {
    let (fake, _server, client) = setup().await;

    let mut calls = tokio::task::JoinSet::new();
    for i in 0..16u64 {
        let call = client.cmd(format!("echo {i}"));
        calls.spawn(async move { (i, call.await) });
    }

    let mut seen = 0;
    while let Some(joined) = calls.join_next().await {
        let (i, reply) = joined.unwrap();
        assert_eq!(reply.unwrap().string_reply, i.to_string());
        seen += 1;
    }
    assert_eq!(seen, 16);
    assert_eq!(fake.calls("Cmd"), 16);
}

#[tokio::test]
async fn test_dropped_call_still_reaches_server() {
    let (fake, _server, client) = setup().await;

    drop(client.create_collection(CollectionSchema::new("fire_and_forget", 4, MetricType::L2)));

    for _ in 0..100 {
        if fake.collection_names().contains(&"fire_and_forget".to_string()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("dropped call never reached the server");
}

#[tokio::test]
async fn test_caller_can_race_a_timer() {
    let (_fake, _server, client) = setup().await;

    let raced = tokio::time::timeout(Duration::from_millis(50), client.cmd("sleep 500")).await;
    assert!(raced.is_err());
}

#[tokio::test]
async fn test_channel_request_timeout_rejects() {
    let fake = FakeMilvus::new();
    let server = TestServer::spawn(fake.clone()).await;
    let config = MilvusConfig::new(server.address()).with_request_timeout(Duration::from_millis(100));
    let client = MilvusClient::from_config(&config).unwrap();

    let status = client.cmd("sleep 1000").await.unwrap_err();
    assert!(
        matches!(status.code(), tonic::Code::DeadlineExceeded | tonic::Code::Cancelled),
        "unexpected code {:?}",
        status.code()
    );
}

#[tokio::test]
async fn test_headers_reach_server() {
    let fake = FakeMilvus::new();
    let server = TestServer::spawn(fake.clone()).await;
    let config = MilvusConfig::new(server.address())
        .with_token("s3cret")
        .with_client_name("client-tests");
    let client = MilvusClient::from_config(&config).unwrap();

    client.server_status().await.unwrap();
    client.server_status().await.unwrap();

    let recorded = fake.recorded("Cmd");
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer s3cret"));
    assert_eq!(recorded[0].client_name.as_deref(), Some("client-tests"));
    assert!(recorded[0].trace_id.is_some());
    assert_ne!(recorded[0].request_id, recorded[1].request_id);
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let (fake, _server, client) = setup().await;

    client.show_collections().await.unwrap();
    assert_eq!(fake.recorded("ShowCollections")[0].authorization, None);
}

#[tokio::test]
async fn test_call_by_marker_type() {
    let (fake, _server, client) = setup().await;

    let reply = client.call::<ops::Cmd>(Command::from("mode")).await.unwrap();
    assert_eq!(reply.string_reply, "CPU");
    assert_eq!(fake.requests::<Command>("Cmd"), vec![Command::from("mode")]);
}
