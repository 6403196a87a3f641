//! In-process gRPC server for client tests

use std::net::SocketAddr;

use protos::milvus::milvus_service_server::MilvusServiceServer;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::fake::FakeMilvus;

/// A [`FakeMilvus`] served on an ephemeral localhost port
///
/// The server stops when this is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::{FakeMilvus, TestServer};
///
/// # async fn example() {
/// let fake = FakeMilvus::new();
/// let server = TestServer::spawn(fake.clone()).await;
///
/// // point a client at server.address()
/// assert_eq!(fake.calls("Cmd"), 0);
/// # }
/// ```
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TestServer {
    pub async fn spawn(fake: FakeMilvus) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");
        let addr = listener.local_addr().expect("Failed to read test server address");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let result = Server::builder()
                .add_service(MilvusServiceServer::new(fake))
                .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async {
                    shutdown_rx.await.ok();
                })
                .await;
            if let Err(e) = result {
                tracing::error!(error = %e, "Test server failed");
            }
        });

        tracing::debug!(%addr, "Test Milvus server listening");

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `host:port`, the form Milvus addresses are configured in
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    pub fn uri(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop serving and wait for the server task to finish
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A localhost address nothing is listening on
///
/// Binds an ephemeral port and releases it right away.
pub async fn unused_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe socket");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);
    addr.to_string()
}
