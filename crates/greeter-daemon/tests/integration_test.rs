//! Integration tests for the greeter service.
//!
//! These tests validate the complete workflow over a real loopback
//! server: validated requests through dispatch to greeting responses,
//! and rejected requests surfacing as INVALID_ARGUMENT.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::time::sleep;

use greeter_client::GreeterClient;
use greeter_service::pb::Profile;
use greeter_service::run_server_with_shutdown;

/// Test harness that manages daemon lifecycle.
struct TestHarness {
    endpoint: String,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    _server_handle: tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
}

impl TestHarness {
    /// Create a new test harness with a running server.
    async fn new(port: u16) -> Self {
        let addr: SocketAddr = format!("127.0.0.1:{}", port).parse().unwrap();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let server_handle = tokio::spawn(async move {
            run_server_with_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .await
        });

        // Wait for server to start
        sleep(Duration::from_millis(200)).await;

        let endpoint = format!("http://127.0.0.1:{}", port);

        Self {
            endpoint,
            shutdown_tx: Some(shutdown_tx),
            _server_handle: server_handle,
        }
    }

    /// Create a client connected to this harness.
    async fn client(&self) -> GreeterClient {
        // Retry connection a few times
        for _ in 0..5 {
            match GreeterClient::connect(&self.endpoint).await {
                Ok(client) => return client,
                Err(_) => sleep(Duration::from_millis(100)).await,
            }
        }
        panic!("Failed to connect to server at {}", self.endpoint);
    }
}

impl Drop for TestHarness {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_say_hello_end_to_end() {
    let harness = TestHarness::new(50120).await;
    let mut client = harness.client().await;

    let message = client.say_hello("World", None).await.unwrap();
    assert_eq!(message, "Hello World");
}

#[tokio::test]
async fn test_say_hello_with_profile_end_to_end() {
    let harness = TestHarness::new(50121).await;
    let mut client = harness.client().await;

    let profile = Profile {
        locale: "fr".to_string(),
        formality: 2,
    };
    let message = client.say_hello("Ada", Some(profile)).await.unwrap();
    assert_eq!(message, "Bonjour Ada.");
}

#[tokio::test]
async fn test_invalid_request_rejected_over_the_wire() {
    let harness = TestHarness::new(50122).await;
    let mut client = harness.client().await;

    let err = client.say_hello("", None).await.unwrap_err();
    match err {
        greeter_client::ClientError::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::InvalidArgument);
            assert!(status.message().contains("name"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_violations_listed_per_field() {
    let harness = TestHarness::new(50123).await;
    let mut client = harness.client().await;

    let profile = Profile {
        locale: "???".to_string(),
        formality: 5,
    };
    let err = client.say_hello("", Some(profile)).await.unwrap_err();
    match err {
        greeter_client::ClientError::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::InvalidArgument);
            let message = status.message().to_string();
            assert!(message.contains("name"));
            assert!(message.contains("profile.locale"));
            assert!(message.contains("profile.formality"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_batch_end_to_end_preserves_order() {
    let harness = TestHarness::new(50124).await;
    let mut client = harness.client().await;

    let names = vec!["Ada".to_string(), "Grace".to_string(), "Edsger".to_string()];
    let messages = client.say_hello_batch(&names, None).await.unwrap();
    assert_eq!(messages, vec!["Hello Ada", "Hello Grace", "Hello Edsger"]);
}

#[tokio::test]
async fn test_batch_rejects_bad_entry_with_index() {
    let harness = TestHarness::new(50125).await;
    let mut client = harness.client().await;

    let names = vec!["Ada".to_string(), "42".to_string()];
    let err = client.say_hello_batch(&names, None).await.unwrap_err();
    match err {
        greeter_client::ClientError::Rpc(status) => {
            assert_eq!(status.code(), tonic::Code::InvalidArgument);
            assert!(status.message().contains("names[1]"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_same_request_same_outcome() {
    let harness = TestHarness::new(50126).await;
    let mut client = harness.client().await;

    let first = client.say_hello("World", None).await.unwrap();
    let second = client.say_hello("World", None).await.unwrap();
    assert_eq!(first, second);
}
