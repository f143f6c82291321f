//! Integration tests for framing and connection lifetime: pipelined input,
//! terminators, oversized requests and the idle timeout.

mod common;

use common::{TestClient, TestServer, wait_for};
use rendezvous::config::Config;
use std::time::Duration;

fn config_with(max_line: usize, idle_timeout_secs: u64) -> Config {
    let mut config = Config::default();
    config.limits.max_line = max_line;
    config.limits.idle_timeout_secs = idle_timeout_secs;
    config
}

#[tokio::test]
async fn test_pipelined_requests_answered_in_order() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();

    client
        .send_raw(b"connect alice 10.0.0.1 1\r\nget_list\r\nget_info alice\r\n")
        .await
        .unwrap();

    assert_eq!(client.recv().await.unwrap(), "confirm_connection");
    assert_eq!(client.recv().await.unwrap(), "list alice");
    let info = client.recv().await.unwrap();
    assert!(info.starts_with("info 10.0.0.1 1 127.0.0.1 "), "{info}");
}

#[tokio::test]
async fn test_request_split_across_writes() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();

    client.send_raw(b"conn").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    client.send_raw(b"ect alice 10.0.0.1 ").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    client.send_raw(b"1\r\n").await.unwrap();

    assert_eq!(client.recv().await.unwrap(), "confirm_connection");
}

#[tokio::test]
async fn test_blank_lines_produce_no_reply() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();

    client.send_raw(b"\r\n   \r\n\t\n").await.unwrap();
    client
        .expect_silence(Duration::from_millis(100))
        .await
        .unwrap();

    assert_eq!(
        client.request("get_list").await.unwrap(),
        "<NOT REGISTERED USER>"
    );
}

#[tokio::test]
async fn test_lf_and_tab_terminate_requests() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();

    client.send_raw(b"connect alice 10.0.0.1 1\n").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "confirm_connection");

    // A tab ends the request, so "extra" is a request of its own.
    client.send_raw(b"get_list\textra\n").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "list alice");
    assert_eq!(client.recv().await.unwrap(), "<INVALID REQUEST COMMAND>");
}

#[tokio::test]
async fn test_leading_whitespace_is_skipped() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();

    client
        .send_raw(b"  \r\n  connect alice 10.0.0.1 1\r\n")
        .await
        .unwrap();
    assert_eq!(client.recv().await.unwrap(), "confirm_connection");
}

#[tokio::test]
async fn test_oversized_request_closes_connection() {
    let server = TestServer::spawn_with(config_with(64, 0)).await.unwrap();
    let mut client = TestClient::connect(server.address()).await.unwrap();
    assert_eq!(
        client.request("connect alice 10.0.0.1 1").await.unwrap(),
        "confirm_connection"
    );

    let long = format!("get_info {}", "x".repeat(100));
    client.send_raw(long.as_bytes()).await.unwrap();
    client.expect_closed().await.unwrap();

    let registry = server.registry();
    assert!(wait_for(Duration::from_secs(5), || registry.is_empty()).await);
}

#[tokio::test]
async fn test_list_truncated_to_line_capacity() {
    let server = TestServer::spawn_with(config_with(64, 0)).await.unwrap();
    let mut clients = Vec::new();
    for i in 0..10 {
        let name = format!("client{i:02}");
        clients.push(
            TestClient::connect_as(server.address(), &name, "10.0.0.1:1")
                .await
                .unwrap(),
        );
    }

    let reply = clients[0].request("get_list").await.unwrap();
    // 62 bytes of text plus CRLF fit 64.
    assert!(reply.len() <= 62, "{reply}");
    assert_eq!(reply, "list client00 client01 client02 client03 client04 client05");
}

#[tokio::test]
async fn test_idle_connection_is_closed() {
    let server = TestServer::spawn_with(config_with(1024, 1)).await.unwrap();
    let mut client = TestClient::connect_as(server.address(), "sleepy", "10.0.0.1:1")
        .await
        .unwrap();

    client.expect_closed().await.unwrap();
    let registry = server.registry();
    assert!(wait_for(Duration::from_secs(5), || registry.is_empty()).await);
}

#[tokio::test]
async fn test_activity_resets_idle_timer() {
    let server = TestServer::spawn_with(config_with(1024, 1)).await.unwrap();
    let mut client = TestClient::connect_as(server.address(), "busy", "10.0.0.1:1")
        .await
        .unwrap();

    for _ in 0..3 {
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(client.request("get_list").await.unwrap(), "list busy");
    }
}

#[tokio::test]
async fn test_endpoint_tracked_while_connected() {
    let server = TestServer::spawn().await.unwrap();
    let client = TestClient::connect(server.address()).await.unwrap();

    let registry = server.registry();
    assert!(wait_for(Duration::from_secs(5), || registry.connection_count() == 1).await);
    let session = registry
        .lookup_endpoint(&client.local_addr())
        .expect("session indexed by endpoint");
    assert!(!session.is_registered());

    drop(client);
    assert!(wait_for(Duration::from_secs(5), || registry.connection_count() == 0).await);
}
