//! Token validation against a mocked API

#![cfg(not(target_arch = "wasm32"))]

use sneakerdesk_frontend_common::session::{MemoryTokenStore, Session, TokenStore};
use sneakerdesk_http::SneakerClient;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_validate_without_token_skips_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = SneakerClient::new(mock_server.uri()).unwrap();
    let session = Session::new(MemoryTokenStore::new());

    assert!(!session.validate_token(&client).await);
}

#[tokio::test]
async fn test_accepted_token_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer good"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SneakerClient::new(mock_server.uri()).unwrap();
    let store = MemoryTokenStore::with_token("good");
    let session = Session::new(store.clone());

    assert!(session.validate_token(&client).await);
    assert_eq!(session.token().as_deref(), Some("good"));
    assert_eq!(store.load().as_deref(), Some("good"));
}

#[tokio::test]
async fn test_rejected_token_is_cleared() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_string("jwt expired"))
        .mount(&mock_server)
        .await;

    let client = SneakerClient::new(mock_server.uri()).unwrap();
    let store = MemoryTokenStore::with_token("stale");
    let session = Session::new(store.clone());

    assert!(!session.validate_token(&client).await);
    assert_eq!(session.token(), None);
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn test_server_error_also_clears_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = SneakerClient::new(mock_server.uri()).unwrap();
    let store = MemoryTokenStore::with_token("abc");
    let session = Session::new(store.clone());

    assert!(!session.validate_token(&client).await);
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn test_unreachable_api_clears_token() {
    let client = SneakerClient::new("http://127.0.0.1:9").unwrap();
    let store = MemoryTokenStore::with_token("abc");
    let session = Session::new(store.clone());

    assert!(!session.validate_token(&client).await);
    assert!(!session.is_authenticated());
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn test_late_rejection_keeps_token_adopted_meanwhile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SneakerClient::new(mock_server.uri()).unwrap();
    let store = MemoryTokenStore::with_token("stale");
    let session = Session::new(store.clone());

    let login = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.set_token("fresh");
    };
    let (valid, ()) = tokio::join!(session.validate_token(&client), login);

    assert!(!valid);
    assert_eq!(session.token().as_deref(), Some("fresh"));
    assert_eq!(store.load().as_deref(), Some("fresh"));
}
