//! Tests for the NextDNS HTTP client against a mock API.

mod helpers;

use helpers::{mount_profiles, rewrite_json, test_config, PROFILE_ID, TEST_API_KEY};
use nextdns_rewrites::api::{NextDnsClient, ProfileResolver, RewriteRepository};
use nextdns_rewrites::initialization::init_client;
use nextdns_rewrites::{ApiError, FailurePolicy, RewriteSpec};
use serde_json::json;
use std::path::PathBuf;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NextDnsClient {
    let config = test_config(
        PathBuf::from("unused.yaml"),
        &server.uri(),
        FailurePolicy::Continue,
    );
    let http = init_client(&config, TEST_API_KEY).expect("Failed to build client");
    NextDnsClient::new(http, server.uri())
}

#[tokio::test]
async fn test_resolve_profile_by_name() {
    let server = MockServer::start().await;
    mount_profiles(&server, &[("xyz789", "Office"), (PROFILE_ID, "Home")]).await;

    let client = client_for(&server);
    let profile = client
        .resolve_profile("Home")
        .await
        .expect("lookup should succeed")
        .expect("profile should exist");

    assert_eq!(profile.id, PROFILE_ID);
    assert_eq!(profile.name, "Home");
}

#[tokio::test]
async fn test_resolve_profile_missing_returns_none() {
    let server = MockServer::start().await;
    mount_profiles(&server, &[(PROFILE_ID, "Home")]).await;

    let client = client_for(&server);
    let profile = client.resolve_profile("Cabin").await.unwrap();
    assert!(profile.is_none());
}

#[tokio::test]
async fn test_invalid_api_key_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "code": "unauthorized", "detail": "Invalid API key" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.resolve_profile("Home").await.unwrap_err();
    match err {
        ApiError::Authentication { status, detail } => {
            assert_eq!(status, 401);
            assert!(detail.contains("Invalid API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_list_rewrites() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/profiles/{}/rewrites", PROFILE_ID)))
        .and(header("X-Api-Key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                rewrite_json("r1", "example.com", "1.1.1.1"),
                { "id": "r2", "name": "example.org", "type": "CNAME", "content": "example.com" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rewrites = client.list_rewrites(PROFILE_ID).await.unwrap();

    assert_eq!(rewrites.len(), 2);
    assert_eq!(rewrites[1].id, "r2");
    assert_eq!(rewrites[1].record_type.as_deref(), Some("CNAME"));
}

#[tokio::test]
async fn test_create_rewrite_posts_name_and_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/profiles/{}/rewrites", PROFILE_ID)))
        .and(body_json(json!({ "name": "example.com", "content": "1.1.1.1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": rewrite_json("new1", "example.com", "1.1.1.1")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .create_rewrite(PROFILE_ID, &RewriteSpec::new("example.com", "1.1.1.1"))
        .await
        .unwrap();

    assert_eq!(created.id, "new1");
    assert_eq!(created.name, "example.com");
}

#[tokio::test]
async fn test_create_rewrite_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/profiles/{}/rewrites", PROFILE_ID)))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{ "code": "invalid", "source": { "pointer": "/content" } }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .create_rewrite(PROFILE_ID, &RewriteSpec::new("example.com", "???"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
}

#[tokio::test]
async fn test_delete_rewrite_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/profiles/{}/rewrites/old1", PROFILE_ID)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_rewrite(PROFILE_ID, "old1").await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_rewrite_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/profiles/{}/rewrites/gone", PROFILE_ID)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": "notFound" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.delete_rewrite(PROFILE_ID, "gone").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/profiles/{}/rewrites", PROFILE_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_rewrites(PROFILE_ID).await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    mount_profiles(&server, &[(PROFILE_ID, "Home")]).await;

    let config = test_config(
        PathBuf::from("unused.yaml"),
        &server.uri(),
        FailurePolicy::Continue,
    );
    let http = init_client(&config, TEST_API_KEY).unwrap();
    let client = NextDnsClient::new(http, format!("{}/", server.uri()));

    assert!(client.resolve_profile("Home").await.unwrap().is_some());
}
