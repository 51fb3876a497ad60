//! Integration tests for the Confab client basics

use std::sync::Arc;

use confab_client::types::{OtpChannel, VerifyOtpParams};
use confab_client::{ConfabClient, ClientError, MemorySessionStore, Session, SessionStore};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn builder_trims_trailing_slash() {
    let client = ConfabClient::builder()
        .base_url("http://localhost:8080/")
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = ConfabClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn bearer_header_matches_the_stored_token() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::with_session(Session::new(
        "tok-xyz", "ref-xyz", None,
    )));

    Mock::given(method("GET"))
        .and(path("/track"))
        .and(header("authorization", "Bearer tok-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ConfabClient::builder()
        .base_url(server.uri())
        .session_store(store)
        .build()
        .unwrap();

    assert!(client.list_tracks().await.is_ok());
}

#[tokio::test]
async fn anonymous_requests_carry_no_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/request-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "sent" })))
        .mount(&server)
        .await;

    let client = ConfabClient::new(server.uri()).unwrap();
    let params = confab_client::types::RequestOtpParams {
        recipient: "ada@confab.example".into(),
        channel: OtpChannel::Email,
        country_code: None,
    };
    client.request_otp(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn verify_otp_stores_the_issued_session() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "refresh_token": "ref-1",
            "user": {
                "id": "u1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@confab.example",
                "role": "organizer"
            }
        })))
        .mount(&server)
        .await;

    let client = ConfabClient::builder()
        .base_url(server.uri())
        .session_store(store.clone())
        .build()
        .unwrap();

    let params = VerifyOtpParams {
        recipient: "ada@confab.example".into(),
        channel: OtpChannel::Email,
        country_code: None,
        code: "123456".into(),
    };
    let session = client.verify_otp(&params).await.unwrap();
    assert!(session.is_authenticated());

    let stored = store.load().await.unwrap();
    assert_eq!(stored.access_token, "tok-1");
    assert_eq!(stored.user.unwrap().email, "ada@confab.example");
}

#[tokio::test]
async fn verify_otp_without_a_user_is_malformed() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-1",
            "refresh_token": "ref-1"
        })))
        .mount(&server)
        .await;

    let client = ConfabClient::builder()
        .base_url(server.uri())
        .session_store(store.clone())
        .build()
        .unwrap();

    let params = VerifyOtpParams {
        recipient: "ada@confab.example".into(),
        channel: OtpChannel::Email,
        country_code: None,
        code: "123456".into(),
    };
    let result = client.verify_otp(&params).await;
    assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
    assert!(store.load().await.is_none());
}

#[tokio::test]
async fn verify_otp_with_empty_tokens_is_malformed() {
    let server = MockServer::start().await;
    let store = Arc::new(MemorySessionStore::new());

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "",
            "refresh_token": "ref-1",
            "user": {
                "id": "u1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@confab.example",
                "role": "organizer"
            }
        })))
        .mount(&server)
        .await;

    let client = ConfabClient::builder()
        .base_url(server.uri())
        .session_store(store.clone())
        .build()
        .unwrap();

    let params = VerifyOtpParams {
        recipient: "ada@confab.example".into(),
        channel: OtpChannel::Email,
        country_code: None,
        code: "123456".into(),
    };
    let result = client.verify_otp(&params).await;
    assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
    assert!(store.load().await.is_none());
}

#[tokio::test]
async fn error_envelope_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/track/7"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "track id must be positive",
            "statusCode": 400
        })))
        .mount(&server)
        .await;

    let client = ConfabClient::new(server.uri()).unwrap();
    match client.track(7).await {
        Err(ClientError::BadRequest(message)) => {
            assert_eq!(message, "track id must be positive");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn non_envelope_error_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/track"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = ConfabClient::new(server.uri()).unwrap();
    match client.list_tracks().await {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_resource_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/location/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "location not found",
            "statusCode": 404
        })))
        .mount(&server)
        .await;

    let client = ConfabClient::new(server.uri()).unwrap();
    assert!(matches!(
        client.location(42).await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn unexpected_success_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = ConfabClient::new(server.uri()).unwrap();
    assert!(matches!(
        client.profile().await,
        Err(ClientError::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn sign_out_discards_the_session() {
    let store = Arc::new(MemorySessionStore::with_session(Session::new(
        "tok-1", "ref-1", None,
    )));
    let client = ConfabClient::builder()
        .base_url("http://localhost:8080")
        .session_store(store.clone())
        .build()
        .unwrap();

    client.sign_out().await;
    assert!(store.load().await.is_none());
    assert!(client.session().await.is_none());
}
