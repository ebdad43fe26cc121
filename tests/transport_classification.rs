//! Transport adapter classification tests
//!
//! The adapter is carrier-agnostic: the status→kind mapping must hold no
//! matter which integration sits on top, and carrier identity is attached
//! only when the caller converts the failure.

use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

use shiprate::carriers::{CarrierErrorKind, HttpTransport};

async fn classify_status(status: u16) -> shiprate::carriers::TransportError {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/endpoint");
            then.status(status).body("upstream body");
        })
        .await;

    HttpTransport::new()
        .post(&server.url("/endpoint"))
        .json(&json!({}))
        .send()
        .await
        .unwrap_err()
}

#[tokio::test]
async fn status_classification_table() {
    for (status, kind, retryable) in [
        (401, CarrierErrorKind::AuthError, false),
        (403, CarrierErrorKind::AuthError, false),
        (429, CarrierErrorKind::RateLimited, true),
        (404, CarrierErrorKind::BadRequest, false),
        (422, CarrierErrorKind::BadRequest, false),
        (500, CarrierErrorKind::UpstreamError, true),
        (502, CarrierErrorKind::UpstreamError, true),
    ] {
        let err = classify_status(status).await;
        assert_eq!(err.kind, kind, "status {status}");
        assert_eq!(err.retryable, retryable, "status {status}");
        assert_eq!(err.status, Some(status), "status {status}");
    }
}

#[tokio::test]
async fn classification_is_carrier_independent() {
    let err = classify_status(401).await;
    let for_ups = shiprate::carriers::TransportError {
        kind: err.kind,
        retryable: err.retryable,
        status: err.status,
        message: err.message.clone(),
    }
    .into_carrier_error("UPS");
    let for_fedex = err.into_carrier_error("FedEx");

    assert_eq!(for_ups.kind, CarrierErrorKind::AuthError);
    assert_eq!(for_fedex.kind, CarrierErrorKind::AuthError);
    assert_eq!(for_ups.carrier, "UPS");
    assert_eq!(for_fedex.carrier, "FedEx");
    assert_eq!(for_ups.retryable, for_fedex.retryable);
}

#[tokio::test]
async fn successful_response_returns_parsed_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/endpoint");
            then.status(200).json_body(json!({ "ok": true }));
        })
        .await;

    let body = HttpTransport::new()
        .post(&server.url("/endpoint"))
        .json(&json!({ "ping": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn non_json_success_body_is_malformed_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/endpoint");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let err = HttpTransport::new()
        .post(&server.url("/endpoint"))
        .json(&json!({}))
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.kind, CarrierErrorKind::MalformedResponse);
    assert!(!err.retryable);
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn no_response_is_network_error() {
    let err = HttpTransport::with_timeout(Duration::from_secs(2))
        .post("http://127.0.0.1:9/endpoint")
        .json(&json!({}))
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.kind, CarrierErrorKind::NetworkError);
    assert!(err.retryable);
    assert_eq!(err.status, None);
}
