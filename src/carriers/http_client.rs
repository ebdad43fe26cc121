//! HTTP Transport Adapter for Carrier APIs
//!
//! This module wraps the async HTTP client behind a small POST-oriented
//! surface and classifies every transport-level failure into the shared
//! carrier error taxonomy. Classification is carrier-agnostic; carrier
//! identity is attached by the caller via `into_carrier_error`.

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::carriers::traits::{CarrierError, CarrierErrorKind};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How much of an upstream error body to keep in messages
const BODY_SNIPPET_LEN: usize = 500;

// ============================================================================
// Transport Error
// ============================================================================

/// A classified transport failure, not yet attributed to a carrier
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// Failure classification
    pub kind: CarrierErrorKind,

    /// Retryability per the kind's default
    pub retryable: bool,

    /// Upstream HTTP status, when a response was received
    pub status: Option<u16>,

    /// Human-readable description
    pub message: String,
}

impl TransportError {
    fn classified(kind: CarrierErrorKind, message: String, status: Option<u16>) -> Self {
        TransportError {
            kind,
            retryable: kind.default_retryable(),
            status,
            message,
        }
    }

    /// No response was received at all
    fn network(err: &reqwest::Error) -> Self {
        Self::classified(
            CarrierErrorKind::NetworkError,
            format!("Network error while contacting carrier: {err}"),
            None,
        )
    }

    /// Non-success status, classified in order: auth, throttle, client, upstream
    fn from_status(status: u16) -> Self {
        let (kind, message) = match status {
            401 | 403 => (CarrierErrorKind::AuthError, "Authentication with carrier failed"),
            429 => (CarrierErrorKind::RateLimited, "Carrier rate limit exceeded"),
            400..=499 => (CarrierErrorKind::BadRequest, "Invalid request sent to carrier"),
            _ => (CarrierErrorKind::UpstreamError, "Carrier service unavailable"),
        };
        Self::classified(kind, message.to_string(), Some(status))
    }

    /// A body arrived but could not be parsed
    fn malformed(err: &reqwest::Error) -> Self {
        Self::classified(
            CarrierErrorKind::MalformedResponse,
            format!("Carrier response body is not valid JSON: {err}"),
            None,
        )
    }

    /// Attach carrier identity, producing the error that crosses the
    /// `Carrier` boundary
    pub fn into_carrier_error(self, carrier: impl Into<String>) -> CarrierError {
        CarrierError::new(self.kind, carrier, self.message, self.retryable, self.status)
    }
}

// ============================================================================
// Transport
// ============================================================================

/// HTTP transport shared by all carrier integrations
///
/// Performs one POST per call; retry and backoff are a caller concern.
/// Timeout policy lives here and nowhere else in the pipeline.
pub struct HttpTransport {
    /// Inner HTTP client
    client: Client,
}

impl HttpTransport {
    /// Create a transport with default timeouts
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("shiprate/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        HttpTransport { client }
    }

    /// Build a POST request
    pub fn post(&self, url: &str) -> TransportRequestBuilder {
        TransportRequestBuilder {
            builder: self.client.post(url),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Request builder wrapper that classifies failures on send
pub struct TransportRequestBuilder {
    builder: RequestBuilder,
}

impl TransportRequestBuilder {
    /// Add a header to the request
    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Add a bearer token header
    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: serde::Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.builder = self.builder.json(json);
        self
    }

    /// Add a raw string body (e.g., form-encoded credentials)
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.builder = self.builder.body(body.into());
        self
    }

    /// Send the request and return the parsed JSON body
    ///
    /// Classification order, first match wins: no response, 401/403, 429,
    /// other 4xx, everything else non-success. A 2xx body that fails JSON
    /// decoding classifies as MALFORMED_RESPONSE.
    pub async fn send(self) -> Result<Value, TransportError> {
        let response = match self.builder.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "No response from carrier endpoint");
                return Err(TransportError::network(&err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(BODY_SNIPPET_LEN).collect();
            warn!(status = status.as_u16(), body = %snippet, "Carrier returned error status");
            return Err(TransportError::from_status(status.as_u16()));
        }

        debug!(status = status.as_u16(), "Carrier response received");

        response.json::<Value>().await.map_err(|err| TransportError::malformed(&err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_status_classification() {
        for status in [401, 403] {
            let err = TransportError::from_status(status);
            assert_eq!(err.kind, CarrierErrorKind::AuthError);
            assert!(!err.retryable);
            assert_eq!(err.status, Some(status));
        }
    }

    #[test]
    fn test_rate_limit_classification() {
        let err = TransportError::from_status(429);
        assert_eq!(err.kind, CarrierErrorKind::RateLimited);
        assert!(err.retryable);
    }

    #[test]
    fn test_client_error_classification() {
        let err = TransportError::from_status(422);
        assert_eq!(err.kind, CarrierErrorKind::BadRequest);
        assert!(!err.retryable);
    }

    #[test]
    fn test_server_error_classification() {
        for status in [500, 502, 503] {
            let err = TransportError::from_status(status);
            assert_eq!(err.kind, CarrierErrorKind::UpstreamError);
            assert!(err.retryable);
        }
    }

    #[test]
    fn test_unclassified_status_is_upstream() {
        // Exhausted redirects surface their 3xx status here
        let err = TransportError::from_status(301);
        assert_eq!(err.kind, CarrierErrorKind::UpstreamError);
    }

    #[test]
    fn test_into_carrier_error_attaches_identity() {
        let err = TransportError::from_status(429).into_carrier_error("UPS");
        assert_eq!(err.carrier, "UPS");
        assert_eq!(err.kind, CarrierErrorKind::RateLimited);
        assert!(err.retryable);
        assert_eq!(err.status, Some(429));
    }
}
