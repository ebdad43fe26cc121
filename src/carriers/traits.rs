//! Carrier trait definitions for shipping-rate integrations
//!
//! This module defines the contract that all carrier implementations must
//! follow. Each carrier (UPS, FedEx, etc.) implements the `Carrier` trait to
//! provide a unified interface for rate quoting, and maps its failures into
//! the shared `CarrierError` taxonomy.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::carriers::http_client::HttpTransport;
use crate::config::Settings;
use crate::domain::{RateQuote, RateRequest};

// ============================================================================
// Error Taxonomy
// ============================================================================

/// Closed set of carrier failure kinds
///
/// This taxonomy is the single vocabulary every carrier integration maps
/// into. Integrations may override retryability per occurrence but must not
/// invent new kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarrierErrorKind {
    /// Credentials rejected by the carrier (401/403-equivalent)
    AuthError,
    /// Upstream throttling (429-equivalent)
    RateLimited,
    /// Client-side malformed request (other 4xx)
    BadRequest,
    /// No response received (timeout, connection failure)
    NetworkError,
    /// Upstream server failure (5xx-equivalent or unclassified)
    UpstreamError,
    /// Response received but failed structural validation or mapping
    MalformedResponse,
}

impl CarrierErrorKind {
    /// Default retryability used when the transport adapter synthesizes the error
    pub fn default_retryable(&self) -> bool {
        match self {
            CarrierErrorKind::AuthError => false,
            CarrierErrorKind::RateLimited => true,
            CarrierErrorKind::BadRequest => false,
            CarrierErrorKind::NetworkError => true,
            CarrierErrorKind::UpstreamError => true,
            CarrierErrorKind::MalformedResponse => false,
        }
    }

    /// Stable wire label for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CarrierErrorKind::AuthError => "AUTH_ERROR",
            CarrierErrorKind::RateLimited => "RATE_LIMITED",
            CarrierErrorKind::BadRequest => "BAD_REQUEST",
            CarrierErrorKind::NetworkError => "NETWORK_ERROR",
            CarrierErrorKind::UpstreamError => "UPSTREAM_ERROR",
            CarrierErrorKind::MalformedResponse => "MALFORMED_RESPONSE",
        }
    }
}

impl std::fmt::Display for CarrierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only error type that crosses the `Carrier` boundary
///
/// Carries carrier identity so a multi-carrier caller can attribute failures.
/// `status`, when present, is diagnostic only; classification has already
/// happened.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("[{carrier}] {kind}: {message}")]
pub struct CarrierError {
    /// Failure classification
    pub kind: CarrierErrorKind,

    /// Carrier code the failure is attributed to (e.g., "UPS")
    pub carrier: String,

    /// Human-readable description
    pub message: String,

    /// Whether the same request may succeed if retried unmodified
    pub retryable: bool,

    /// Upstream HTTP status, when a response was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl CarrierError {
    /// Create an error with explicit retryability
    pub fn new(
        kind: CarrierErrorKind,
        carrier: impl Into<String>,
        message: impl Into<String>,
        retryable: bool,
        status: Option<u16>,
    ) -> Self {
        CarrierError {
            kind,
            carrier: carrier.into(),
            message: message.into(),
            retryable,
            status,
        }
    }

    /// Create an error using the kind's default retryability
    pub fn classified(
        kind: CarrierErrorKind,
        carrier: impl Into<String>,
        message: impl Into<String>,
        status: Option<u16>,
    ) -> Self {
        let retryable = kind.default_retryable();
        Self::new(kind, carrier, message, retryable, status)
    }

    /// Shorthand for the mapping-failure case
    pub fn malformed(carrier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::classified(CarrierErrorKind::MalformedResponse, carrier, message, None)
    }
}

/// Result type for carrier operations
pub type CarrierResult<T> = Result<T, CarrierError>;

// ============================================================================
// Carrier Trait
// ============================================================================

/// Carrier contract for shipping-rate integrations
///
/// All carrier implementations expose the same rate-quoting interface. A
/// `get_rates` call performs at most two network operations (authenticate,
/// then rate) and resolves to normalized quotes or a single `CarrierError`.
#[async_trait]
pub trait Carrier: Send + Sync {
    /// Carrier code (e.g., "UPS")
    fn code(&self) -> &'static str;

    /// Carrier display name (e.g., "United Parcel Service")
    fn name(&self) -> &'static str;

    /// Fetch rate quotes for a validated request
    ///
    /// Quotes preserve the order of the carrier's rated shipments. Every
    /// failure path yields exactly one `CarrierError`.
    async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>>;
}

// ============================================================================
// Carrier Factory
// ============================================================================

/// Factory for creating carrier instances
pub struct CarrierFactory;

impl CarrierFactory {
    /// Create a carrier instance by code
    ///
    /// Settings are passed in explicitly; carrier constructors never read the
    /// environment themselves. Returns None for an unknown code.
    pub fn create(
        code: &str,
        settings: &Settings,
        transport: Arc<HttpTransport>,
    ) -> Option<Box<dyn Carrier>> {
        match code {
            "ups" => Some(Box::new(crate::carriers::ups::UpsCarrier::new(
                settings.ups.clone(),
                transport,
            ))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpsSettings;

    fn test_settings() -> Settings {
        Settings {
            ups: UpsSettings {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                oauth_url: "https://ups.test/oauth".to_string(),
                rate_url: "https://ups.test/rate".to_string(),
            },
        }
    }

    #[test]
    fn test_default_retryability() {
        assert!(!CarrierErrorKind::AuthError.default_retryable());
        assert!(CarrierErrorKind::RateLimited.default_retryable());
        assert!(!CarrierErrorKind::BadRequest.default_retryable());
        assert!(CarrierErrorKind::NetworkError.default_retryable());
        assert!(CarrierErrorKind::UpstreamError.default_retryable());
        assert!(!CarrierErrorKind::MalformedResponse.default_retryable());
    }

    #[test]
    fn test_classified_uses_default_retryability() {
        let err = CarrierError::classified(CarrierErrorKind::RateLimited, "UPS", "throttled", Some(429));
        assert!(err.retryable);
        assert_eq!(err.status, Some(429));
    }

    #[test]
    fn test_error_display() {
        let err = CarrierError::malformed("UPS", "missing RatedShipment");
        assert_eq!(err.to_string(), "[UPS] MALFORMED_RESPONSE: missing RatedShipment");
    }

    #[test]
    fn test_kind_wire_label() {
        let json = serde_json::to_value(CarrierErrorKind::AuthError).unwrap();
        assert_eq!(json, serde_json::json!("AUTH_ERROR"));
    }

    #[test]
    fn test_factory_known_code() {
        let transport = Arc::new(HttpTransport::new());
        let carrier = CarrierFactory::create("ups", &test_settings(), transport).unwrap();
        assert_eq!(carrier.code(), "UPS");
    }

    #[test]
    fn test_factory_unknown_code() {
        let transport = Arc::new(HttpTransport::new());
        assert!(CarrierFactory::create("fedex", &test_settings(), transport).is_none());
    }
}
