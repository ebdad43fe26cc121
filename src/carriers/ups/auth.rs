//! UPS OAuth Authenticator
//!
//! Client-credentials grant with expiry-aware token caching. The cached token
//! is owned by this authenticator alone; it is written only after a fully
//! successful fetch, so a partial token can never be observed.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use super::models::UpsTokenResponse;
use super::CARRIER_CODE;
use crate::carriers::http_client::HttpTransport;
use crate::carriers::traits::{CarrierError, CarrierResult};
use crate::config::UpsSettings;

/// Cached bearer credentials with absolute expiry
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// UPS OAuth client
pub struct UpsAuth {
    transport: Arc<HttpTransport>,
    settings: UpsSettings,
    cached: Mutex<Option<CachedToken>>,
}

impl UpsAuth {
    pub fn new(settings: UpsSettings, transport: Arc<HttpTransport>) -> Self {
        UpsAuth {
            transport,
            settings,
            cached: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, fetching fresh credentials only when the
    /// cache is empty or expired
    ///
    /// Expiry uses a strict comparison: a token expiring exactly now is
    /// already expired. Concurrent cold calls may both fetch (the guard is
    /// not held across the await); duplicate grants are carrier-tolerated
    /// and the last writer wins.
    pub async fn access_token(&self) -> CarrierResult<String> {
        {
            let cached = self.cached.lock();
            if let Some(token) = cached.as_ref() {
                if Utc::now() < token.expires_at {
                    return Ok(token.token.clone());
                }
            }
        }

        self.fetch_token().await
    }

    async fn fetch_token(&self) -> CarrierResult<String> {
        debug!(url = %self.settings.oauth_url, "Fetching UPS OAuth token");

        let credentials = BASE64.encode(format!(
            "{}:{}",
            self.settings.client_id, self.settings.client_secret
        ));

        let body = self
            .transport
            .post(&self.settings.oauth_url)
            .header("Authorization", &format!("Basic {credentials}"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await
            .map_err(|err| err.into_carrier_error(CARRIER_CODE))?;

        let parsed: UpsTokenResponse = serde_json::from_value(body).map_err(|err| {
            CarrierError::malformed(CARRIER_CODE, format!("Token response failed validation: {err}"))
        })?;

        let expires_at = Utc::now() + Duration::seconds(parsed.expires_in);
        info!(expires_in = parsed.expires_in, "UPS authentication successful");

        *self.cached.lock() = Some(CachedToken {
            token: parsed.access_token.clone(),
            expires_at,
        });

        Ok(parsed.access_token)
    }
}
