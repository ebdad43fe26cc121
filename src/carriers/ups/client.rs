//! UPS Carrier Client Implementation
//!
//! This module implements the `Carrier` trait for UPS, orchestrating the
//! authenticator, mapper and transport behind the uniform rating contract.
//!
//! API Docs: https://developer.ups.com/api/reference

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::auth::UpsAuth;
use super::mapper::UpsMapper;
use super::CARRIER_CODE;
use crate::carriers::http_client::HttpTransport;
use crate::carriers::traits::{Carrier, CarrierResult};
use crate::config::UpsSettings;
use crate::domain::{RateQuote, RateRequest};

/// UPS rating client
pub struct UpsCarrier {
    /// Shared HTTP transport
    transport: Arc<HttpTransport>,

    /// Token-caching OAuth client
    auth: UpsAuth,

    /// Rating endpoint
    rate_url: String,
}

impl UpsCarrier {
    /// Create a new UPS carrier instance
    pub fn new(settings: UpsSettings, transport: Arc<HttpTransport>) -> Self {
        let rate_url = settings.rate_url.clone();
        UpsCarrier {
            auth: UpsAuth::new(settings, Arc::clone(&transport)),
            transport,
            rate_url,
        }
    }
}

#[async_trait]
impl Carrier for UpsCarrier {
    fn code(&self) -> &'static str {
        CARRIER_CODE
    }

    fn name(&self) -> &'static str {
        "United Parcel Service"
    }

    async fn get_rates(&self, request: &RateRequest) -> CarrierResult<Vec<RateQuote>> {
        // Authentication completes before the rate call is issued; a stale or
        // absent token never reaches the rating endpoint
        let token = self.auth.access_token().await?;

        let payload = UpsMapper::map_rate_request(request);

        debug!(url = %self.rate_url, packages = request.packages.len(), "UPS rate request");

        let body = self
            .transport
            .post(&self.rate_url)
            .bearer_auth(&token)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| err.into_carrier_error(CARRIER_CODE))?;

        let quotes = UpsMapper::map_rate_response(body)?;
        debug!(quotes = quotes.len(), "UPS rate response mapped");

        Ok(quotes)
    }
}
