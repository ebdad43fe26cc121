//! UPS Carrier Module
//!
//! Provides integration with the UPS OAuth and Rating APIs: token-caching
//! authentication, domain/wire mapping, and normalized failure
//! classification.
//!
//! API Documentation: https://developer.ups.com/api/reference

mod auth;
mod client;
mod mapper;
mod models;

/// Carrier code attached to every quote and error from this integration
pub const CARRIER_CODE: &str = "UPS";

pub use client::UpsCarrier;
