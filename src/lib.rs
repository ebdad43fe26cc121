//! Shiprate
//!
//! Carrier-abstraction layer that normalizes shipping-rate requests against
//! heterogeneous third-party carrier APIs into a uniform quote format, while
//! handling authentication, request/response mapping, and failure
//! classification per carrier.

pub mod carriers;
pub mod config;
pub mod domain;

pub use carriers::{
    Carrier, CarrierError, CarrierErrorKind, CarrierFactory, CarrierResult, HttpTransport,
};
pub use config::Settings;
pub use domain::{Address, Package, RateQuote, RateRequest, ValidationError};
