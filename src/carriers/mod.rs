//! Carrier Integration Module
//!
//! This module provides a unified interface for requesting shipping rates
//! from heterogeneous carrier APIs like UPS, FedEx, and DHL.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────────────────┐
//!                  │   Carrier Trait   │
//!                  └─────────┬─────────┘
//!                            │
//!            ┌───────────────┼───────────────┐
//!            │               │               │
//!        ┌───┴───┐       ┌───┴───┐       ┌───┴───┐
//!        │  UPS  │       │ FedEx │       │  DHL  │
//!        └───────┘       └───────┘       └───────┘
//! ```
//!
//! Every integration is three collaborators behind the trait: an
//! authenticator (token acquisition and caching), a mapper (domain ↔ wire
//! translation), and the shared transport adapter (one POST, classified
//! failures).

pub mod http_client;
pub mod traits;
pub mod ups;

// Re-export commonly used types
pub use http_client::{HttpTransport, TransportError};
pub use traits::{
    Carrier,
    CarrierError,
    CarrierErrorKind,
    CarrierFactory,
    CarrierResult,
};
pub use ups::UpsCarrier;
