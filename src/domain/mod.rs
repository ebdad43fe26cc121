//! Domain types and models

pub mod rate;

pub use rate::{Address, Package, RateQuote, RateRequest, ValidationError};
