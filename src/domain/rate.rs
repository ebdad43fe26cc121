//! Carrier-Agnostic Rating Domain Models
//!
//! These models normalize shipping-rate inputs and outputs across carriers
//! (UPS, FedEx, etc.) into a consistent internal format. Carrier wire shapes
//! never leak past the per-carrier mapper; everything upstream speaks these
//! types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted postal code length
const MIN_POSTAL_CODE_LEN: usize = 3;

/// ISO 3166-1 alpha-2 country code length
const COUNTRY_CODE_LEN: usize = 2;

// ============================================================================
// Validation Errors
// ============================================================================

/// Domain validation errors
///
/// Raised at the boundary when a request is constructed, before any carrier
/// is involved. Distinct from `CarrierError`: a request that fails here never
/// reaches a carrier integration.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("postal code must be at least {MIN_POSTAL_CODE_LEN} characters, got {0:?}")]
    PostalCodeTooShort(String),

    #[error("country code must be exactly {COUNTRY_CODE_LEN} characters, got {0:?}")]
    InvalidCountryCode(String),

    #[error("package {field} must be a positive number, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("rate request must contain at least one package")]
    NoPackages,
}

// ============================================================================
// Address
// ============================================================================

/// Postal address, reduced to the fields rating APIs require
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Postal/ZIP code
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 country code (e.g., "US")
    pub country_code: String,

    /// City name (optional; not all carriers use it for rating)
    pub city: Option<String>,

    /// State or province code
    pub state: Option<String>,
}

impl Address {
    /// Create a validated address from the required fields
    pub fn new(postal_code: impl Into<String>, country_code: impl Into<String>) -> Result<Self, ValidationError> {
        let address = Address {
            postal_code: postal_code.into(),
            country_code: country_code.into(),
            city: None,
            state: None,
        };
        address.validate()?;
        Ok(address)
    }

    /// Attach a city name
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Attach a state/province code
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Check the address invariants
    ///
    /// Used for values that arrive through deserialization rather than `new`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.postal_code.len() < MIN_POSTAL_CODE_LEN {
            return Err(ValidationError::PostalCodeTooShort(self.postal_code.clone()));
        }
        if self.country_code.len() != COUNTRY_CODE_LEN {
            return Err(ValidationError::InvalidCountryCode(self.country_code.clone()));
        }
        Ok(())
    }
}

// ============================================================================
// Package
// ============================================================================

/// Physical parcel dimensions in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Weight in kilograms
    pub weight_kg: f64,

    /// Length in centimeters
    pub length_cm: f64,

    /// Width in centimeters
    pub width_cm: f64,

    /// Height in centimeters
    pub height_cm: f64,
}

impl Package {
    /// Create a validated package; every dimension must be strictly positive
    pub fn new(weight_kg: f64, length_cm: f64, width_cm: f64, height_cm: f64) -> Result<Self, ValidationError> {
        let package = Package {
            weight_kg,
            length_cm,
            width_cm,
            height_cm,
        };
        package.validate()?;
        Ok(package)
    }

    /// Check the package invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("weight_kg", self.weight_kg),
            ("length_cm", self.length_cm),
            ("width_cm", self.width_cm),
            ("height_cm", self.height_cm),
        ] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ValidationError::NonPositiveDimension { field, value });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Rate Request
// ============================================================================

/// A shipping-rate inquiry: one origin, one destination, one or more packages
///
/// Constructed by the caller, validated once at the boundary, then consumed
/// by exactly one carrier call. Package order is preserved through mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Where the shipment originates
    pub origin: Address,

    /// Where the shipment is going
    pub destination: Address,

    /// Parcels in the shipment, in caller order
    pub packages: Vec<Package>,
}

impl RateRequest {
    /// Create a validated rate request
    pub fn new(origin: Address, destination: Address, packages: Vec<Package>) -> Result<Self, ValidationError> {
        let request = RateRequest {
            origin,
            destination,
            packages,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the request and all nested invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.origin.validate()?;
        self.destination.validate()?;
        if self.packages.is_empty() {
            return Err(ValidationError::NoPackages);
        }
        for package in &self.packages {
            package.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Rate Quote
// ============================================================================

/// Normalized priced service offer from a carrier
///
/// Produced only by a carrier mapper from a validated response; a quote is
/// either fully populated or the whole response mapping fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    /// Carrier code (e.g., "UPS")
    pub carrier: String,

    /// Service label; human description when the carrier provides one,
    /// otherwise the service code
    pub service: String,

    /// Total charge amount
    pub amount: f64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Business days in transit, when the carrier guarantees delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_days: Option<u32>,
}
