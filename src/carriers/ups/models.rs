//! UPS API Wire Models
//!
//! These models represent the JSON payloads exchanged with the UPS OAuth and
//! Rating APIs. Response structs deserialize strictly; a missing required
//! field fails decoding and surfaces as MALFORMED_RESPONSE in the mapper.

use serde::{Deserialize, Serialize};

// ============================================================================
// OAuth
// ============================================================================

/// UPS OAuth token response
#[derive(Debug, Deserialize)]
pub struct UpsTokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

// ============================================================================
// Rate Request Payload
// ============================================================================

/// Top-level rating payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsRateRequest {
    pub rate_request: UpsRateRequestBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsRateRequestBody {
    pub shipment: UpsShipment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsShipment {
    pub shipper: UpsParty,
    pub ship_to: UpsParty,
    /// UPS uses a singular key for the package array
    #[serde(rename = "Package")]
    pub packages: Vec<UpsPackage>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsParty {
    pub address: UpsAddress,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsAddress {
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsPackage {
    pub packaging_type: UpsCode,
    pub dimensions: UpsDimensions,
    pub package_weight: UpsWeight,
}

/// Coded value wrapper used throughout UPS payloads
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsCode {
    pub code: String,
}

impl UpsCode {
    pub fn new(code: impl Into<String>) -> Self {
        UpsCode { code: code.into() }
    }
}

/// Package dimensions; UPS expects stringified numbers
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsDimensions {
    pub unit_of_measurement: UpsCode,
    pub length: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsWeight {
    pub unit_of_measurement: UpsCode,
    pub weight: String,
}

// ============================================================================
// Rate Response
// ============================================================================

/// Top-level rating response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsRateResponse {
    pub rate_response: UpsRateResponseBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsRateResponseBody {
    /// Singular key, array value, per the UPS schema
    #[serde(rename = "RatedShipment")]
    pub rated_shipments: Vec<UpsRatedShipment>,
}

/// One priced service option
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsRatedShipment {
    pub service: UpsService,
    pub total_charges: UpsTotalCharges,
    pub guaranteed_delivery: Option<UpsGuaranteedDelivery>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsService {
    pub code: String,
    pub description: Option<String>,
}

impl UpsService {
    /// Human description when present, service code otherwise
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.code)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsTotalCharges {
    /// Stringified decimal, e.g. "15.50"
    pub monetary_value: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsGuaranteedDelivery {
    pub business_days_in_transit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_label_prefers_description() {
        let service = UpsService {
            code: "03".to_string(),
            description: Some("UPS Ground".to_string()),
        };
        assert_eq!(service.label(), "UPS Ground");
    }

    #[test]
    fn test_service_label_falls_back_to_code() {
        let service = UpsService {
            code: "03".to_string(),
            description: None,
        };
        assert_eq!(service.label(), "03");
    }

    #[test]
    fn test_token_response_rejects_missing_fields() {
        let result: Result<UpsTokenResponse, _> =
            serde_json::from_value(serde_json::json!({ "access_token": "tok" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_response_rejects_wrong_shape() {
        let result: Result<UpsRateResponse, _> =
            serde_json::from_value(serde_json::json!({ "invalid": "structure" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_response_parses_minimal_shipment() {
        let response: UpsRateResponse = serde_json::from_value(serde_json::json!({
            "RateResponse": {
                "RatedShipment": [{
                    "Service": { "Code": "03" },
                    "TotalCharges": { "MonetaryValue": "15.50", "CurrencyCode": "USD" }
                }]
            }
        }))
        .unwrap();
        let shipment = &response.rate_response.rated_shipments[0];
        assert_eq!(shipment.service.code, "03");
        assert!(shipment.guaranteed_delivery.is_none());
    }
}
