//! UPS to Domain Model Mapper
//!
//! Pure translation between the carrier-agnostic rating domain and the UPS
//! wire format. Response mapping validates the payload shape first and fails
//! with MALFORMED_RESPONSE on any mismatch; a quote is never partially built.

use serde_json::Value;

use super::models::*;
use super::CARRIER_CODE;
use crate::carriers::traits::{CarrierError, CarrierResult};
use crate::domain::{Package, RateQuote, RateRequest};

/// UPS packaging type "Customer Supplied Package"
const PACKAGING_TYPE_CODE: &str = "02";

/// Dimension unit code: centimeters
const DIMENSION_UNIT_CODE: &str = "CM";

/// Weight unit code: kilograms
const WEIGHT_UNIT_CODE: &str = "KGS";

/// Mapper for the UPS Rating API
pub struct UpsMapper;

impl UpsMapper {
    /// Map a domain rate request to the UPS rating payload
    pub fn map_rate_request(request: &RateRequest) -> UpsRateRequest {
        UpsRateRequest {
            rate_request: UpsRateRequestBody {
                shipment: UpsShipment {
                    shipper: UpsParty {
                        address: UpsAddress {
                            postal_code: request.origin.postal_code.clone(),
                            country_code: request.origin.country_code.clone(),
                        },
                    },
                    ship_to: UpsParty {
                        address: UpsAddress {
                            postal_code: request.destination.postal_code.clone(),
                            country_code: request.destination.country_code.clone(),
                        },
                    },
                    packages: request.packages.iter().map(Self::map_package).collect(),
                },
            },
        }
    }

    /// Map one parcel; UPS expects stringified metric values
    fn map_package(package: &Package) -> UpsPackage {
        UpsPackage {
            packaging_type: UpsCode::new(PACKAGING_TYPE_CODE),
            dimensions: UpsDimensions {
                unit_of_measurement: UpsCode::new(DIMENSION_UNIT_CODE),
                length: package.length_cm.to_string(),
                width: package.width_cm.to_string(),
                height: package.height_cm.to_string(),
            },
            package_weight: UpsWeight {
                unit_of_measurement: UpsCode::new(WEIGHT_UNIT_CODE),
                weight: package.weight_kg.to_string(),
            },
        }
    }

    /// Map a UPS rating response body to ordered domain quotes
    ///
    /// An empty RatedShipment array maps to an empty vec, not an error.
    pub fn map_rate_response(body: Value) -> CarrierResult<Vec<RateQuote>> {
        let parsed: UpsRateResponse = serde_json::from_value(body).map_err(|err| {
            CarrierError::malformed(CARRIER_CODE, format!("Rate response failed validation: {err}"))
        })?;

        parsed
            .rate_response
            .rated_shipments
            .into_iter()
            .map(Self::map_rated_shipment)
            .collect()
    }

    fn map_rated_shipment(shipment: UpsRatedShipment) -> CarrierResult<RateQuote> {
        let amount = shipment.total_charges.monetary_value.parse::<f64>().map_err(|_| {
            CarrierError::malformed(
                CARRIER_CODE,
                format!(
                    "Unparsable monetary value {:?}",
                    shipment.total_charges.monetary_value
                ),
            )
        })?;

        // Transit days only exist inside a guaranteed-delivery block; absent
        // means unknown, never zero
        let estimated_delivery_days = shipment
            .guaranteed_delivery
            .and_then(|delivery| delivery.business_days_in_transit)
            .map(|days| {
                days.parse::<u32>().map_err(|_| {
                    CarrierError::malformed(
                        CARRIER_CODE,
                        format!("Unparsable transit days {days:?}"),
                    )
                })
            })
            .transpose()?;

        Ok(RateQuote {
            carrier: CARRIER_CODE.to_string(),
            service: shipment.service.label().to_string(),
            amount,
            currency: shipment.total_charges.currency_code,
            estimated_delivery_days,
        })
    }
}
