// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Offer ingestion from the remote truck-search endpoint.
//!
//! Converts wire rows into domain offers without mutating any state. A
//! bad row never fails the batch; it is reported alongside the rows that
//! ingested cleanly.

use crate::error::{ApiError, translate_domain_error};
use crate::price::{PriceParseError, parse_display_amount};
use crate::request_response::VehicleOfferDto;
use freight_quote_domain::{
    Money, PriceBreakdown, VehicleId, VehicleOffer, Vendor, validate_offer_fields,
};

/// One rejected row from a bulk ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOffer {
    /// The row number (1-based).
    pub row_number: usize,
    /// Why the row was rejected.
    pub error: ApiError,
}

/// Result of a bulk offer ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferIngestReport {
    /// Offers that ingested cleanly, in input order.
    pub offers: Vec<VehicleOffer>,
    /// Rows that were rejected, with their errors.
    pub rejected: Vec<RejectedOffer>,
    /// Total number of input rows.
    pub total_rows: usize,
}

impl OfferIngestReport {
    /// Number of rows that ingested cleanly.
    #[must_use]
    pub const fn accepted_count(&self) -> usize {
        self.offers.len()
    }

    /// Number of rows that were rejected.
    #[must_use]
    pub const fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Parses one display-formatted price field.
fn parse_price_field(raw: &str, field: &str) -> Result<Money, ApiError> {
    parse_display_amount(raw).map_err(|err: PriceParseError| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })
}

/// Converts one wire row into a domain offer.
///
/// All four price strings are parsed here, once. The stated total stays
/// authoritative even when the breakdown components do not sum to it;
/// such rows are accepted with a warning.
///
/// # Arguments
///
/// * `dto` - The wire row to convert
///
/// # Returns
///
/// * `Ok(VehicleOffer)` if the row is valid
/// * `Err(ApiError)` if a price fails to parse or a field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - Any price string fails to parse
/// - The offer fails domain field validation
pub fn ingest_offer(dto: &VehicleOfferDto) -> Result<VehicleOffer, ApiError> {
    let total: Money = parse_price_field(&dto.total_price, "total_price")?;
    let breakdown: PriceBreakdown = PriceBreakdown {
        route_charge: parse_price_field(&dto.route_charge, "route_charge")?,
        weight_charge: parse_price_field(&dto.weight_charge, "weight_charge")?,
        delivery_charge: parse_price_field(&dto.delivery_charge, "delivery_charge")?,
    };

    if breakdown.component_sum() != total {
        tracing::warn!(
            "Offer {} breakdown sums to {} but stated total is {}; keeping stated total",
            dto.vehicle_id,
            breakdown.component_sum().amount(),
            total.amount()
        );
    }

    let offer: VehicleOffer = VehicleOffer {
        vehicle_id: VehicleId::new(&dto.vehicle_id),
        vendor: Vendor::new(&dto.vendor_id, &dto.vendor_name),
        model: dto.model.clone(),
        vehicle_type: dto.vehicle_type.clone(),
        capacity: dto.capacity.clone(),
        registration: dto.registration.clone(),
        total,
        breakdown,
    };

    validate_offer_fields(&offer).map_err(translate_domain_error)?;

    Ok(offer)
}

/// Converts a batch of wire rows into domain offers.
///
/// Rejected rows are reported individually; the batch itself never
/// fails.
#[must_use]
pub fn ingest_offers(rows: &[VehicleOfferDto]) -> OfferIngestReport {
    let mut offers: Vec<VehicleOffer> = Vec::with_capacity(rows.len());
    let mut rejected: Vec<RejectedOffer> = Vec::new();

    for (index, dto) in rows.iter().enumerate() {
        match ingest_offer(dto) {
            Ok(offer) => offers.push(offer),
            Err(error) => rejected.push(RejectedOffer {
                row_number: index + 1,
                error,
            }),
        }
    }

    OfferIngestReport {
        offers,
        rejected,
        total_rows: rows.len(),
    }
}
