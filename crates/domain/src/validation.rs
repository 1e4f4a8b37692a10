// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::QuotationStatus;
use crate::types::{SearchParams, VehicleOffer};

/// Validates that an offer's basic field constraints are met.
///
/// This is a boundary check applied once when an offer is ingested from
/// the wire. The quotation core trusts offers without revalidating.
///
/// # Arguments
///
/// * `offer` - The offer to validate
///
/// # Returns
///
/// * `Ok(())` if the offer's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The vehicle identifier is empty
/// - The vendor identifier or name is empty
/// - The total price is not strictly positive
pub fn validate_offer_fields(offer: &VehicleOffer) -> Result<(), DomainError> {
    // Rule: vehicle id must not be empty
    if offer.vehicle_id.value().is_empty() {
        return Err(DomainError::InvalidVehicle(String::from(
            "Vehicle identifier cannot be empty",
        )));
    }

    // Rule: vendor id must not be empty
    if offer.vendor.id.value().is_empty() {
        return Err(DomainError::InvalidVendor(String::from(
            "Vendor identifier cannot be empty",
        )));
    }

    // Rule: vendor name must not be empty
    if offer.vendor.name.is_empty() {
        return Err(DomainError::InvalidVendor(String::from(
            "Vendor name cannot be empty",
        )));
    }

    // Rule: total price must be strictly positive
    if !offer.total.is_positive() {
        return Err(DomainError::InvalidAmount {
            amount: offer.total.amount(),
        });
    }

    Ok(())
}

/// Validates that search parameters are internally consistent.
///
/// # Arguments
///
/// * `params` - The search parameters to validate
///
/// # Returns
///
/// * `Ok(())` if the parameters are consistent
/// * `Err(DomainError)` if any rule is violated
///
/// # Errors
///
/// Returns an error if:
/// - Origin or destination is empty
/// - Origin and destination are identical
/// - Weight is zero
/// - The drop date precedes the pickup date
pub fn validate_search_params(params: &SearchParams) -> Result<(), DomainError> {
    if params.origin.is_empty() || params.destination.is_empty() {
        return Err(DomainError::InvalidSearchParams(String::from(
            "Origin and destination cannot be empty",
        )));
    }

    if params.origin == params.destination {
        return Err(DomainError::InvalidSearchParams(String::from(
            "Origin and destination cannot be the same",
        )));
    }

    if params.weight == 0 {
        return Err(DomainError::InvalidWeight(String::from(
            "Weight must be greater than 0",
        )));
    }

    if params.drop_date < params.pickup_date {
        return Err(DomainError::InvalidSearchParams(String::from(
            "Drop date cannot precede pickup date",
        )));
    }

    Ok(())
}

/// Validates that a status transition is permitted by the lifecycle.
///
/// # Arguments
///
/// * `from` - The current status
/// * `to` - The requested status
///
/// # Returns
///
/// * `Ok(())` if the transition is valid
/// * `Err(DomainError::InvalidStatusTransition)` otherwise
///
/// # Errors
///
/// Returns an error if the lifecycle does not permit moving from `from`
/// to `to`.
pub fn validate_status_transition(
    from: QuotationStatus,
    to: QuotationStatus,
) -> Result<(), DomainError> {
    if !from.can_transition_to(to) {
        return Err(DomainError::InvalidStatusTransition { from, to });
    }
    Ok(())
}
