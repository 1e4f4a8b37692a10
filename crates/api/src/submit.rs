// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound request construction.
//!
//! Serializes a draft quotation for the backend creation endpoint and
//! builds status-update requests. Lifecycle legality is enforced here;
//! the quotation store's status setter stays a generic, total operation.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{CreateQuotationRequest, QuotationItemPayload, StatusUpdateRequest};
use freight_quote::DraftQuotation;
use freight_quote_domain::{QuotationId, QuotationStatus, validate_status_transition};

/// Builds a quotation-creation request from the active draft.
///
/// The draft is read, not consumed; the store remains the owner of the
/// state and observes the submission result only through orchestration.
#[must_use]
pub fn build_quotation_request(draft: &DraftQuotation) -> CreateQuotationRequest {
    let items: Vec<QuotationItemPayload> = draft
        .items
        .iter()
        .map(|item| QuotationItemPayload {
            vehicle_id: item.offer.vehicle_id.value().to_string(),
            quantity: item.quantity,
            unit_total: item.offer.total.amount(),
            line_total: item.line_total().amount(),
        })
        .collect();

    CreateQuotationRequest {
        quotation_id: draft.id.value().to_string(),
        vendor_id: draft.vendor.id.value().to_string(),
        vendor_name: draft.vendor.name.clone(),
        items,
        total_amount: draft.total_amount.amount(),
        status: draft.status.as_str().to_string(),
        search: draft.search_params.clone(),
        created_at: draft.created_at,
    }
}

/// Builds a status-update request, gated on lifecycle legality.
///
/// # Arguments
///
/// * `quotation_id` - The quotation to update
/// * `current` - The quotation's current status
/// * `requested` - The requested status
///
/// # Returns
///
/// * `Ok(StatusUpdateRequest)` if the transition is permitted
/// * `Err(ApiError)` otherwise
///
/// # Errors
///
/// Returns an error if the lifecycle does not permit moving from
/// `current` to `requested`.
pub fn build_status_update(
    quotation_id: &QuotationId,
    current: QuotationStatus,
    requested: QuotationStatus,
) -> Result<StatusUpdateRequest, ApiError> {
    validate_status_transition(current, requested).map_err(translate_domain_error)?;

    Ok(StatusUpdateRequest {
        quotation_id: quotation_id.value().to_string(),
        status: requested.as_str().to_string(),
    })
}
