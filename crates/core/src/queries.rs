// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{DraftQuotation, QuotationState};
use freight_quote_domain::{Money, VehicleId, VehicleOffer};

/// Advisory result of a selectability check.
///
/// `selectable` is always true: the vendor lock surfaces as a conflict at
/// the moment of the actual add, never as a blocked button. The advisory
/// lets the presentation layer pre-warn on a cross-vendor candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionAdvice {
    /// Whether the offer may be selected. Always true.
    pub selectable: bool,
    /// Pre-warning for a cross-vendor candidate, naming both vendors.
    pub advisory: Option<String>,
}

/// Checks if the active draft contains a line item for the vehicle.
#[must_use]
pub fn is_vehicle_selected(state: &QuotationState, vehicle_id: &VehicleId) -> bool {
    state
        .draft
        .as_ref()
        .is_some_and(|draft| draft.contains_vehicle(vehicle_id))
}

/// Sum of quantities across the active draft's line items; 0 without a
/// draft.
#[must_use]
pub fn selected_vehicle_count(state: &QuotationState) -> u32 {
    state
        .draft
        .as_ref()
        .map_or(0, DraftQuotation::quantity_sum)
}

/// The active draft's total amount; zero without a draft.
#[must_use]
pub fn total_quotation_amount(state: &QuotationState) -> Money {
    state
        .draft
        .as_ref()
        .map_or(Money::ZERO, |draft| draft.total_amount)
}

/// Reports whether an offer is selectable, with an advisory message when
/// its vendor differs from the active draft's vendor.
///
/// Purely informational: the authoritative decision is made by the
/// vendor-lock policy when the add is actually dispatched.
#[must_use]
pub fn can_select_vehicle(state: &QuotationState, offer: &VehicleOffer) -> SelectionAdvice {
    let advisory: Option<String> = state.draft.as_ref().and_then(|draft| {
        if draft.vendor.id == offer.vendor.id {
            None
        } else {
            Some(format!(
                "Your current quotation is with {}. Selecting this vehicle will start a new quotation with {}.",
                draft.vendor.name, offer.vendor.name
            ))
        }
    });
    SelectionAdvice {
        selectable: true,
        advisory,
    }
}
