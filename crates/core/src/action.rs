// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freight_quote_domain::{
    QuotationId, QuotationStatus, SearchParams, SearchParamsUpdate, VehicleId, VehicleOffer,
};

/// An action represents presentation-layer intent as data only.
///
/// Actions are the only way to request state changes. Every action is
/// total: combinations that make no sense in the current state (removing
/// from an absent draft, confirming with no pending switch) degrade to
/// no-ops, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the search parameters wholesale.
    SetSearchParams {
        /// The new search parameters.
        params: SearchParams,
    },
    /// Shallow-merge a partial update into the current search parameters.
    /// No-op when no parameters are set.
    UpdateSearchParams {
        /// The fields to change.
        update: SearchParamsUpdate,
    },
    /// Add a vehicle offer to the draft quotation, subject to the
    /// vendor-lock policy.
    AddVehicle {
        /// The offer to add.
        offer: VehicleOffer,
    },
    /// Remove a vehicle's line item from the draft. A draft emptied by
    /// removal is discarded entirely.
    RemoveVehicle {
        /// The vehicle to remove.
        vehicle_id: VehicleId,
    },
    /// Set a line item's quantity, clamped to a minimum of 1.
    UpdateQuantity {
        /// The vehicle whose line item to update.
        vehicle_id: VehicleId,
        /// The requested quantity; values below 1 clamp to 1.
        quantity: i64,
    },
    /// Resolve the pending vendor switch by moving the current draft to
    /// history and starting a new draft for the pending offer.
    ConfirmVendorSwitch,
    /// Resolve the pending vendor switch by dropping the candidate offer;
    /// the current draft is untouched.
    CancelVendorSwitch,
    /// Discard the current draft silently, without a history entry.
    ClearQuotation,
    /// Append the current draft to history and discard it.
    SaveToHistory,
    /// Update the status of a history entry by id. Never touches the
    /// live draft.
    UpdateStatus {
        /// The history entry to update.
        quotation_id: QuotationId,
        /// The new status.
        status: QuotationStatus,
    },
    /// Set or clear the orchestration error slot. This is the only action
    /// that does not clear a previously set error.
    SetError {
        /// The error message, or `None` to clear.
        message: Option<String>,
    },
}
