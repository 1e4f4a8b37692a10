// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::DraftQuotation;
use freight_quote_domain::VehicleOffer;

/// The outcome of the vendor-lock decision for an add attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddDecision {
    /// No draft exists; start one owned by the offer's vendor.
    StartDraft,
    /// The draft exists and shares the offer's vendor; merge the offer in.
    MergeIntoDraft,
    /// The draft belongs to a different vendor; the add must be suspended
    /// behind a pending vendor switch.
    VendorConflict,
}

/// Decides how an add attempt interacts with the vendor lock.
///
/// This is the authoritative decision, made at the moment of the actual
/// add. The advisory in [`crate::queries::can_select_vehicle`] pre-warns
/// but never blocks.
#[must_use]
pub fn decide_add(draft: Option<&DraftQuotation>, offer: &VehicleOffer) -> AddDecision {
    match draft {
        None => AddDecision::StartDraft,
        Some(draft) if draft.vendor.id == offer.vendor.id => AddDecision::MergeIntoDraft,
        Some(_) => AddDecision::VendorConflict,
    }
}
