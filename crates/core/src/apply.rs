// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::policy::{AddDecision, decide_add};
use crate::state::{DraftQuotation, PendingVendorSwitch, QuotationLineItem, QuotationState};
use freight_quote_domain::VehicleOffer;
use time::OffsetDateTime;

/// Applies an action to the current state, producing the next state.
///
/// The transition is pure and total: it performs no I/O, never fails, and
/// applies atomically (no partial application is observable). Illegal
/// combinations degrade to no-ops. Every action clears the orchestration
/// error slot except [`Action::SetError`], which owns it.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `action` - The action to apply
/// * `now` - The instant used for any timestamps the action touches
#[must_use]
pub fn apply(state: &QuotationState, action: Action, now: OffsetDateTime) -> QuotationState {
    let mut next: QuotationState = state.clone();
    if !matches!(action, Action::SetError { .. }) {
        next.error = None;
    }

    match action {
        Action::SetSearchParams { params } => {
            // Wholesale replacement; draft and history are untouched.
            next.search_params = Some(params);
        }
        Action::UpdateSearchParams { update } => {
            if let Some(params) = &next.search_params {
                next.search_params = Some(params.merge(&update));
            }
        }
        Action::AddVehicle { offer } => {
            add_vehicle(&mut next, offer, now);
        }
        Action::RemoveVehicle { vehicle_id } => {
            let emptied: bool = match next.draft.as_mut() {
                Some(draft) => {
                    let count_before: usize = draft.items.len();
                    draft.items.retain(|item| item.offer.vehicle_id != vehicle_id);
                    if draft.items.len() != count_before {
                        draft.recompute_total();
                        draft.updated_at = now;
                    }
                    draft.items.is_empty()
                }
                None => false,
            };
            // A draft emptied by removal is discarded, not left as a shell.
            if emptied {
                next.draft = None;
            }
        }
        Action::UpdateQuantity {
            vehicle_id,
            quantity,
        } => {
            if let Some(draft) = next.draft.as_mut() {
                let clamped: u32 = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
                if let Some(item) = draft
                    .items
                    .iter_mut()
                    .find(|item| item.offer.vehicle_id == vehicle_id)
                {
                    item.quantity = clamped;
                    draft.recompute_total();
                    draft.updated_at = now;
                }
            }
        }
        Action::ConfirmVendorSwitch => {
            if let Some(pending) = next.pending_switch.take() {
                if let Some(superseded) = next.draft.take() {
                    next.history.push(superseded);
                }
                next.draft = Some(DraftQuotation::new(
                    pending.offer,
                    next.search_params.clone(),
                    now,
                ));
            }
        }
        Action::CancelVendorSwitch => {
            // The candidate offer is dropped; the draft is untouched.
            next.pending_switch = None;
        }
        Action::ClearQuotation => {
            // Explicit abandon: no history entry.
            next.draft = None;
        }
        Action::SaveToHistory => {
            if let Some(draft) = next.draft.take() {
                next.history.push(draft);
            }
        }
        Action::UpdateStatus {
            quotation_id,
            status,
        } => {
            if let Some(entry) = next
                .history
                .iter_mut()
                .find(|quotation| quotation.id == quotation_id)
            {
                entry.status = status;
                entry.updated_at = now;
            }
        }
        Action::SetError { message } => {
            next.error = message;
        }
    }

    next
}

/// Applies an add attempt under the vendor-lock policy.
///
/// A conflicting add never mutates the draft; it records (or replaces,
/// last-write-wins) the pending vendor switch instead.
fn add_vehicle(state: &mut QuotationState, offer: VehicleOffer, now: OffsetDateTime) {
    match decide_add(state.draft.as_ref(), &offer) {
        AddDecision::StartDraft => {
            state.draft = Some(DraftQuotation::new(offer, state.search_params.clone(), now));
        }
        AddDecision::MergeIntoDraft => {
            if let Some(draft) = state.draft.as_mut() {
                match draft
                    .items
                    .iter_mut()
                    .find(|item| item.offer.vehicle_id == offer.vehicle_id)
                {
                    Some(item) => {
                        item.quantity = item.quantity.saturating_add(1);
                    }
                    None => {
                        draft.items.push(QuotationLineItem::new(offer, now));
                    }
                }
                draft.recompute_total();
                draft.updated_at = now;
            }
        }
        AddDecision::VendorConflict => {
            state.pending_switch = Some(PendingVendorSwitch::new(offer));
        }
    }
}
