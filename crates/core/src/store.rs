// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::apply::apply;
use crate::queries::{
    SelectionAdvice, can_select_vehicle, is_vehicle_selected, selected_vehicle_count,
    total_quotation_amount,
};
use crate::state::QuotationState;
use freight_quote_domain::{Money, VehicleId, VehicleOffer};
use time::OffsetDateTime;

/// An owned handle over the quotation state.
///
/// Single writer, synchronous apply: each dispatched action runs to
/// completion before the next is accepted, in issue order. The handle is
/// passed explicitly to whatever composes the presentation layer; there
/// is no global singleton. Cross-tab or multi-writer sharing is out of
/// scope and has no defined merge semantics.
#[derive(Debug, Clone, Default)]
pub struct QuotationStore {
    state: QuotationState,
}

impl QuotationStore {
    /// Creates a store with empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: QuotationState::new(),
        }
    }

    /// Applies an action using the wall clock.
    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(action, OffsetDateTime::now_utc());
    }

    /// Applies an action at an injected instant.
    ///
    /// Timestamps in the resulting state derive from `now`, which keeps
    /// transitions reproducible under test.
    pub fn dispatch_at(&mut self, action: Action, now: OffsetDateTime) {
        self.state = apply(&self.state, action, now);
    }

    /// Read access to the full state tree.
    #[must_use]
    pub const fn state(&self) -> &QuotationState {
        &self.state
    }

    /// Checks if the active draft contains a line item for the vehicle.
    #[must_use]
    pub fn is_vehicle_selected(&self, vehicle_id: &VehicleId) -> bool {
        is_vehicle_selected(&self.state, vehicle_id)
    }

    /// Sum of quantities across the active draft's line items.
    #[must_use]
    pub fn selected_vehicle_count(&self) -> u32 {
        selected_vehicle_count(&self.state)
    }

    /// The active draft's total amount; zero without a draft.
    #[must_use]
    pub fn total_quotation_amount(&self) -> Money {
        total_quotation_amount(&self.state)
    }

    /// Advisory selectability check for an offer.
    #[must_use]
    pub fn can_select_vehicle(&self, offer: &VehicleOffer) -> SelectionAdvice {
        can_select_vehicle(&self.state, offer)
    }
}
