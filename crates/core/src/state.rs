// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freight_quote_domain::{
    Money, QuotationId, QuotationStatus, SearchParams, VehicleId, VehicleOffer, Vendor,
};
use time::OffsetDateTime;

/// One vehicle offer plus a requested quantity within a draft quotation.
///
/// Quantity is the only mutable field and is never below 1; an item that
/// should reach quantity 0 must be removed instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationLineItem {
    /// The selected offer.
    pub offer: VehicleOffer,
    /// Requested number of vehicles of this offer.
    pub quantity: u32,
    /// When the offer was first selected.
    pub selected_at: OffsetDateTime,
}

impl QuotationLineItem {
    /// Creates a new line item at quantity 1.
    #[must_use]
    pub const fn new(offer: VehicleOffer, now: OffsetDateTime) -> Self {
        Self {
            offer,
            quantity: 1,
            selected_at: now,
        }
    }

    /// The item's contribution to the draft total: unit total × quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.offer.total.scale(self.quantity)
    }
}

/// The single in-progress quotation.
///
/// Invariant: every line item's offer belongs to `vendor`. A quotation is
/// ultimately submitted as a single negotiable offer to one vendor, so a
/// mixed-vendor draft has no valid representation downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuotation {
    /// The quotation's identifier.
    pub id: QuotationId,
    /// The vendor this draft is locked to.
    pub vendor: Vendor,
    /// Line items in order of addition, never re-sorted.
    pub items: Vec<QuotationLineItem>,
    /// Sum of `line_total` over all items.
    pub total_amount: Money,
    /// Lifecycle status.
    pub status: QuotationStatus,
    /// When the draft was created.
    pub created_at: OffsetDateTime,
    /// When the draft was last mutated.
    pub updated_at: OffsetDateTime,
    /// Snapshot of the search that produced the offers, if one was set.
    pub search_params: Option<SearchParams>,
}

impl DraftQuotation {
    /// Creates a new draft owned by the offer's vendor, containing one
    /// line item at quantity 1.
    ///
    /// The identifier is derived from `now` so that creation stays
    /// deterministic under an injected clock.
    #[must_use]
    pub fn new(offer: VehicleOffer, search_params: Option<SearchParams>, now: OffsetDateTime) -> Self {
        let id: QuotationId = QuotationId::new(&format!("qtn-{}", now.unix_timestamp_nanos()));
        let vendor: Vendor = offer.vendor.clone();
        let item: QuotationLineItem = QuotationLineItem::new(offer, now);
        let total_amount: Money = item.line_total();
        Self {
            id,
            vendor,
            items: vec![item],
            total_amount,
            status: QuotationStatus::Draft,
            created_at: now,
            updated_at: now,
            search_params,
        }
    }

    /// Checks if a vehicle is present as a line item.
    #[must_use]
    pub fn contains_vehicle(&self, vehicle_id: &VehicleId) -> bool {
        self.items.iter().any(|item| &item.offer.vehicle_id == vehicle_id)
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn quantity_sum(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Recomputes `total_amount` from the current line items.
    pub(crate) fn recompute_total(&mut self) {
        self.total_amount = self
            .items
            .iter()
            .fold(Money::ZERO, |acc, item| acc.add(item.line_total()));
    }
}

/// The ephemeral record of a cross-vendor selection awaiting resolution.
///
/// At most one exists at a time; a second cross-vendor add replaces it
/// (last-write-wins). Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVendorSwitch {
    /// The offer that triggered the conflict.
    pub offer: VehicleOffer,
    /// The vendor the user would switch to.
    pub vendor: Vendor,
}

impl PendingVendorSwitch {
    /// Creates a pending switch for the given conflicting offer.
    #[must_use]
    pub fn new(offer: VehicleOffer) -> Self {
        let vendor: Vendor = offer.vendor.clone();
        Self { offer, vendor }
    }
}

/// The complete quotation store state.
///
/// All mutation flows through [`crate::apply`]; nothing outside the core
/// writes these fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuotationState {
    /// The search criteria behind the current result set, if any.
    pub search_params: Option<SearchParams>,
    /// The single active draft quotation, if any.
    pub draft: Option<DraftQuotation>,
    /// Completed or superseded quotations, append-only.
    pub history: Vec<DraftQuotation>,
    /// Cross-vendor conflict awaiting user resolution, if any.
    pub pending_switch: Option<PendingVendorSwitch>,
    /// Orchestration error slot; the reducer itself never sets it.
    pub error: Option<String>,
}

impl QuotationState {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            search_params: None,
            draft: None,
            history: Vec::new(),
            pending_switch: None,
            error: None,
        }
    }
}
