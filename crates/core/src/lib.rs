// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod apply;
mod policy;
mod queries;
mod state;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use action::Action;
pub use apply::apply;
pub use policy::{AddDecision, decide_add};
pub use queries::{
    SelectionAdvice, can_select_vehicle, is_vehicle_selected, selected_vehicle_count,
    total_quotation_amount,
};
pub use state::{DraftQuotation, PendingVendorSwitch, QuotationLineItem, QuotationState};
pub use store::QuotationStore;
