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

mod error;
mod money;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use money::Money;
pub use status::QuotationStatus;
pub use types::{
    PriceBreakdown, QuotationId, SearchParams, SearchParamsUpdate, UrgencyLevel, VehicleId,
    VehicleOffer, Vendor, VendorId, WeightUnit,
};
pub use validation::{validate_offer_fields, validate_search_params, validate_status_transition};
