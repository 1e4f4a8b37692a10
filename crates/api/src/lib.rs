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
mod ingest;
mod price;
mod request_response;
mod submit;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_domain_error};
pub use ingest::{OfferIngestReport, RejectedOffer, ingest_offer, ingest_offers};
pub use price::{PriceParseError, parse_display_amount};
pub use request_response::{
    CreateQuotationRequest, QuotationItemPayload, StatusUpdateRequest, VehicleOfferDto,
};
pub use submit::{build_quotation_request, build_status_update};
