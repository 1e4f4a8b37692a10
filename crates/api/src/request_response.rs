// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response data transfer objects for the remote backend.

use freight_quote_domain::SearchParams;
use time::OffsetDateTime;

/// One vehicle offer row as returned by the remote truck-search endpoint.
///
/// Prices arrive display-formatted (`"₹12,345"`); they are parsed to
/// numeric amounts once, during ingestion, and never again.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VehicleOfferDto {
    /// The offered vehicle's identifier.
    pub vehicle_id: String,
    /// The owning vendor's identifier.
    pub vendor_id: String,
    /// The owning vendor's display name.
    pub vendor_name: String,
    /// Vehicle model name.
    pub model: String,
    /// Vehicle type.
    pub vehicle_type: String,
    /// Load capacity, as displayed.
    pub capacity: String,
    /// Registration / GPS identifier.
    pub registration: String,
    /// Total price, display-formatted.
    pub total_price: String,
    /// Route charge component, display-formatted.
    pub route_charge: String,
    /// Weight charge component, display-formatted.
    pub weight_charge: String,
    /// Delivery charge component, display-formatted.
    pub delivery_charge: String,
}

/// One line item of an outbound quotation-creation request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuotationItemPayload {
    /// The selected vehicle's identifier.
    pub vehicle_id: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Numeric per-unit total in whole rupees.
    pub unit_total: i64,
    /// Numeric line total (unit total × quantity) in whole rupees.
    pub line_total: i64,
}

/// Outbound request serializing a draft quotation for the backend
/// quotation-creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateQuotationRequest {
    /// The client-assigned quotation identifier.
    pub quotation_id: String,
    /// The vendor the quotation is addressed to.
    pub vendor_id: String,
    /// The vendor's display name.
    pub vendor_name: String,
    /// The quotation's line items.
    pub items: Vec<QuotationItemPayload>,
    /// Numeric total amount in whole rupees.
    pub total_amount: i64,
    /// Lifecycle status string.
    pub status: String,
    /// The search criteria the quotation was assembled from, if any.
    pub search: Option<SearchParams>,
    /// When the draft was created on the client.
    pub created_at: OffsetDateTime,
}

/// Outbound request updating the status of an existing quotation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdateRequest {
    /// The quotation to update.
    pub quotation_id: String,
    /// The requested status string.
    pub status: String,
}
