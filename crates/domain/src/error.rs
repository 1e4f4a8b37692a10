// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::QuotationStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Vendor identifier or name is empty or invalid.
    InvalidVendor(String),
    /// Vehicle identifier or descriptive field is empty or invalid.
    InvalidVehicle(String),
    /// Offer amount is zero or negative.
    InvalidAmount {
        /// The invalid amount in whole rupees.
        amount: i64,
    },
    /// Shipment weight is invalid.
    InvalidWeight(String),
    /// Weight unit string is not recognized.
    InvalidWeightUnit(String),
    /// Urgency level string is not recognized.
    InvalidUrgencyLevel(String),
    /// Quotation status string is not recognized.
    InvalidStatus(String),
    /// Status transition is not permitted by the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: QuotationStatus,
        /// The requested status.
        to: QuotationStatus,
    },
    /// Search parameters are inconsistent.
    InvalidSearchParams(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVendor(msg) => write!(f, "Invalid vendor: {msg}"),
            Self::InvalidVehicle(msg) => write!(f, "Invalid vehicle: {msg}"),
            Self::InvalidAmount { amount } => {
                write!(f, "Invalid amount: {amount} (must be greater than 0)")
            }
            Self::InvalidWeight(msg) => write!(f, "Invalid weight: {msg}"),
            Self::InvalidWeightUnit(s) => write!(f, "Invalid weight unit: '{s}'"),
            Self::InvalidUrgencyLevel(s) => write!(f, "Invalid urgency level: '{s}'"),
            Self::InvalidStatus(s) => write!(f, "Invalid quotation status: '{s}'"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid status transition: {from} -> {to}")
            }
            Self::InvalidSearchParams(msg) => write!(f, "Invalid search parameters: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
