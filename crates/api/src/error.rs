// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary layer.

use freight_quote_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the boundary
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidVendor(msg) => ApiError::InvalidInput {
            field: String::from("vendor"),
            message: msg,
        },
        DomainError::InvalidVehicle(msg) => ApiError::InvalidInput {
            field: String::from("vehicle"),
            message: msg,
        },
        DomainError::InvalidAmount { amount } => ApiError::InvalidInput {
            field: String::from("total_price"),
            message: format!("Invalid amount: {amount}. Must be greater than 0"),
        },
        DomainError::InvalidWeight(msg) => ApiError::InvalidInput {
            field: String::from("weight"),
            message: msg,
        },
        DomainError::InvalidWeightUnit(s) => ApiError::InvalidInput {
            field: String::from("weight_unit"),
            message: format!("Unknown weight unit: '{s}'"),
        },
        DomainError::InvalidUrgencyLevel(s) => ApiError::InvalidInput {
            field: String::from("urgency"),
            message: format!("Unknown urgency level: '{s}'"),
        },
        DomainError::InvalidStatus(s) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown quotation status: '{s}'"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("status_lifecycle"),
            message: format!("Cannot move a quotation from {from} to {to}"),
        },
        DomainError::InvalidSearchParams(msg) => ApiError::InvalidInput {
            field: String::from("search"),
            message: msg,
        },
    }
}
