// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the lifecycle state of a quotation.
///
/// A quotation starts as a draft cart, is submitted to the vendor as a
/// request, receives the vendor's priced response, and ends accepted or
/// declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuotationStatus {
    /// In-progress cart. Not yet visible to the vendor.
    #[default]
    Draft,
    /// Submitted to the vendor; awaiting a response.
    Requested,
    /// Vendor responded with a priced quotation.
    Received,
    /// Customer accepted the vendor's quotation.
    Accepted,
    /// Customer declined the vendor's quotation.
    Declined,
}

impl FromStr for QuotationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Requested" => Ok(Self::Requested),
            "Received" => Ok(Self::Received),
            "Accepted" => Ok(Self::Accepted),
            "Declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for QuotationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl QuotationStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Requested => "Requested",
            Self::Received => "Received",
            Self::Accepted => "Accepted",
            Self::Declined => "Declined",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Draft → Requested
    /// - Requested → Received
    /// - Received → Accepted
    /// - Received → Declined
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Draft, Self::Requested)
                | (Self::Requested, Self::Received)
                | (Self::Received, Self::Accepted | Self::Declined)
        )
    }

    /// Returns whether the quotation has reached a terminal status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Declined)
    }
}
