// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Represents a vendor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VendorId(String);

impl VendorId {
    /// Creates a new vendor identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a vehicle identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates a new vehicle identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a quotation identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotationId(String);

impl QuotationId {
    /// Creates a new quotation identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuotationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vendor: the owning party of vehicle offers and quotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// The vendor's identifier.
    pub id: VendorId,
    /// The vendor's display name.
    pub name: String,
}

impl Vendor {
    /// Creates a new vendor.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: VendorId::new(id),
            name: name.to_string(),
        }
    }
}

/// Unit for shipment weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeightUnit {
    /// Kilograms.
    #[default]
    Kg,
    /// Metric tons.
    Ton,
}

impl FromStr for WeightUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kg" => Ok(Self::Kg),
            "Ton" => Ok(Self::Ton),
            _ => Err(DomainError::InvalidWeightUnit(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl WeightUnit {
    /// Converts this unit to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "Kg",
            Self::Ton => "Ton",
        }
    }
}

/// Urgency level of a shipment search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UrgencyLevel {
    /// Normal delivery window.
    #[default]
    Standard,
    /// Expedited delivery.
    Urgent,
    /// Same-day / time-critical delivery.
    Critical,
}

impl FromStr for UrgencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Urgent" => Ok(Self::Urgent),
            "Critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidUrgencyLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl UrgencyLevel {
    /// Converts this urgency level to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Urgent => "Urgent",
            Self::Critical => "Critical",
        }
    }
}

/// The shipment search criteria that produced a set of vehicle offers.
///
/// Set once per search and replaced wholesale on a new search. The snapshot
/// attached to a draft quotation is immutable once the draft is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Origin location identifier.
    pub origin: String,
    /// Destination location identifier.
    pub destination: String,
    /// Shipment weight in the given unit.
    pub weight: u32,
    /// Unit of the shipment weight.
    pub weight_unit: WeightUnit,
    /// Optional vehicle-type filter.
    pub vehicle_type: Option<String>,
    /// Requested pickup date.
    pub pickup_date: Date,
    /// Requested drop date.
    pub drop_date: Date,
    /// Urgency of the shipment.
    pub urgency: UrgencyLevel,
    /// Optional free-text requirements.
    pub requirements: Option<String>,
}

/// A partial update to [`SearchParams`], shallow-merged field by field.
///
/// `None` leaves the existing value untouched. Optional target fields use
/// a doubled `Option` so that an update can also clear them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParamsUpdate {
    /// New origin, if any.
    pub origin: Option<String>,
    /// New destination, if any.
    pub destination: Option<String>,
    /// New weight, if any.
    pub weight: Option<u32>,
    /// New weight unit, if any.
    pub weight_unit: Option<WeightUnit>,
    /// New vehicle-type filter, if any. `Some(None)` clears the filter.
    pub vehicle_type: Option<Option<String>>,
    /// New pickup date, if any.
    pub pickup_date: Option<Date>,
    /// New drop date, if any.
    pub drop_date: Option<Date>,
    /// New urgency, if any.
    pub urgency: Option<UrgencyLevel>,
    /// New requirements, if any. `Some(None)` clears the text.
    pub requirements: Option<Option<String>>,
}

impl SearchParams {
    /// Returns a copy of these params with the update shallow-merged in.
    #[must_use]
    pub fn merge(&self, update: &SearchParamsUpdate) -> Self {
        Self {
            origin: update.origin.clone().unwrap_or_else(|| self.origin.clone()),
            destination: update
                .destination
                .clone()
                .unwrap_or_else(|| self.destination.clone()),
            weight: update.weight.unwrap_or(self.weight),
            weight_unit: update.weight_unit.unwrap_or(self.weight_unit),
            vehicle_type: update
                .vehicle_type
                .clone()
                .unwrap_or_else(|| self.vehicle_type.clone()),
            pickup_date: update.pickup_date.unwrap_or(self.pickup_date),
            drop_date: update.drop_date.unwrap_or(self.drop_date),
            urgency: update.urgency.unwrap_or(self.urgency),
            requirements: update
                .requirements
                .clone()
                .unwrap_or_else(|| self.requirements.clone()),
        }
    }
}

/// Display-only price sub-breakdown of an offer.
///
/// The stated offer total is authoritative; these components are carried
/// for presentation and are never summed back into the total by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Charge attributed to the route distance.
    pub route_charge: Money,
    /// Charge attributed to the shipment weight.
    pub weight_charge: Money,
    /// Charge attributed to the delivery window.
    pub delivery_charge: Money,
}

impl PriceBreakdown {
    /// Saturating sum of the three components.
    #[must_use]
    pub fn component_sum(&self) -> Money {
        self.route_charge.add(self.weight_charge).add(self.delivery_charge)
    }
}

/// A vendor's priced offer for one vehicle.
///
/// Produced by the external truck-search collaborator and immutable from
/// then on; the core trusts its fields without revalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleOffer {
    /// The offered vehicle's identifier.
    pub vehicle_id: VehicleId,
    /// The vendor owning this vehicle.
    pub vendor: Vendor,
    /// Vehicle model name.
    pub model: String,
    /// Vehicle type (e.g. "Open Body", "Container").
    pub vehicle_type: String,
    /// Load capacity, as displayed (e.g. "12 Ton").
    pub capacity: String,
    /// Registration / GPS identifier.
    pub registration: String,
    /// The computed total price for this offer.
    pub total: Money,
    /// Display-only sub-breakdown of the total.
    pub breakdown: PriceBreakdown,
}
