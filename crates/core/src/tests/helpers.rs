// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use freight_quote_domain::{
    Money, PriceBreakdown, SearchParams, UrgencyLevel, VehicleId, VehicleOffer, Vendor, WeightUnit,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const NOW: OffsetDateTime = datetime!(2026-03-01 10:00 UTC);
pub const LATER: OffsetDateTime = datetime!(2026-03-01 10:05 UTC);

pub fn create_test_offer(
    vehicle_id: &str,
    vendor_id: &str,
    vendor_name: &str,
    total: i64,
) -> VehicleOffer {
    VehicleOffer {
        vehicle_id: VehicleId::new(vehicle_id),
        vendor: Vendor::new(vendor_id, vendor_name),
        model: String::from("Tata 407"),
        vehicle_type: String::from("Open Body"),
        capacity: String::from("2.5 Ton"),
        registration: String::from("MH-12-AB-1234"),
        total: Money::new(total),
        breakdown: PriceBreakdown {
            route_charge: Money::new(total / 2),
            weight_charge: Money::new(total / 4),
            delivery_charge: Money::new(total - total / 2 - total / 4),
        },
    }
}

pub fn create_vendor1_offer() -> VehicleOffer {
    create_test_offer("veh-a", "vendor-1", "Sharma Logistics", 1000)
}

pub fn create_vendor2_offer() -> VehicleOffer {
    create_test_offer("veh-b", "vendor-2", "Patel Transport", 500)
}

pub fn create_test_params() -> SearchParams {
    SearchParams {
        origin: String::from("Mumbai"),
        destination: String::from("Pune"),
        weight: 12,
        weight_unit: WeightUnit::Ton,
        vehicle_type: None,
        pickup_date: time::macros::date!(2026 - 03 - 02),
        drop_date: time::macros::date!(2026 - 03 - 04),
        urgency: UrgencyLevel::Standard,
        requirements: None,
    }
}
