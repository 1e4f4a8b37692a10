// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::VehicleOfferDto;

pub fn create_test_dto() -> VehicleOfferDto {
    VehicleOfferDto {
        vehicle_id: String::from("veh-1"),
        vendor_id: String::from("vendor-1"),
        vendor_name: String::from("Sharma Logistics"),
        model: String::from("Tata 407"),
        vehicle_type: String::from("Open Body"),
        capacity: String::from("2.5 Ton"),
        registration: String::from("MH-12-AB-1234"),
        total_price: String::from("₹12,345"),
        route_charge: String::from("₹8,000"),
        weight_charge: String::from("₹3,345"),
        delivery_charge: String::from("₹1,000"),
    }
}
