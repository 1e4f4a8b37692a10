// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    LATER, NOW, create_test_offer, create_test_params, create_vendor1_offer,
};
use crate::{Action, DraftQuotation, QuotationState, apply};
use freight_quote_domain::{
    Money, QuotationId, QuotationStatus, SearchParamsUpdate, VehicleId, VehicleOffer,
};

fn state_with_draft() -> QuotationState {
    apply(
        &QuotationState::new(),
        Action::AddVehicle {
            offer: create_vendor1_offer(),
        },
        NOW,
    )
}

#[test]
fn test_set_search_params_replaces_wholesale() {
    let state: QuotationState = apply(
        &QuotationState::new(),
        Action::SetSearchParams {
            params: create_test_params(),
        },
        NOW,
    );

    assert_eq!(state.search_params, Some(create_test_params()));
    assert!(state.draft.is_none());
    assert!(state.history.is_empty());
}

#[test]
fn test_set_search_params_does_not_touch_existing_draft() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::SetSearchParams {
            params: create_test_params(),
        },
        LATER,
    );

    assert_eq!(next.draft, state.draft);
}

#[test]
fn test_update_search_params_shallow_merges() {
    let state: QuotationState = apply(
        &QuotationState::new(),
        Action::SetSearchParams {
            params: create_test_params(),
        },
        NOW,
    );

    let next: QuotationState = apply(
        &state,
        Action::UpdateSearchParams {
            update: SearchParamsUpdate {
                destination: Some(String::from("Nashik")),
                ..SearchParamsUpdate::default()
            },
        },
        LATER,
    );

    let params = next.search_params.unwrap();
    assert_eq!(params.destination, "Nashik");
    assert_eq!(params.origin, "Mumbai");
}

#[test]
fn test_update_search_params_is_noop_without_params() {
    let state: QuotationState = QuotationState::new();
    let next: QuotationState = apply(
        &state,
        Action::UpdateSearchParams {
            update: SearchParamsUpdate {
                destination: Some(String::from("Nashik")),
                ..SearchParamsUpdate::default()
            },
        },
        NOW,
    );

    assert_eq!(next, state);
}

#[test]
fn test_first_add_creates_draft() {
    let state: QuotationState = state_with_draft();

    let draft: &DraftQuotation = state.draft.as_ref().unwrap();
    assert_eq!(draft.vendor.id.value(), "vendor-1");
    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.items[0].quantity, 1);
    assert_eq!(draft.total_amount, Money::new(1000));
    assert_eq!(draft.status, QuotationStatus::Draft);
    assert_eq!(draft.created_at, NOW);
}

#[test]
fn test_add_succeeds_without_search_params() {
    // Search params are informational, not a precondition.
    let state: QuotationState = state_with_draft();
    assert!(state.draft.is_some());
    assert!(state.search_params.is_none());
    assert_eq!(state.draft.unwrap().search_params, None);
}

#[test]
fn test_draft_snapshots_current_search_params() {
    let state: QuotationState = apply(
        &QuotationState::new(),
        Action::SetSearchParams {
            params: create_test_params(),
        },
        NOW,
    );
    let next: QuotationState = apply(
        &state,
        Action::AddVehicle {
            offer: create_vendor1_offer(),
        },
        LATER,
    );

    let draft: &DraftQuotation = next.draft.as_ref().unwrap();
    assert_eq!(draft.search_params, Some(create_test_params()));
}

#[test]
fn test_re_adding_same_vehicle_increments_quantity() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::AddVehicle {
            offer: create_vendor1_offer(),
        },
        LATER,
    );

    let draft: &DraftQuotation = next.draft.as_ref().unwrap();
    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.items[0].quantity, 2);
    assert_eq!(draft.total_amount, Money::new(2000));
    assert_eq!(draft.updated_at, LATER);
}

#[test]
fn test_adding_second_vehicle_of_same_vendor_appends_in_order() {
    let state: QuotationState = state_with_draft();
    let second: VehicleOffer = create_test_offer("veh-c", "vendor-1", "Sharma Logistics", 1500);
    let next: QuotationState = apply(&state, Action::AddVehicle { offer: second }, LATER);

    let draft: &DraftQuotation = next.draft.as_ref().unwrap();
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.items[0].offer.vehicle_id.value(), "veh-a");
    assert_eq!(draft.items[1].offer.vehicle_id.value(), "veh-c");
    assert_eq!(draft.items[1].quantity, 1);
    assert_eq!(draft.total_amount, Money::new(2500));
}

#[test]
fn test_remove_vehicle_recomputes_total() {
    let state: QuotationState = state_with_draft();
    let second: VehicleOffer = create_test_offer("veh-c", "vendor-1", "Sharma Logistics", 1500);
    let state: QuotationState = apply(&state, Action::AddVehicle { offer: second }, NOW);

    let next: QuotationState = apply(
        &state,
        Action::RemoveVehicle {
            vehicle_id: VehicleId::new("veh-c"),
        },
        LATER,
    );

    let draft: &DraftQuotation = next.draft.as_ref().unwrap();
    assert_eq!(draft.items.len(), 1);
    assert_eq!(draft.total_amount, Money::new(1000));
}

#[test]
fn test_removing_last_item_discards_draft_entirely() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::RemoveVehicle {
            vehicle_id: VehicleId::new("veh-a"),
        },
        LATER,
    );

    assert!(next.draft.is_none());
}

#[test]
fn test_remove_vehicle_is_noop_without_draft() {
    let state: QuotationState = QuotationState::new();
    let next: QuotationState = apply(
        &state,
        Action::RemoveVehicle {
            vehicle_id: VehicleId::new("veh-a"),
        },
        NOW,
    );

    assert_eq!(next, state);
}

#[test]
fn test_remove_then_re_add_restores_quantity_one() {
    let state: QuotationState = state_with_draft();
    let state: QuotationState = apply(
        &state,
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-a"),
            quantity: 5,
        },
        NOW,
    );
    let state: QuotationState = apply(
        &state,
        Action::RemoveVehicle {
            vehicle_id: VehicleId::new("veh-a"),
        },
        NOW,
    );
    let state: QuotationState = apply(
        &state,
        Action::AddVehicle {
            offer: create_vendor1_offer(),
        },
        LATER,
    );

    let draft: &DraftQuotation = state.draft.as_ref().unwrap();
    assert_eq!(draft.items[0].quantity, 1);
    assert_eq!(draft.total_amount, Money::new(1000));
}

#[test]
fn test_update_quantity_recomputes_total() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-a"),
            quantity: 3,
        },
        LATER,
    );

    let draft: &DraftQuotation = next.draft.as_ref().unwrap();
    assert_eq!(draft.items[0].quantity, 3);
    assert_eq!(draft.total_amount, Money::new(3000));
    assert_eq!(draft.updated_at, LATER);
}

#[test]
fn test_update_quantity_clamps_zero_to_one() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-a"),
            quantity: 0,
        },
        LATER,
    );

    assert_eq!(next.draft.unwrap().items[0].quantity, 1);
}

#[test]
fn test_update_quantity_clamps_negative_to_one() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-a"),
            quantity: -5,
        },
        LATER,
    );

    assert_eq!(next.draft.unwrap().items[0].quantity, 1);
}

#[test]
fn test_update_quantity_is_noop_for_unknown_vehicle() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(
        &state,
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-unknown"),
            quantity: 3,
        },
        LATER,
    );

    assert_eq!(next, state);
}

#[test]
fn test_clear_quotation_discards_without_history_entry() {
    let state: QuotationState = state_with_draft();
    let next: QuotationState = apply(&state, Action::ClearQuotation, LATER);

    assert!(next.draft.is_none());
    assert!(next.history.is_empty());
}

#[test]
fn test_save_to_history_appends_and_discards_draft() {
    let state: QuotationState = state_with_draft();
    let draft: DraftQuotation = state.draft.clone().unwrap();
    let next: QuotationState = apply(&state, Action::SaveToHistory, LATER);

    assert!(next.draft.is_none());
    assert_eq!(next.history, vec![draft]);
}

#[test]
fn test_save_to_history_is_noop_without_draft() {
    let state: QuotationState = QuotationState::new();
    let next: QuotationState = apply(&state, Action::SaveToHistory, NOW);

    assert_eq!(next, state);
}

#[test]
fn test_update_status_changes_history_entry() {
    let state: QuotationState = state_with_draft();
    let id: QuotationId = state.draft.as_ref().unwrap().id.clone();
    let state: QuotationState = apply(&state, Action::SaveToHistory, NOW);

    let next: QuotationState = apply(
        &state,
        Action::UpdateStatus {
            quotation_id: id,
            status: QuotationStatus::Requested,
        },
        LATER,
    );

    assert_eq!(next.history[0].status, QuotationStatus::Requested);
    assert_eq!(next.history[0].updated_at, LATER);
}

#[test]
fn test_update_status_is_noop_for_unknown_id() {
    let state: QuotationState = state_with_draft();
    let state: QuotationState = apply(&state, Action::SaveToHistory, NOW);

    let next: QuotationState = apply(
        &state,
        Action::UpdateStatus {
            quotation_id: QuotationId::new("qtn-unknown"),
            status: QuotationStatus::Requested,
        },
        LATER,
    );

    assert_eq!(next, state);
}

#[test]
fn test_update_status_never_touches_live_draft() {
    let state: QuotationState = state_with_draft();
    let id: QuotationId = state.draft.as_ref().unwrap().id.clone();

    let next: QuotationState = apply(
        &state,
        Action::UpdateStatus {
            quotation_id: id,
            status: QuotationStatus::Accepted,
        },
        LATER,
    );

    assert_eq!(next.draft.as_ref().unwrap().status, QuotationStatus::Draft);
}

#[test]
fn test_set_error_sets_the_slot() {
    let state: QuotationState = QuotationState::new();
    let next: QuotationState = apply(
        &state,
        Action::SetError {
            message: Some(String::from("Search request failed")),
        },
        NOW,
    );

    assert_eq!(next.error, Some(String::from("Search request failed")));
}

#[test]
fn test_any_other_action_clears_the_error_slot() {
    let state: QuotationState = apply(
        &QuotationState::new(),
        Action::SetError {
            message: Some(String::from("Search request failed")),
        },
        NOW,
    );

    let next: QuotationState = apply(
        &state,
        Action::SetSearchParams {
            params: create_test_params(),
        },
        LATER,
    );

    assert!(next.error.is_none());
}

#[test]
fn test_set_error_none_clears_the_slot() {
    let state: QuotationState = apply(
        &QuotationState::new(),
        Action::SetError {
            message: Some(String::from("Search request failed")),
        },
        NOW,
    );

    let next: QuotationState = apply(&state, Action::SetError { message: None }, LATER);

    assert!(next.error.is_none());
}

#[test]
fn test_total_always_matches_items() {
    // Invariant: total_amount equals the recomputed sum after any
    // sequence of item mutations.
    let mut state: QuotationState = state_with_draft();
    let actions: Vec<Action> = vec![
        Action::AddVehicle {
            offer: create_test_offer("veh-c", "vendor-1", "Sharma Logistics", 1500),
        },
        Action::UpdateQuantity {
            vehicle_id: VehicleId::new("veh-c"),
            quantity: 4,
        },
        Action::AddVehicle {
            offer: create_vendor1_offer(),
        },
        Action::RemoveVehicle {
            vehicle_id: VehicleId::new("veh-a"),
        },
    ];

    for action in actions {
        state = apply(&state, action, LATER);
        if let Some(draft) = &state.draft {
            let recomputed: Money = draft
                .items
                .iter()
                .fold(Money::ZERO, |acc, item| acc.add(item.line_total()));
            assert_eq!(draft.total_amount, recomputed);
            assert!(draft.items.iter().all(|item| item.quantity >= 1));
        }
    }
}
