//! Response Reconciler
//!
//! Applies a classified outcome to the state object the action targets and
//! writes the status line. Application is an unconditional overwrite, so
//! replaying an outcome is harmless and the last one applied wins.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{IdEcho, Item, ServiceInfo, Wishlist};
use crate::request::Action;
use crate::response::Outcome;
use crate::results::ResultTable;
use crate::store::AppState;

pub const SUCCESS: &str = "Success";
pub const SERVER_ERROR: &str = "Server error!";
pub const CLEAR_ERROR: &str = "Server error! Couldn't clear wishlist!";

/// Apply `outcome` of `action` to `state`.
pub fn reconcile(action: Action, outcome: Outcome, state: &mut AppState) {
    match outcome {
        Outcome::Success(body) => {
            if let Err(reason) = apply_success(action, body, state) {
                transport_failure(action, &reason, state);
            }
        }
        Outcome::ServerError { status, message } => {
            debug!("{:?} rejected with {}: {}", action, status, message);
            if action == Action::ServiceInfo {
                return;
            }
            if action.is_retrieve() {
                reset_form(action, state);
            }
            state.status = message;
        }
        Outcome::TransportFailure(reason) => transport_failure(action, &reason, state),
    }
}

fn transport_failure(action: Action, reason: &str, state: &mut AppState) {
    warn!("{:?} failed without a structured error: {}", action, reason);
    if action == Action::ServiceInfo {
        return;
    }
    state.status = match action {
        Action::ClearWishlistItems => CLEAR_ERROR,
        _ => SERVER_ERROR,
    }
    .to_string();
}

fn reset_form(action: Action, state: &mut AppState) {
    match action {
        Action::RetrieveWishlist => state.wishlist_form.clear(),
        Action::RetrieveItem => state.item_form.clear(),
        _ => {}
    }
}

fn apply_success(action: Action, body: Option<Value>, state: &mut AppState) -> Result<(), String> {
    match action {
        Action::CreateWishlist | Action::UpdateWishlist | Action::RetrieveWishlist => {
            let wishlist: Wishlist = decode_record(body)?;
            state.wishlist_form.load(&wishlist);
            state.status = SUCCESS.to_string();
        }
        Action::AddItem | Action::UpdateItem | Action::RetrieveItem => {
            let item: Item = decode_record(body)?;
            state.item_form.load(&item);
            state.status = SUCCESS.to_string();
        }
        Action::ListWishlists | Action::SearchWishlists => {
            let records: Vec<Wishlist> = decode_list(body)?;
            state.wishlist_results = Some(ResultTable::wishlists(&records));
            state.status = SUCCESS.to_string();
        }
        Action::ListItems => {
            let records: Vec<Item> = decode_list(body)?;
            state.item_results = Some(ResultTable::items(&records));
            state.status = SUCCESS.to_string();
        }
        Action::DeleteWishlist => {
            state.wishlist_form.clear();
            state.status = deleted_message("Wishlist", echoed_id(body).as_deref());
        }
        Action::DeleteItem => {
            state.item_form.clear();
            state.status = deleted_message("Item", echoed_id(body).as_deref());
        }
        Action::ClearWishlistItems => {
            let form_id = Some(state.wishlist_form.wishlist_id.clone())
                .filter(|id| !id.is_empty());
            let id = echoed_id(body).or(form_id);
            state.wishlist_form.clear();
            state.status = cleared_message(id.as_deref());
        }
        Action::ServiceInfo => {
            let info: ServiceInfo = decode_record(body)?;
            state.service = Some(info);
        }
    }
    Ok(())
}

fn deleted_message(resource: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{} with ID [{}] has been Deleted!", resource, id),
        None => format!("{} has been Deleted!", resource),
    }
}

fn cleared_message(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Wishlist with ID [{}] has its items cleared!", id),
        None => "Wishlist has its items cleared!".to_string(),
    }
}

fn echoed_id(body: Option<Value>) -> Option<String> {
    body.and_then(|v| serde_json::from_value::<IdEcho>(v).ok())
        .map(|echo| echo.id)
        .filter(|id| !id.is_empty())
}

fn decode_record<T: DeserializeOwned>(body: Option<Value>) -> Result<T, String> {
    match body {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|e| e.to_string()),
        Some(other) => Err(format!("expected a JSON object, got {}", other)),
        None => Err("empty response body".to_string()),
    }
}

fn decode_list<T: DeserializeOwned>(body: Option<Value>) -> Result<Vec<T>, String> {
    match body {
        Some(value @ Value::Array(_)) => serde_json::from_value(value).map_err(|e| e.to_string()),
        Some(other) => Err(format!("expected a JSON array, got {}", other)),
        None => Err("empty response body".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FormPhase, ItemForm, WishlistForm};
    use crate::results::{ITEM_COLUMNS, WISHLIST_COLUMNS};
    use serde_json::json;

    fn loaded_wishlist_state() -> AppState {
        let mut state = AppState::new();
        state.wishlist_form = WishlistForm {
            wishlist_id: "W1".to_string(),
            customer_id: "C1".to_string(),
            wishlist_name: "N1".to_string(),
            phase: FormPhase::Loaded,
        };
        state
    }

    fn loaded_item_state() -> AppState {
        let mut state = loaded_wishlist_state();
        state.item_form = ItemForm {
            item_id: "I1".to_string(),
            wishlist_id: "W1".to_string(),
            product_id: "P1".to_string(),
            name: "toothbrush".to_string(),
            description: "I need one".to_string(),
            phase: FormPhase::Loaded,
        };
        state
    }

    fn offline() -> Outcome {
        Outcome::TransportFailure("offline".to_string())
    }

    fn rejected(status: u16, message: &str) -> Outcome {
        Outcome::ServerError {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_create_round_trip() {
        let mut state = AppState::new();
        state.wishlist_form.customer_id = "C1".to_string();
        state.wishlist_form.wishlist_name = "N1".to_string();

        let body = json!({ "id": "W1", "customer_id": "C1", "wishlist_name": "N1" });
        let outcome = Outcome::Success(Some(body));
        reconcile(Action::CreateWishlist, outcome, &mut state);

        assert_eq!(
            state.wishlist_form,
            WishlistForm {
                wishlist_id: "W1".to_string(),
                customer_id: "C1".to_string(),
                wishlist_name: "N1".to_string(),
                phase: FormPhase::Loaded,
            }
        );
        assert_eq!(state.status, SUCCESS);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let body = json!({
            "id": 4,
            "wishlist_id": 1,
            "product_id": 9,
            "name": "pen",
            "description": "blue"
        });
        let outcome = Outcome::Success(Some(body));

        let mut once = AppState::new();
        reconcile(Action::RetrieveItem, outcome.clone(), &mut once);

        let mut twice = AppState::new();
        reconcile(Action::RetrieveItem, outcome.clone(), &mut twice);
        reconcile(Action::RetrieveItem, outcome, &mut twice);

        assert_eq!(once, twice);
        assert_eq!(twice.item_form.item_id, "4");
    }

    #[test]
    fn test_update_keeps_loaded() {
        let mut state = loaded_wishlist_state();
        let body = json!({ "id": "W1", "customer_id": "C1", "wishlist_name": "renamed" });
        let outcome = Outcome::Success(Some(body));
        reconcile(Action::UpdateWishlist, outcome, &mut state);

        assert_eq!(state.wishlist_form.phase, FormPhase::Loaded);
        assert_eq!(state.wishlist_form.wishlist_name, "renamed");
    }

    #[test]
    fn test_delete_item_resets_form() {
        let mut state = loaded_item_state();
        reconcile(Action::DeleteItem, Outcome::Success(None), &mut state);

        assert_eq!(state.item_form, ItemForm::default());
        assert_eq!(state.item_form.product_id, "");
        assert_eq!(state.item_form.wishlist_id, "");
        assert_eq!(state.item_form.name, "");
        assert_eq!(state.item_form.description, "");
        assert_eq!(state.status, "Item has been Deleted!");
        // wishlist context survives
        assert_eq!(state.wishlist_form.wishlist_id, "W1");
    }

    #[test]
    fn test_delete_wishlist_names_echoed_id() {
        let mut state = loaded_wishlist_state();
        let outcome = Outcome::Success(Some(json!({ "id": 3 })));
        reconcile(Action::DeleteWishlist, outcome, &mut state);

        assert_eq!(state.wishlist_form, WishlistForm::default());
        assert_eq!(state.status, "Wishlist with ID [3] has been Deleted!");
    }

    #[test]
    fn test_clear_items_names_wishlist() {
        let mut state = loaded_wishlist_state();
        let outcome = Outcome::Success(None);
        reconcile(Action::ClearWishlistItems, outcome, &mut state);

        assert_eq!(state.wishlist_form.phase, FormPhase::Empty);
        assert_eq!(state.status, "Wishlist with ID [W1] has its items cleared!");

        let mut state = loaded_wishlist_state();
        let body = json!({ "id": 8, "customer_id": "C1", "wishlist_name": "N1" });
        let outcome = Outcome::Success(Some(body));
        reconcile(Action::ClearWishlistItems, outcome, &mut state);
        assert_eq!(state.status, "Wishlist with ID [8] has its items cleared!");
    }

    #[test]
    fn test_clear_items_without_any_id() {
        let mut state = AppState::new();
        let outcome = Outcome::Success(None);
        reconcile(Action::ClearWishlistItems, outcome, &mut state);

        assert_eq!(state.status, "Wishlist has its items cleared!");
        assert!(!state.status.contains("[]"));

        let outcome = Outcome::Success(Some(json!({ "id": "" })));
        reconcile(Action::ClearWishlistItems, outcome, &mut state);
        assert_eq!(state.status, "Wishlist has its items cleared!");
    }

    #[test]
    fn test_retrieve_not_found_resets_form() {
        let mut state = loaded_wishlist_state();
        let outcome = rejected(404, "Wishlist not found");
        reconcile(Action::RetrieveWishlist, outcome, &mut state);

        assert_eq!(state.wishlist_form, WishlistForm::default());
        assert_eq!(state.status, "Wishlist not found");
    }

    #[test]
    fn test_update_error_keeps_form() {
        let mut state = loaded_wishlist_state();
        let outcome = rejected(400, "Invalid Wishlist");
        reconcile(Action::UpdateWishlist, outcome, &mut state);

        assert_eq!(state.wishlist_form.wishlist_id, "W1");
        assert_eq!(state.status, "Invalid Wishlist");
    }

    #[test]
    fn test_transport_failure_keeps_form() {
        let mut state = loaded_item_state();
        let before = state.item_form.clone();
        reconcile(Action::RetrieveItem, offline(), &mut state);

        assert_eq!(state.item_form, before);
        assert_eq!(state.status, SERVER_ERROR);
    }

    #[test]
    fn test_clear_items_transport_failure_message() {
        let mut state = loaded_wishlist_state();
        reconcile(Action::ClearWishlistItems, offline(), &mut state);
        assert_eq!(state.status, CLEAR_ERROR);
        assert_eq!(state.wishlist_form.wishlist_id, "W1");
    }

    #[test]
    fn test_empty_item_list_renders_header_only() {
        let mut state = loaded_wishlist_state();
        let outcome = Outcome::Success(Some(json!([])));
        reconcile(Action::ListItems, outcome, &mut state);

        let table = state.item_results.as_ref().unwrap();
        assert_eq!(table.columns, ITEM_COLUMNS);
        assert_eq!(table.columns.len(), 4);
        assert!(table.rows.is_empty());
        assert_eq!(state.status, SUCCESS);
    }

    #[test]
    fn test_search_replaces_results_and_leaves_form() {
        let mut state = loaded_wishlist_state();
        let stale = Wishlist {
            id: "old".into(),
            customer_id: "X".into(),
            wishlist_name: "stale".into(),
        };
        state.wishlist_results = Some(ResultTable::wishlists(&[stale]));
        let form_before = state.wishlist_form.clone();

        let body = json!([
            { "id": 1, "customer_id": "C1", "wishlist_name": "a" },
            { "id": 2, "customer_id": "C1", "wishlist_name": "b" }
        ]);
        let outcome = Outcome::Success(Some(body));
        reconcile(Action::SearchWishlists, outcome, &mut state);

        let table = state.wishlist_results.as_ref().unwrap();
        assert_eq!(table.columns, WISHLIST_COLUMNS);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][2], "b");
        assert_eq!(state.wishlist_form, form_before);
    }

    #[test]
    fn test_list_failure_keeps_results() {
        let mut state = AppState::new();
        let outcome = Outcome::Success(Some(json!([])));
        reconcile(Action::ListWishlists, outcome, &mut state);
        let before = state.wishlist_results.clone();

        reconcile(Action::ListWishlists, rejected(500, "db down"), &mut state);

        assert_eq!(state.wishlist_results, before);
        assert_eq!(state.status, "db down");
    }

    #[test]
    fn test_wrong_shape_is_transport_failure() {
        let mut state = loaded_wishlist_state();
        let outcome = Outcome::Success(Some(json!([1, 2])));
        reconcile(Action::RetrieveWishlist, outcome, &mut state);

        assert_eq!(state.status, SERVER_ERROR);
        assert_eq!(state.wishlist_form.wishlist_id, "W1");
    }

    #[test]
    fn test_service_info_does_not_touch_status() {
        let mut state = AppState::new();
        state.status = "Success".to_string();
        let body = json!({ "name": "Wishlist REST API Service", "version": "1.0" });
        reconcile(Action::ServiceInfo, Outcome::Success(Some(body)), &mut state);

        let name = state.service.as_ref().map(|s| s.name.as_str());
        assert_eq!(name, Some("Wishlist REST API Service"));
        assert_eq!(state.status, "Success");

        reconcile(Action::ServiceInfo, offline(), &mut state);
        assert_eq!(state.status, "Success");
    }
}
