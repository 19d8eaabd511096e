//! Wishlist Panel Component
//!
//! Wishlist form fields plus every wishlist-level action.

use leptos::prelude::*;

use crate::components::{ActionButton, FormField, PhaseBadge};
use crate::request::Action;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WishlistPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="panel wishlist-panel">
            <h2>
                "Wishlist "
                <PhaseBadge phase=Signal::derive(move || store.wishlist_form().get().phase) />
            </h2>

            <FormField
                id="wishlist_id"
                label="Wishlist ID"
                value=Signal::derive(move || store.wishlist_form().get().wishlist_id)
                on_input=move |v: String| { store.wishlist_form().write().wishlist_id = v; }
            />
            <FormField
                id="customer_id"
                label="Customer ID"
                value=Signal::derive(move || store.wishlist_form().get().customer_id)
                on_input=move |v: String| { store.wishlist_form().write().customer_id = v; }
            />
            <FormField
                id="wishlist_name"
                label="Wishlist Name"
                value=Signal::derive(move || store.wishlist_form().get().wishlist_name)
                on_input=move |v: String| { store.wishlist_form().write().wishlist_name = v; }
            />

            <div class="button-row">
                <ActionButton id="create-btn" label="Create" action=Action::CreateWishlist />
                <ActionButton id="retrieve-btn" label="Retrieve" action=Action::RetrieveWishlist />
                <ActionButton id="update-btn" label="Update" action=Action::UpdateWishlist />
                <ActionButton id="delete-btn" label="Delete" action=Action::DeleteWishlist />
                <ActionButton id="search-btn" label="Search" action=Action::SearchWishlists />
                <ActionButton id="list-btn" label="List" action=Action::ListWishlists />
                <ActionButton
                    id="clear-wishlist-btn"
                    label="Clear Items"
                    action=Action::ClearWishlistItems
                />
                <button
                    type="button"
                    id="clear-btn"
                    on:click=move |_| store.update(|state| state.clear_wishlist_form())
                >
                    "Clear"
                </button>
            </div>
        </section>
    }
}
