//! Item Panel Component
//!
//! Item form fields and item actions. The parent wishlist always comes from
//! the wishlist panel, so the item's wishlist id is shown read-only.

use leptos::prelude::*;

use crate::components::{ActionButton, FormField, PhaseBadge};
use crate::request::Action;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemPanel() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="panel item-panel">
            <h2>
                "Item "
                <PhaseBadge phase=Signal::derive(move || store.item_form().get().phase) />
            </h2>

            <FormField
                id="item_id"
                label="Item ID"
                value=Signal::derive(move || store.item_form().get().item_id)
                on_input=move |v: String| { store.item_form().write().item_id = v; }
            />
            <div class="form-field">
                <label for="item_wishlist_id">"Wishlist ID"</label>
                <input
                    type="text"
                    id="item_wishlist_id"
                    readonly=true
                    prop:value=move || store.item_form().get().wishlist_id
                />
            </div>
            <FormField
                id="item_product_id"
                label="Product ID"
                value=Signal::derive(move || store.item_form().get().product_id)
                on_input=move |v: String| { store.item_form().write().product_id = v; }
            />
            <FormField
                id="item_name"
                label="Name"
                value=Signal::derive(move || store.item_form().get().name)
                on_input=move |v: String| { store.item_form().write().name = v; }
            />
            <FormField
                id="item_description"
                label="Description"
                value=Signal::derive(move || store.item_form().get().description)
                on_input=move |v: String| { store.item_form().write().description = v; }
            />

            <div class="button-row">
                <ActionButton id="add-item-btn" label="Add Item" action=Action::AddItem />
                <ActionButton
                    id="retrieve-item-btn"
                    label="Retrieve Item"
                    action=Action::RetrieveItem
                />
                <ActionButton id="update-item-btn" label="Update Item" action=Action::UpdateItem />
                <ActionButton id="delete-item-btn" label="Delete Item" action=Action::DeleteItem />
                <ActionButton id="list-items-btn" label="List Items" action=Action::ListItems />
                <button
                    type="button"
                    id="clear-item-btn"
                    on:click=move |_| store.update(|state| state.clear_item_form())
                >
                    "Clear Item"
                </button>
            </div>
        </section>
    }
}
