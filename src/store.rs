//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The reconciler and dispatcher operate on plain `&mut AppState`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::forms::{ItemForm, WishlistForm};
use crate::models::ServiceInfo;
use crate::results::ResultTable;

/// Everything the operator sees, each part independently addressable
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Wishlist panel
    pub wishlist_form: WishlistForm,
    /// Item panel
    pub item_form: ItemForm,
    /// Last list/search result for wishlists (None until the first one)
    pub wishlist_results: Option<ResultTable>,
    /// Last list result for items
    pub item_results: Option<ResultTable>,
    /// Flash message line
    pub status: String,
    /// Service name/version from `/`
    pub service: Option<ServiceInfo>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear button on the wishlist panel
    pub fn clear_wishlist_form(&mut self) {
        self.wishlist_form.clear();
    }

    /// Clear button on the item panel
    pub fn clear_item_form(&mut self) {
        self.item_form.clear();
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
