//! Form State
//!
//! Editable field snapshots for the wishlist and item panels.
//! Each form is either `Empty` or `Loaded`. In-place edits are written
//! through on the next submit.

use crate::models::{Item, Wishlist};

/// Lifecycle of a form panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Empty,
    Loaded,
}

/// Wishlist panel fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WishlistForm {
    pub wishlist_id: String,
    pub customer_id: String,
    pub wishlist_name: String,
    pub phase: FormPhase,
}

impl WishlistForm {
    /// Overwrite every field from a server record
    pub fn load(&mut self, wishlist: &Wishlist) {
        *self = Self {
            wishlist_id: wishlist.id.clone(),
            customer_id: wishlist.customer_id.clone(),
            wishlist_name: wishlist.wishlist_name.clone(),
            phase: FormPhase::Loaded,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Item panel fields
///
/// `wishlist_id` is display-only: requests take the parent id from the
/// wishlist panel, never from here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemForm {
    pub item_id: String,
    pub wishlist_id: String,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub phase: FormPhase,
}

impl ItemForm {
    /// Overwrite every field from a server record
    pub fn load(&mut self, item: &Item) {
        *self = Self {
            item_id: item.id.clone(),
            wishlist_id: item.wishlist_id.clone(),
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            phase: FormPhase::Loaded,
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
