//! UI Components
//!
//! Reusable Leptos components.

mod flash_message;
mod form_field;
mod item_panel;
mod result_table;
mod wishlist_panel;

pub use flash_message::FlashMessage;
pub use form_field::{ActionButton, FormField, PhaseBadge};
pub use item_panel::ItemPanel;
pub use result_table::ResultTableView;
pub use wishlist_panel::WishlistPanel;
