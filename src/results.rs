//! Result Tables
//!
//! Read-only row sets produced by list and search actions.

use crate::models::{Item, Wishlist};

/// Column headers for wishlist results
pub const WISHLIST_COLUMNS: &[&str] = &["ID", "Customer ID", "Wishlist Name"];

/// Column headers for item results
pub const ITEM_COLUMNS: &[&str] = &["Wishlist ID", "Product ID", "Name", "Description"];

/// Rendered table: fixed headers plus one row per record, in server order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn wishlists(records: &[Wishlist]) -> Self {
        Self {
            columns: WISHLIST_COLUMNS,
            rows: records
                .iter()
                .map(|w| vec![w.id.clone(), w.customer_id.clone(), w.wishlist_name.clone()])
                .collect(),
        }
    }

    pub fn items(records: &[Item]) -> Self {
        Self {
            columns: ITEM_COLUMNS,
            rows: records
                .iter()
                .map(|i| {
                    vec![
                        i.wishlist_id.clone(),
                        i.product_id.clone(),
                        i.name.clone(),
                        i.description.clone(),
                    ]
                })
                .collect(),
        }
    }

    /// No rows; the header is still rendered
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
