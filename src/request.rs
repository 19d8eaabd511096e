//! Request Builder
//!
//! Turns one action plus the current form snapshot into a request
//! descriptor. Building never fails: blank or malformed fields pass through
//! and the service reports them.

use serde::Serialize;

use crate::forms::{ItemForm, WishlistForm};
use crate::query::{compose_query, search_filters};

// ========================
// Actions
// ========================

/// HTTP verbs used by the wishlist service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Everything the operator can trigger against the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateWishlist,
    UpdateWishlist,
    RetrieveWishlist,
    DeleteWishlist,
    ClearWishlistItems,
    ListWishlists,
    SearchWishlists,
    ListItems,
    AddItem,
    UpdateItem,
    RetrieveItem,
    DeleteItem,
    ServiceInfo,
}

/// State object an action reconciles into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    WishlistForm,
    ItemForm,
    WishlistResults,
    ItemResults,
    Banner,
}

impl Action {
    pub fn target(&self) -> Target {
        match self {
            Action::CreateWishlist
            | Action::UpdateWishlist
            | Action::RetrieveWishlist
            | Action::DeleteWishlist
            | Action::ClearWishlistItems => Target::WishlistForm,
            Action::ListWishlists | Action::SearchWishlists => Target::WishlistResults,
            Action::ListItems => Target::ItemResults,
            Action::AddItem | Action::UpdateItem | Action::RetrieveItem | Action::DeleteItem => {
                Target::ItemForm
            }
            Action::ServiceInfo => Target::Banner,
        }
    }

    /// Retrieve-class actions reset their form when the service rejects them
    pub fn is_retrieve(&self) -> bool {
        matches!(self, Action::RetrieveWishlist | Action::RetrieveItem)
    }
}

// ========================
// Request Bodies
// ========================

/// Body sent on create wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWishlistBody {
    pub customer_id: String,
    pub wishlist_name: String,
}

/// Body sent on update wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistUpdateBody {
    pub wishlist_id: String,
    pub wishlist_name: String,
    pub customer_id: String,
}

/// Body sent on add / update item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemBody {
    pub product_id: String,
    pub name: String,
    pub description: String,
}

/// Flat JSON object carried by a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    NewWishlist(NewWishlistBody),
    WishlistUpdate(WishlistUpdateBody),
    Item(ItemBody),
}

/// Fully built request, ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<RequestBody>,
    pub query: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
            query: None,
        }
    }

    fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Absolute or same-origin URL for this request
    pub fn url(&self, base: &str) -> String {
        match &self.query {
            Some(query) if !query.is_empty() => format!("{}{}?{}", base, self.path, query),
            _ => format!("{}{}", base, self.path),
        }
    }

    /// Serialized body, if any
    pub fn body_json(&self) -> Option<String> {
        // Bodies are flat string maps, serialization cannot fail
        self.body.as_ref().and_then(|b| serde_json::to_string(b).ok())
    }
}

// ========================
// Builder
// ========================

/// Build the request for `action` from the forms as they are right now.
pub fn build_request(action: Action, wishlist: &WishlistForm, item: &ItemForm) -> ApiRequest {
    let wishlist_path = format!("/wishlists/{}", wishlist.wishlist_id);
    let items_path = format!("{}/items", wishlist_path);
    let item_path = format!("{}/{}", items_path, item.item_id);

    match action {
        Action::CreateWishlist => ApiRequest::new(Method::Post, "/wishlists".to_string())
            .with_body(RequestBody::NewWishlist(NewWishlistBody {
                customer_id: wishlist.customer_id.clone(),
                wishlist_name: wishlist.wishlist_name.clone(),
            })),
        Action::UpdateWishlist => ApiRequest::new(Method::Put, wishlist_path)
            .with_body(RequestBody::WishlistUpdate(WishlistUpdateBody {
                wishlist_id: wishlist.wishlist_id.clone(),
                wishlist_name: wishlist.wishlist_name.clone(),
                customer_id: wishlist.customer_id.clone(),
            })),
        Action::RetrieveWishlist => ApiRequest::new(Method::Get, wishlist_path),
        Action::DeleteWishlist => ApiRequest::new(Method::Delete, wishlist_path),
        Action::ClearWishlistItems => {
            ApiRequest::new(Method::Put, format!("{}/clear", wishlist_path))
        }
        Action::ListWishlists => ApiRequest::new(Method::Get, "/wishlists".to_string()),
        Action::SearchWishlists => ApiRequest {
            query: compose_query(&search_filters(wishlist)),
            ..ApiRequest::new(Method::Get, "/wishlists".to_string())
        },
        Action::ListItems => ApiRequest::new(Method::Get, items_path),
        Action::AddItem => ApiRequest::new(Method::Post, items_path)
            .with_body(RequestBody::Item(item_body(item))),
        Action::UpdateItem => ApiRequest::new(Method::Put, item_path)
            .with_body(RequestBody::Item(item_body(item))),
        Action::RetrieveItem => ApiRequest::new(Method::Get, format!("/items/{}", item.item_id)),
        Action::DeleteItem => ApiRequest::new(Method::Delete, item_path),
        Action::ServiceInfo => ApiRequest::new(Method::Get, "/".to_string()),
    }
}

fn item_body(item: &ItemForm) -> ItemBody {
    ItemBody {
        product_id: item.product_id.clone(),
        name: item.name.clone(),
        description: item.description.clone(),
    }
}
