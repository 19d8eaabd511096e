//! Frontend Models
//!
//! Data structures matching the wishlist service's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wishlist record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wishlist_name: String,
}

/// Item record as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub wishlist_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

/// Structured error payload (`{status, error, message}`); only `message` is required
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

/// Body echoed by delete / clear endpoints, which may carry just an id
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct IdEcho {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
}

/// Service descriptor served at `/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
}

/// The service keys rows with integers while forms carry text, so accept both.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
