//! Service Command Layer
//!
//! Transport seam plus the dispatcher that runs build → send → reconcile.

mod dispatcher;
mod fetch;

use async_trait::async_trait;

use crate::error::TransportResult;
use crate::request::ApiRequest;
use crate::response::RawResponse;

/// Sends one request and hands back status + body text
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> TransportResult<RawResponse>;
}

// Re-export all public items
pub use dispatcher::*;
pub use fetch::*;
