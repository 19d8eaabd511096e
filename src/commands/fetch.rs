//! Browser Fetch Transport
//!
//! Issues requests through `window.fetch`. HTTP error statuses resolve
//! normally; only network-level failures surface as `TransportError`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::Transport;
use crate::error::{TransportError, TransportResult};
use crate::request::ApiRequest;
use crate::response::RawResponse;

/// `fetch`-backed transport rooted at `base_url`
#[derive(Debug, Clone)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: &ApiRequest) -> TransportResult<RawResponse> {
        let url = request.url(&self.base_url);

        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = request.body_json() {
            init.set_body(&JsValue::from_str(&body));
        }

        let js_request = Request::new_with_str_and_init(&url, &init)
            .map_err(|e| TransportError::Request(js_error(&e)))?;
        let headers = js_request.headers();
        headers
            .set("Content-Type", "application/json")
            .and_then(|_| headers.set("Accept", "application/json"))
            .map_err(|e| TransportError::Request(js_error(&e)))?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Request("no window available".to_string()))?;
        let response_value = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(|e| TransportError::Network(js_error(&e)))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|e| TransportError::Body(js_error(&e)))?;

        let text_promise: js_sys::Promise = response
            .text()
            .map_err(|e| TransportError::Body(js_error(&e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| TransportError::Body(js_error(&e)))?;

        Ok(RawResponse::new(response.status(), text.as_string().unwrap_or_default()))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
