//! Response Classification
//!
//! Sorts a raw status + body into success, structured server error, or
//! transport failure.

use serde_json::Value;

use crate::error::TransportError;
use crate::models::ErrorBody;

/// What came back over the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Classified result of one request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 2xx; `None` when the body was empty (e.g. 204)
    Success(Option<Value>),
    /// Non-2xx carrying `{message}`
    ServerError { status: u16, message: String },
    /// No structured guidance: network failure or unexpected shape
    TransportFailure(String),
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn into_outcome(self) -> Outcome {
        let text = self.body.trim();

        if self.is_success() {
            if text.is_empty() {
                return Outcome::Success(None);
            }
            return match serde_json::from_str::<Value>(text) {
                Ok(value) => Outcome::Success(Some(value)),
                Err(e) => Outcome::TransportFailure(format!("malformed response body: {}", e)),
            };
        }

        match serde_json::from_str::<ErrorBody>(text) {
            Ok(err) => Outcome::ServerError {
                status: self.status,
                message: err.message,
            },
            Err(_) => {
                Outcome::TransportFailure(format!("unexpected HTTP {} response", self.status))
            }
        }
    }
}

impl From<TransportError> for Outcome {
    fn from(err: TransportError) -> Self {
        Outcome::TransportFailure(err.to_string())
    }
}
