//! Transport Errors

use thiserror::Error;

/// Failures that happen before a structured response is available
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Body error: {0}")]
    Body(String),
}

pub type TransportResult<T> = Result<T, TransportError>;
