//! Client Configuration
//!
//! Read from `data-*` attributes on `<body>`:
//! `<body data-api-base="http://localhost:5000" data-log-level="debug">`.

use log::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every request path; empty means same-origin
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Build from raw attribute values, falling back to defaults
    pub fn from_attributes(api_base: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Read overrides from the current document body
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attributes(
                body.get_attribute("data-api-base"),
                body.get_attribute("data-log-level"),
            ),
            None => Self::default(),
        }
    }
}
