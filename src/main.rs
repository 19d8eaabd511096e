#![allow(warnings)]
//! Wishlist Console Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logger;
mod models;
mod query;
mod reconcile;
mod request;
mod response;
mod results;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_document();
    if let Err(err) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    log::info!("[APP] Starting, api base {:?}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
