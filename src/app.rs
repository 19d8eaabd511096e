//! Wishlist Console App
//!
//! Root component: wishlist panel, item panel, their result tables and the
//! flash message line.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{Dispatcher, FetchTransport};
use crate::components::{FlashMessage, ItemPanel, ResultTableView, WishlistPanel};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::request::Action;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let dispatcher = Dispatcher::new(FetchTransport::new(config.api_base));
    let ctx = AppContext::new(dispatcher, store);
    provide_context(ctx.clone());

    // Service banner on mount
    ctx.run(Action::ServiceInfo);

    let banner = move || {
        store
            .service()
            .get()
            .map(|info| format!("{} v{}", info.name, info.version))
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Wishlist Console"</h1>
                <span class="service-banner">
                    {banner}
                </span>
            </header>

            <FlashMessage />

            <main class="panels">
                <div class="column">
                    <WishlistPanel />
                    <ResultTableView
                        id="wishlist_results"
                        table=Signal::derive(move || store.wishlist_results().get())
                    />
                </div>
                <div class="column">
                    <ItemPanel />
                    <ResultTableView
                        id="item_results"
                        table=Signal::derive(move || store.item_results().get())
                    />
                </div>
            </main>
        </div>
    }
}
