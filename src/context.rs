//! Application Context
//!
//! Shared handle provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{Dispatcher, FetchTransport};
use crate::request::Action;
use crate::store::{AppState, AppStore};

/// Dispatcher plus the store it reconciles into
#[derive(Clone)]
pub struct AppContext {
    dispatcher: Dispatcher<FetchTransport>,
    store: AppStore,
}

impl AppContext {
    pub fn new(dispatcher: Dispatcher<FetchTransport>, store: AppStore) -> Self {
        Self { dispatcher, store }
    }

    /// Build from the forms as they are now, send, and reconcile on arrival.
    /// Does not wait for earlier triggers.
    pub fn run(&self, action: Action) {
        let ticket = self
            .store
            .with_untracked(|state: &AppState| self.dispatcher.issue(action, state));
        let dispatcher = self.dispatcher.clone();
        let store = self.store;

        spawn_local(async move {
            let completion = dispatcher.send(ticket).await;
            store.update(|state| completion.apply(state));
        });
    }
}
