//! Flash Message Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Single status line, overwritten by every reconciled outcome
#[component]
pub fn FlashMessage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div id="flash_message" class="flash-message">
            {move || store.status().get()}
        </div>
    }
}
