//! Form Building Blocks
//!
//! Labelled text input, action button, and form phase badge.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::forms::FormPhase;
use crate::request::Action;

/// Labelled text input bound to one form field
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Button that dispatches one action.
///
/// Ids follow `<label>-btn` so the page can be driven by element id.
#[component]
pub fn ActionButton(id: &'static str, label: &'static str, action: Action) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button type="button" id=id class="action-btn" on:click=move |_| ctx.run(action)>
            {label}
        </button>
    }
}

/// Shows whether a form currently mirrors a server record
#[component]
pub fn PhaseBadge(#[prop(into)] phase: Signal<FormPhase>) -> impl IntoView {
    view! {
        <span class=move || match phase.get() {
            FormPhase::Loaded => "phase-badge loaded",
            FormPhase::Empty => "phase-badge empty",
        }>
            {move || match phase.get() {
                FormPhase::Loaded => "loaded",
                FormPhase::Empty => "empty",
            }}
        </span>
    }
}
