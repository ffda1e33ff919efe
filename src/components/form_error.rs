//! Inline form error banner

use leptos::prelude::*;

/// Red alert above a form; hidden while `error` is `None`
#[component]
pub fn FormError(error: ReadSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| view! {
            <div class="alert alert-danger" role="alert">
                <span class="alert-icon">"⚠"</span>
                {message}
            </div>
        })
    }
}
