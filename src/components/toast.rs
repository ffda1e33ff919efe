//! Success Toast Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Corner notification for successful submissions
#[component]
pub fn SuccessToast() -> impl IntoView {
    let store = use_app_store();

    move || {
        store.toast().get().map(|toast| view! {
            <div class="alert alert-success toast-corner" role="status">
                <span class="alert-icon">"✔"</span>
                {toast.message}
                <button type="button" class="btn-close" on:click=move |_| store.toast().set(None)>
                    "×"
                </button>
            </div>
        })
    }
}
