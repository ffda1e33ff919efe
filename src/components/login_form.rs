//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormError;
use crate::context::use_app_context;
use crate::models::Credentials;
use crate::session;
use crate::store::{store_set_user, store_show_toast, use_app_store};
use crate::submissions::Submission;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let api = ctx.api();
        let identity = ctx.identity();
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            let result = session::login(api.as_ref(), identity.as_ref(), &credentials).await;
            set_pending.set(false);
            match result {
                Ok(user) => {
                    set_username.set(String::new());
                    set_password.set(String::new());
                    store_set_user(store, Some(user));
                    ctx.close_modal();
                    store_show_toast(store, Submission::Login.succeeded());
                }
                Err(err) => set_error.set(Some(Submission::Login.error_text(&err))),
            }
        });
    };

    view! {
        <form id="loginForm" on:submit=on_submit>
            <FormError error=error />
            <div class="mb-3">
                <label class="form-label" for="loginUsername">"Username"</label>
                <input
                    id="loginUsername"
                    type="text"
                    class="form-control"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="loginPassword">"Password"</label>
                <input
                    id="loginPassword"
                    type="password"
                    class="form-control"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary w-100" disabled=move || pending.get()>
                {move || if pending.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}
