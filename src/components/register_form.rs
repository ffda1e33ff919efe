//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormError;
use crate::context::use_app_context;
use crate::models::Registration;
use crate::session;
use crate::store::{store_set_user, store_show_toast, use_app_store};
use crate::submissions::Submission;

/// Account roles (value, label)
pub const ROLES: &[(&str, &str)] = &[("JOB_SEEKER", "Job Seeker"), ("EMPLOYER", "Employer")];

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal(ROLES[0].0.to_string());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let reset = move || {
        set_first_name.set(String::new());
        set_last_name.set(String::new());
        set_username.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
        set_role.set(ROLES[0].0.to_string());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let registration = Registration {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let api = ctx.api();
        let identity = ctx.identity();
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            let result = session::register(api.as_ref(), identity.as_ref(), &registration).await;
            set_pending.set(false);
            match result {
                Ok(user) => {
                    reset();
                    store_set_user(store, Some(user));
                    ctx.close_modal();
                    store_show_toast(store, Submission::Register.succeeded());
                }
                Err(err) => set_error.set(Some(Submission::Register.error_text(&err))),
            }
        });
    };

    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <div class="mb-3">
                <label class="form-label" for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    class="form-control"
                    required
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <form id="registerForm" on:submit=on_submit>
            <FormError error=error />
            <div class="row">
                <div class="col-md-6">{text_field("regFirstName", "First Name", "text", first_name, set_first_name)}</div>
                <div class="col-md-6">{text_field("regLastName", "Last Name", "text", last_name, set_last_name)}</div>
            </div>
            {text_field("regUsername", "Username", "text", username, set_username)}
            {text_field("regEmail", "Email", "email", email, set_email)}
            {text_field("regPassword", "Password", "password", password, set_password)}
            <div class="mb-3">
                <label class="form-label" for="regRole">"I am a"</label>
                <select
                    id="regRole"
                    class="form-select"
                    prop:value=move || role.get()
                    on:change=move |ev| set_role.set(event_target_value(&ev))
                >
                    {ROLES.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>
            <button type="submit" class="btn btn-primary w-100" disabled=move || pending.get()>
                {move || if pending.get() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}
