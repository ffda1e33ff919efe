//! Navigation Bar Component
//!
//! Brand, the post-job entry point and the session controls.

use leptos::prelude::*;

use crate::context::{use_app_context, ActiveModal};
use crate::session;
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};
use crate::view::user_badge;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let logout = move || {
        if let Err(err) = session::logout(ctx.identity().as_ref()) {
            log::error!("[SESSION] error clearing saved user: {}", err);
        }
        set_menu_open.set(false);
        store_set_user(store, None);
    };

    let session_controls = move || match store.current_user().get() {
        None => view! {
            <button class="btn btn-outline-light me-2" on:click=move |_| ctx.open_modal(ActiveModal::Login)>
                "Login"
            </button>
            <button class="btn btn-light" on:click=move |_| ctx.open_modal(ActiveModal::Register)>
                "Register"
            </button>
        }
        .into_any(),
        Some(user) => view! {
            <div class="dropdown">
                <button class="btn btn-outline-light dropdown-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    {user_badge(&user)}
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="dropdown-menu show">
                        <li>
                            <a class="dropdown-item" href="#" on:click=move |ev| {
                                ev.prevent_default();
                                set_menu_open.set(false);
                                ctx.open_modal(ActiveModal::MyApplications);
                            }>
                                "My Applications"
                            </a>
                        </li>
                        <li>
                            <a class="dropdown-item" href="#" on:click=move |ev| {
                                ev.prevent_default();
                                logout();
                            }>
                                "Logout"
                            </a>
                        </li>
                    </ul>
                </Show>
            </div>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar navbar-dark bg-primary">
            <div class="container">
                <a class="navbar-brand" href="#">"JobBoard"</a>
                <div class="d-flex align-items-center">
                    <button class="btn btn-warning me-3" on:click=move |_| ctx.open_modal(ActiveModal::PostJob)>
                        "Post a Job"
                    </button>
                    {session_controls}
                </div>
            </div>
        </nav>
    }
}
