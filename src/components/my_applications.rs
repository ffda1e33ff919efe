//! My Applications Component
//!
//! Fetches the signed-in user's applications once when the dialog opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::error::ClientError;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::submissions;
use crate::view::ApplicationView;

const LOAD_APPLICATIONS_FAILED: &str = "Failed to load applications. Please try again.";
const LOGIN_REQUIRED: &str = "Please login to view your applications";

#[derive(Clone)]
enum Rows {
    Loading,
    Failed(String),
    Loaded(Vec<ApplicationView>),
}

#[component]
pub fn MyApplications() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (rows, set_rows) = signal(Rows::Loading);

    let user = store.current_user().get_untracked();
    let api = ctx.api();
    spawn_local(async move {
        let next = match submissions::my_applications(api.as_ref(), user.as_ref()).await {
            Ok(applications) => Rows::Loaded(applications.iter().map(ApplicationView::from_application).collect()),
            Err(ClientError::NotLoggedIn) => Rows::Failed(LOGIN_REQUIRED.to_string()),
            Err(_) => Rows::Failed(LOAD_APPLICATIONS_FAILED.to_string()),
        };
        set_rows.set(next);
    });

    move || match rows.get() {
        Rows::Loading => view! {
            <div class="text-center py-3"><div class="spinner-border" role="status"></div></div>
        }
        .into_any(),
        Rows::Failed(message) => view! {
            <div class="alert alert-danger">{message}</div>
        }
        .into_any(),
        Rows::Loaded(list) if list.is_empty() => view! {
            <p class="text-muted">"You haven't applied to any jobs yet."</p>
        }
        .into_any(),
        Rows::Loaded(list) => view! {
            <table class="table">
                <thead>
                    <tr><th>"Job"</th><th>"Status"</th><th>"Applied"</th></tr>
                </thead>
                <tbody>
                    {list.into_iter().map(|row| view! {
                        <tr>
                            <td>{row.job}</td>
                            <td><span class="badge bg-secondary">{row.status}</span></td>
                            <td>{row.applied}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
