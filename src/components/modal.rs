//! Modal Dialogs
//!
//! A plain dialog shell and the host that decides which dialog is open.

use leptos::prelude::*;

use crate::components::{ApplyForm, JobDetail, LoginForm, MyApplications, PostJobForm, RegisterForm};
use crate::context::{use_app_context, ActiveModal};

/// Dialog frame; clicking the backdrop or × closes it
#[component]
pub fn Modal(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="modal-backdrop" on:click=move |_| ctx.close_modal()>
            <div class="modal-dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h5 class="modal-title">{title}</h5>
                    <button type="button" class="btn-close" on:click=move |_| ctx.close_modal()>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}

/// Renders whichever dialog `AppContext::modal` names
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_app_context();

    move || match ctx.modal.get() {
        ActiveModal::None => ().into_any(),
        ActiveModal::Login => view! {
            <Modal title="Login"><LoginForm /></Modal>
        }.into_any(),
        ActiveModal::Register => view! {
            <Modal title="Register"><RegisterForm /></Modal>
        }.into_any(),
        ActiveModal::PostJob => view! {
            <Modal title="Post a Job"><PostJobForm /></Modal>
        }.into_any(),
        ActiveModal::Apply(job_id) => view! {
            <Modal title="Apply for Job"><ApplyForm job_id=job_id /></Modal>
        }.into_any(),
        ActiveModal::JobDetail(detail) => {
            let title = detail.title.clone();
            view! {
                <Modal title=title><JobDetail detail=detail /></Modal>
            }.into_any()
        }
        ActiveModal::MyApplications => view! {
            <Modal title="My Applications"><MyApplications /></Modal>
        }.into_any(),
    }
}
