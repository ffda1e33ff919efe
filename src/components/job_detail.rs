//! Job Detail Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{self, DETAIL_FAILED};
use crate::context::{use_app_context, ActiveModal, AppContext};
use crate::view::JobDetailView;

/// Fetch a listing and open it in the detail dialog.
///
/// Failure is reported with a blocking browser alert, not inline.
pub fn open_job_detail(ctx: AppContext, id: u64) {
    let api = ctx.api();
    spawn_local(async move {
        match catalog::get_job_detail(api.as_ref(), id).await {
            Ok(job) => ctx.open_modal(ActiveModal::JobDetail(JobDetailView::from_listing(&job))),
            Err(_) => {
                if let Some(window) = web_sys::window() {
                    if let Err(err) = window.alert_with_message(DETAIL_FAILED) {
                        log::error!("[CATALOG] could not show detail error alert: {:?}", err);
                    }
                }
            }
        }
    });
}

/// Body of the detail dialog
#[component]
pub fn JobDetail(detail: JobDetailView) -> impl IntoView {
    let ctx = use_app_context();
    let id = detail.id;

    view! {
        <div class="job-detail row">
            <div class="col-md-8">
                <h6>"Job Description"</h6>
                <p>{detail.description}</p>

                <h6 class="mt-4">"Requirements"</h6>
                <p>{detail.requirements}</p>

                <h6 class="mt-4">"Skills Required"</h6>
                <p>{detail.skills}</p>
            </div>
            <div class="col-md-4">
                <div class="card">
                    <div class="card-body">
                        <h6>"Job Details"</h6>
                        <p><strong>"Company: "</strong>{detail.company}</p>
                        <p><strong>"Location: "</strong>{detail.location}</p>
                        <p><strong>"Type: "</strong>{detail.job_type}</p>
                        <p><strong>"Experience: "</strong>{detail.experience_level}</p>
                        <p><strong>"Category: "</strong>{detail.category}</p>
                        <p><strong>"Salary: "</strong>{detail.salary}</p>
                        <p><strong>"Posted: "</strong>{detail.posted}</p>
                    </div>
                </div>
            </div>
            <div class="modal-footer">
                <button class="btn btn-primary" on:click=move |_| ctx.open_modal(ActiveModal::Apply(id))>
                    "Apply for this Job"
                </button>
            </div>
        </div>
    }
}
