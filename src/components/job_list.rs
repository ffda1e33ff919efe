//! Job List Component
//!
//! Renders the catalog's current `JobListView`.

use leptos::prelude::*;

use crate::components::open_job_detail;
use crate::context::{use_app_context, ActiveModal};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{JobCardView, JobListView};

#[component]
pub fn JobList() -> impl IntoView {
    let store = use_app_store();

    let list_view = move || JobListView::from_state(&*store.catalog().read());

    view! {
        <div id="jobsList" class="jobs-list">
            {move || match list_view() {
                JobListView::Loading => view! {
                    <div class="loading">
                        <div class="spinner-border" role="status"></div>
                        <p class="mt-2">"Loading..."</p>
                    </div>
                }.into_any(),
                JobListView::Failed(message) => view! {
                    <div class="alert alert-danger" role="alert">
                        <span class="alert-icon">"⚠"</span>
                        {message}
                    </div>
                }.into_any(),
                JobListView::Empty => view! {
                    <div class="no-results text-center py-5">
                        <h5 class="text-muted">"No jobs found"</h5>
                        <p class="text-muted">"Try adjusting your search criteria or check back later."</p>
                    </div>
                }.into_any(),
                JobListView::Jobs(cards) => cards
                    .into_iter()
                    .map(|card| view! { <JobCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

/// One listing in the list
#[component]
pub fn JobCard(card: JobCardView) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    view! {
        <div class="job-card">
            <div class="job-card-header">
                <div>
                    <h5 class="job-title">{card.title}</h5>
                    <p class="company-name">{card.company}</p>
                    <p class="job-location">{card.location}</p>
                </div>
                <div class="text-end">
                    <span class="job-type">{card.job_type}</span>
                    <div class="salary">{card.salary}</div>
                </div>
            </div>

            <p class="job-summary text-muted">{card.summary}</p>

            <div class="job-card-footer">
                <small class="text-muted">"Posted " {card.posted}</small>
                <div>
                    <button class="btn btn-outline-primary btn-sm" on:click=move |_| open_job_detail(ctx, id)>
                        "View Details"
                    </button>
                    <button class="btn btn-primary btn-sm" on:click=move |_| ctx.open_modal(ActiveModal::Apply(id))>
                        "Apply Now"
                    </button>
                </div>
            </div>
        </div>
    }
}
