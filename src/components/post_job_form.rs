//! Post Job Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FormError;
use crate::context::use_app_context;
use crate::models::JobDraft;
use crate::store::{store_show_toast, use_app_store, AppStateStoreFields};
use crate::submissions::{self, CompanyPolicy, Submission};

/// Job type options offered when posting (value, label)
pub const POSTING_JOB_TYPES: &[(&str, &str)] = &[
    ("FULL_TIME", "Full Time"),
    ("PART_TIME", "Part Time"),
    ("CONTRACT", "Contract"),
    ("INTERNSHIP", "Internship"),
];

const INVALID_SALARY: &str = "Please enter valid salary amounts";

/// Parse a salary field; blank or non-numeric is `None`
fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[component]
pub fn PostJobForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (requirements, set_requirements) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (job_type, set_job_type) = signal(POSTING_JOB_TYPES[0].0.to_string());
    let (category, set_category) = signal(String::new());
    let (min_salary, set_min_salary) = signal(String::new());
    let (max_salary, set_max_salary) = signal(String::new());
    let (create_company, set_create_company) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let (Some(min), Some(max)) = (
            parse_salary(&min_salary.get_untracked()),
            parse_salary(&max_salary.get_untracked()),
        ) else {
            set_error.set(Some(INVALID_SALARY.to_string()));
            return;
        };
        let draft = JobDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            requirements: requirements.get_untracked(),
            location: location.get_untracked(),
            job_type: job_type.get_untracked(),
            category: category.get_untracked(),
            min_salary: min,
            max_salary: max,
        };
        let policy = if create_company.get_untracked() {
            CompanyPolicy::EnsureExists
        } else {
            CompanyPolicy::AttachExisting
        };
        let user = store.current_user().get_untracked();
        let api = ctx.api();
        set_error.set(None);
        set_pending.set(true);

        spawn_local(async move {
            let result = submissions::post_job(api.as_ref(), user.as_ref(), draft, policy).await;
            set_pending.set(false);
            match result {
                Ok(job) => {
                    log::info!("[SUBMIT] posted job {}", job.id);
                    ctx.close_modal();
                    store_show_toast(store, Submission::PostJob.succeeded());
                    ctx.reload();
                }
                Err(err) => set_error.set(Some(Submission::PostJob.error_text(&err))),
            }
        });
    };

    view! {
        <form id="postJobForm" on:submit=on_submit>
            <FormError error=error />
            <div class="mb-3">
                <label class="form-label" for="jobTitle">"Job Title"</label>
                <input
                    id="jobTitle"
                    type="text"
                    class="form-control"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>
            <div class="mb-3">
                <label class="form-label" for="jobDescription">"Description"</label>
                <textarea
                    id="jobDescription"
                    class="form-control"
                    rows="4"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="mb-3">
                <label class="form-label" for="jobRequirements">"Requirements"</label>
                <textarea
                    id="jobRequirements"
                    class="form-control"
                    rows="3"
                    required
                    prop:value=move || requirements.get()
                    on:input=move |ev| set_requirements.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="jobLocation">"Location"</label>
                    <input
                        id="jobLocation"
                        type="text"
                        class="form-control"
                        required
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="jobType">"Job Type"</label>
                    <select
                        id="jobType"
                        class="form-select"
                        prop:value=move || job_type.get()
                        on:change=move |ev| set_job_type.set(event_target_value(&ev))
                    >
                        {POSTING_JOB_TYPES.iter().map(|(value, label)| view! {
                            <option value=*value>{*label}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="mb-3">
                <label class="form-label" for="jobCategory">"Category"</label>
                <select
                    id="jobCategory"
                    class="form-select"
                    required
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    <For
                        each=move || store.categories().get()
                        key=|category| category.clone()
                        children=|category| view! { <option value=category.clone()>{category.clone()}</option> }
                    />
                </select>
            </div>
            <div class="row">
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="minSalary">"Minimum Salary"</label>
                    <input
                        id="minSalary"
                        type="number"
                        class="form-control"
                        required
                        prop:value=move || min_salary.get()
                        on:input=move |ev| set_min_salary.set(event_target_value(&ev))
                    />
                </div>
                <div class="col-md-6 mb-3">
                    <label class="form-label" for="maxSalary">"Maximum Salary"</label>
                    <input
                        id="maxSalary"
                        type="number"
                        class="form-control"
                        required
                        prop:value=move || max_salary.get()
                        on:input=move |ev| set_max_salary.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="form-check mb-3">
                <input
                    id="createCompany"
                    type="checkbox"
                    class="form-check-input"
                    prop:checked=move || create_company.get()
                    on:change=move |ev| set_create_company.set(event_target_checked(&ev))
                />
                <label class="form-check-label" for="createCompany">
                    "Create a company profile for me if I don't have one"
                </label>
            </div>
            <button type="submit" class="btn btn-primary w-100" disabled=move || pending.get()>
                {move || if pending.get() { "Posting..." } else { "Post Job" }}
            </button>
        </form>
    }
}
