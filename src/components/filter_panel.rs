//! Filter Panel Component
//!
//! Client-side filters. Any change re-filters the full catalog snapshot.

use leptos::prelude::*;

use crate::catalog::{apply_client_filters, FilterCriteria};
use crate::store::{use_app_store, AppStateStoreFields};

/// Experience level options (value, label)
pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("ENTRY", "Entry Level"),
    ("MID", "Mid Level"),
    ("SENIOR", "Senior Level"),
    ("EXECUTIVE", "Executive"),
];

/// Salary band options (value, label)
pub const SALARY_BANDS: &[(&str, &str)] = &[
    ("0-50000", "Up to $50,000"),
    ("50000-80000", "$50,000 - $80,000"),
    ("80000-120000", "$80,000 - $120,000"),
    ("120000+", "$120,000+"),
];

#[component]
pub fn FilterPanel() -> impl IntoView {
    let store = use_app_store();

    let (job_type, set_job_type) = signal(String::new());
    let (experience, set_experience) = signal(String::new());
    let (salary, set_salary) = signal(String::new());

    let apply = move || {
        let criteria = FilterCriteria::from_inputs(
            &job_type.get_untracked(),
            &experience.get_untracked(),
            &salary.get_untracked(),
        );
        apply_client_filters(&store, &criteria);
    };

    let clear = move |_| {
        set_job_type.set(String::new());
        set_experience.set(String::new());
        set_salary.set(String::new());
        apply();
    };

    view! {
        <aside class="filter-panel">
            <h6>"Filter Jobs"</h6>

            <label class="form-label">"Job Type"</label>
            <select
                id="filterJobType"
                class="form-select"
                prop:value=move || job_type.get()
                on:change=move |ev| {
                    set_job_type.set(event_target_value(&ev));
                    apply();
                }
            >
                <option value="">"All Types"</option>
                <For
                    each=move || store.job_types().get()
                    key=|job_type| job_type.clone()
                    children=|job_type| view! { <option value=job_type.clone()>{job_type.clone()}</option> }
                />
            </select>

            <label class="form-label">"Experience Level"</label>
            <select
                id="filterExperience"
                class="form-select"
                prop:value=move || experience.get()
                on:change=move |ev| {
                    set_experience.set(event_target_value(&ev));
                    apply();
                }
            >
                <option value="">"All Levels"</option>
                {EXPERIENCE_LEVELS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>

            <label class="form-label">"Salary Range"</label>
            <select
                id="filterSalary"
                class="form-select"
                prop:value=move || salary.get()
                on:change=move |ev| {
                    set_salary.set(event_target_value(&ev));
                    apply();
                }
            >
                <option value="">"Any Salary"</option>
                {SALARY_BANDS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>

            <button class="btn btn-outline-secondary w-100 mt-3" on:click=clear>
                "Clear Filters"
            </button>
        </aside>
    }
}
