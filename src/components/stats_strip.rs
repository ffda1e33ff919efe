//! Stats Strip Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Active job and company counts; dashes until both have loaded
#[component]
pub fn StatsStrip() -> impl IntoView {
    let store = use_app_store();

    let count = move |pick: fn(&crate::catalog::CatalogStats) -> usize| {
        move || match store.stats().get() {
            Some(stats) => pick(&stats).to_string(),
            None => "–".to_string(),
        }
    };

    view! {
        <section class="stats-strip">
            <div class="stat">
                <span id="totalJobs" class="stat-value">{count(|stats| stats.active_jobs)}</span>
                <span class="stat-label">"Active Jobs"</span>
            </div>
            <div class="stat">
                <span id="totalCompanies" class="stat-value">{count(|stats| stats.companies)}</span>
                <span class="stat-label">"Companies"</span>
            </div>
        </section>
    }
}
