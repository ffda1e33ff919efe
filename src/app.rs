//! Job Board Frontend App
//!
//! Wires the backend client, the saved session and the store together,
//! then lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{HttpJobDirectory, JobDirectory};
use crate::catalog;
use crate::components::{FilterPanel, JobList, ModalHost, NavBar, SearchBar, StatsStrip, SuccessToast};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::storage::{BrowserStorage, IdentityStore};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::resolve();
    log::info!("[APP] API base {}", config.api_base_url);

    let identity = IdentityStore::new(BrowserStorage::open(), config.identity_key.clone());
    let store: AppStore = Store::new(AppState::new(identity.load()));
    provide_context(store);

    let api: Rc<dyn JobDirectory> = Rc::new(HttpJobDirectory::new(config));
    let ctx = AppContext::new(api, identity);
    provide_context(ctx);

    // Catalog and stats, again whenever a job is posted
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::info!("[APP] loading catalog, trigger={}", trigger);
        let api = ctx.api();
        spawn_local(async move {
            catalog::load_initial_catalog(api.as_ref(), &store).await;
            store.stats().set(catalog::load_stats(api.as_ref()).await.ok());
        });
    });

    // Drop-down options, once
    let api = ctx.api();
    spawn_local(async move {
        let reference = catalog::load_reference_data(api.as_ref()).await;
        store.categories().set(reference.categories);
        store.job_types().set(reference.job_types);
        store.locations().set(reference.locations);
    });

    view! {
        <div class="app-layout">
            <NavBar />

            <header class="hero">
                <div class="container">
                    <h1>"Find Your Dream Job"</h1>
                    <SearchBar />
                    <StatsStrip />
                </div>
            </header>

            <main class="container main-content">
                <div class="row">
                    <div class="col-lg-3">
                        <FilterPanel />
                    </div>
                    <div class="col-lg-9">
                        <JobList />
                    </div>
                </div>
            </main>

            <ModalHost />
            <SuccessToast />
        </div>
    }
}
