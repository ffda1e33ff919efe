//! Search Bar Component
//!
//! Title, location and category search sent to the server. Enter in either
//! text field submits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::{search_catalog, SearchCriteria};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let run_search = move || {
        let criteria = SearchCriteria {
            title: title.get_untracked(),
            location: location.get_untracked(),
            category: category.get_untracked(),
        };
        let api = ctx.api();
        spawn_local(async move {
            search_catalog(api.as_ref(), &store, &criteria).await;
        });
    };

    let on_enter = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            run_search();
        }
    };

    view! {
        <div class="search-bar row g-2">
            <div class="col-md-4">
                <input
                    id="jobSearch"
                    type="text"
                    class="form-control"
                    placeholder="Job title or keywords"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
            </div>
            <div class="col-md-3">
                <input
                    id="locationSearch"
                    type="text"
                    class="form-control"
                    placeholder="Location"
                    list="locationOptions"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    on:keydown=on_enter
                />
                <datalist id="locationOptions">
                    <For
                        each=move || store.locations().get()
                        key=|location| location.clone()
                        children=|location| view! { <option value=location></option> }
                    />
                </datalist>
            </div>
            <div class="col-md-3">
                <select
                    id="categorySearch"
                    class="form-select"
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"All Categories"</option>
                    <For
                        each=move || store.categories().get()
                        key=|category| category.clone()
                        children=|category| view! { <option value=category.clone()>{category.clone()}</option> }
                    />
                </select>
            </div>
            <div class="col-md-2">
                <button class="btn btn-primary w-100" on:click=move |_| run_search()>
                    "Search"
                </button>
            </div>
        </div>
    }
}
