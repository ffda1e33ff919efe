//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::catalog::{CatalogCell, CatalogState, CatalogStats};
use crate::models::User;

/// How long a success toast stays up
const TOAST_MILLIS: u32 = 5_000;

/// Success message shown in the corner
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Fetched jobs and the filtered view
    pub catalog: CatalogState,
    /// Signed-in user, restored from storage at startup
    pub current_user: Option<User>,
    /// Search drop-down options
    pub categories: Vec<String>,
    /// Filter drop-down options
    pub job_types: Vec<String>,
    /// Location suggestions
    pub locations: Vec<String>,
    /// Stats strip; `None` until loaded or when loading failed
    pub stats: Option<CatalogStats>,
    pub toast: Option<Toast>,
    /// Last toast id handed out
    pub toast_seq: u64,
}

impl AppState {
    pub fn new(current_user: Option<User>) -> Self {
        Self {
            current_user,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

impl CatalogCell for AppStore {
    fn with_catalog<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        let field = self.catalog();
        let mut catalog = field.write();
        f(&mut *catalog)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Show a success toast that clears itself after a few seconds
pub fn store_show_toast(store: AppStore, message: &str) {
    let id = next_toast_id(store);
    store.toast().set(Some(Toast { id, message: message.to_string() }));

    spawn_local(async move {
        TimeoutFuture::new(TOAST_MILLIS).await;
        // A newer toast owns its own timer.
        if store.toast().get_untracked().map(|toast| toast.id) == Some(id) {
            store.toast().set(None);
        }
    });
}

fn next_toast_id(store: AppStore) -> u64 {
    let field = store.toast_seq();
    let mut seq = field.write();
    *seq += 1;
    *seq
}

/// Set or clear the signed-in user
pub fn store_set_user(store: AppStore, user: Option<User>) {
    store.current_user().set(user);
}
