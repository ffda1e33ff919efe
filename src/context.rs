//! Application Context
//!
//! Shared handles and modal state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::JobDirectory;
use crate::storage::{BrowserStorage, IdentityStore};
use crate::view::JobDetailView;

/// Which dialog is open (at most one at a time)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveModal {
    #[default]
    None,
    Login,
    Register,
    PostJob,
    /// Apply form for the given job id
    Apply(u64),
    JobDetail(JobDetailView),
    MyApplications,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend client (browser-local, hence `LocalStorage`)
    api: StoredValue<Rc<dyn JobDirectory>, LocalStorage>,
    /// Persisted session record
    identity: StoredValue<Rc<IdentityStore<BrowserStorage>>, LocalStorage>,
    /// Open dialog - read
    pub modal: ReadSignal<ActiveModal>,
    /// Open dialog - write
    set_modal: WriteSignal<ActiveModal>,
    /// Bumped to reload the catalog and stats - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to reload the catalog and stats - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(api: Rc<dyn JobDirectory>, identity: IdentityStore<BrowserStorage>) -> Self {
        let (modal, set_modal) = signal(ActiveModal::None);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            api: StoredValue::new_local(api),
            identity: StoredValue::new_local(Rc::new(identity)),
            modal,
            set_modal,
            reload_trigger,
            set_reload_trigger,
        }
    }

    pub fn api(&self) -> Rc<dyn JobDirectory> {
        self.api.get_value()
    }

    pub fn identity(&self) -> Rc<IdentityStore<BrowserStorage>> {
        self.identity.get_value()
    }

    pub fn open_modal(&self, modal: ActiveModal) {
        self.set_modal.set(modal);
    }

    pub fn close_modal(&self) {
        self.set_modal.set(ActiveModal::None);
    }

    /// Reload the catalog from the server
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
