//! UI Components
//!
//! Leptos components for the job board page.

mod apply_form;
mod filter_panel;
mod form_error;
mod job_detail;
mod job_list;
mod login_form;
mod modal;
mod my_applications;
mod nav_bar;
mod post_job_form;
mod register_form;
mod search_bar;
mod stats_strip;
mod toast;

pub use apply_form::ApplyForm;
pub use filter_panel::{FilterPanel, EXPERIENCE_LEVELS, SALARY_BANDS};
pub use form_error::FormError;
pub use job_detail::{open_job_detail, JobDetail};
pub use job_list::{JobCard, JobList};
pub use login_form::LoginForm;
pub use modal::{Modal, ModalHost};
pub use my_applications::MyApplications;
pub use nav_bar::NavBar;
pub use post_job_form::{PostJobForm, POSTING_JOB_TYPES};
pub use register_form::{RegisterForm, ROLES};
pub use search_bar::SearchBar;
pub use stats_strip::StatsStrip;
pub use toast::SuccessToast;
