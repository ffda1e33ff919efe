//! Job Directory Service
//!
//! The REST backend seen from the browser. `HttpJobDirectory` talks to the
//! real service; tests swap in an in-memory directory.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::catalog::SearchCriteria;
use crate::error::ClientResult;
use crate::models::{
    Application, Company, Credentials, JobListing, NewApplication, NewCompany, NewJob, Registration, User,
};

pub use http::HttpJobDirectory;

/// One method per backend endpoint the client consumes.
///
/// Futures are not `Send`: in the browser every request runs on the UI thread.
#[async_trait(?Send)]
pub trait JobDirectory {
    // ========================
    // Jobs
    // ========================

    /// `GET /jobs/active`
    async fn list_active_jobs(&self) -> ClientResult<Vec<JobListing>>;

    /// `GET /jobs/{id}`
    async fn get_job(&self, id: u64) -> ClientResult<JobListing>;

    /// `GET /jobs/search`, blank criteria omitted from the query string
    async fn search_jobs(&self, criteria: &SearchCriteria) -> ClientResult<Vec<JobListing>>;

    /// `GET /jobs/filters/categories`
    async fn list_categories(&self) -> ClientResult<Vec<String>>;

    /// `GET /jobs/filters/job-types`
    async fn list_job_types(&self) -> ClientResult<Vec<String>>;

    /// `GET /jobs/filters/locations`
    async fn list_locations(&self) -> ClientResult<Vec<String>>;

    /// `POST /jobs`
    async fn create_job(&self, job: &NewJob) -> ClientResult<JobListing>;

    // ========================
    // Companies
    // ========================

    /// `GET /companies`
    async fn list_companies(&self) -> ClientResult<Vec<Company>>;

    /// `GET /companies/user/{userId}`
    async fn companies_for_user(&self, user_id: u64) -> ClientResult<Vec<Company>>;

    /// `POST /companies`
    async fn create_company(&self, company: &NewCompany) -> ClientResult<Company>;

    // ========================
    // Auth
    // ========================

    /// `POST /auth/login`, unwrapping the `{user}` envelope
    async fn login(&self, credentials: &Credentials) -> ClientResult<User>;

    /// `POST /auth/register`, unwrapping the `{user}` envelope
    async fn register(&self, registration: &Registration) -> ClientResult<User>;

    // ========================
    // Applications
    // ========================

    /// `POST /applications`
    async fn submit_application(&self, application: &NewApplication) -> ClientResult<Application>;

    /// `GET /applications/user/{userId}`
    async fn applications_for_user(&self, user_id: u64) -> ClientResult<Vec<Application>>;
}
