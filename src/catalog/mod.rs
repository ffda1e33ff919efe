//! Job Catalog & Filter State
//!
//! Catalog operations run against an explicit `CatalogState` reached through
//! a `CatalogCell`, so the same code drives the app store and plain tests.
//! Every response goes through a `RequestTicket`: a response older than the
//! latest request of its kind is dropped. A load and a search are separate
//! kinds, so between them the later response still wins.

mod filter;
mod state;

use std::cell::RefCell;

use crate::api::JobDirectory;
use crate::error::ClientResult;
use crate::models::JobListing;

pub use filter::{FilterCriteria, SalaryBand, SearchCriteria};
pub use state::{CatalogPhase, CatalogState, RequestKind, RequestTicket};

pub const LOAD_FAILED: &str = "Failed to load jobs. Please try again.";
pub const SEARCH_FAILED: &str = "Failed to search jobs. Please try again.";
pub const DETAIL_FAILED: &str = "Failed to load job details. Please try again.";

/// Somewhere a `CatalogState` lives and can be mutated in place
pub trait CatalogCell {
    fn with_catalog<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R;
}

impl CatalogCell for RefCell<CatalogState> {
    fn with_catalog<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fetch all active jobs and replace the catalog with them.
///
/// No retry: on failure the list region shows `LOAD_FAILED`.
/// Returns whether the response was applied.
pub async fn load_initial_catalog<C: CatalogCell + ?Sized>(api: &dyn JobDirectory, cell: &C) -> bool {
    let ticket = cell.with_catalog(|state| state.begin(RequestKind::Load));
    match api.list_active_jobs().await {
        Ok(jobs) => {
            log::info!("[CATALOG] loaded {} active jobs", jobs.len());
            cell.with_catalog(|state| state.apply_load(ticket, jobs))
        }
        Err(err) => {
            log::error!("[CATALOG] error loading jobs: {}", err);
            cell.with_catalog(|state| state.apply_failure(ticket, LOAD_FAILED))
        }
    }
}

/// Ask the server for jobs matching `criteria` and show them.
///
/// Only the rendered view is replaced; the full snapshot that client-side
/// filters run against stays as it was.
pub async fn search_catalog<C: CatalogCell + ?Sized>(
    api: &dyn JobDirectory,
    cell: &C,
    criteria: &SearchCriteria,
) -> bool {
    let ticket = cell.with_catalog(|state| state.begin(RequestKind::Search));
    match api.search_jobs(criteria).await {
        Ok(jobs) => {
            log::info!("[CATALOG] search returned {} jobs", jobs.len());
            cell.with_catalog(|state| state.apply_search(ticket, jobs))
        }
        Err(err) => {
            log::error!("[CATALOG] error searching jobs: {}", err);
            cell.with_catalog(|state| state.apply_failure(ticket, SEARCH_FAILED))
        }
    }
}

/// Re-filter the full snapshot locally. No network, no error path.
pub fn apply_client_filters<C: CatalogCell + ?Sized>(cell: &C, criteria: &FilterCriteria) {
    cell.with_catalog(|state| state.apply_filters(criteria));
}

/// One listing for the detail view; independent of catalog state
pub async fn get_job_detail(api: &dyn JobDirectory, id: u64) -> ClientResult<JobListing> {
    api.get_job(id).await.map_err(|err| {
        log::error!("[CATALOG] error loading job details for {}: {}", id, err);
        err
    })
}

/// Options for the search and filter drop-downs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceData {
    pub categories: Vec<String>,
    pub job_types: Vec<String>,
    pub locations: Vec<String>,
}

/// Fetch drop-down options. Each list fails on its own and is left empty.
pub async fn load_reference_data(api: &dyn JobDirectory) -> ReferenceData {
    let (categories, job_types, locations) =
        futures::join!(api.list_categories(), api.list_job_types(), api.list_locations());
    ReferenceData {
        categories: categories.unwrap_or_else(|err| {
            log::error!("[CATALOG] error loading categories: {}", err);
            Vec::new()
        }),
        job_types: job_types.unwrap_or_else(|err| {
            log::error!("[CATALOG] error loading job types: {}", err);
            Vec::new()
        }),
        locations: locations.unwrap_or_else(|err| {
            log::warn!("[CATALOG] error loading locations: {}", err);
            Vec::new()
        }),
    }
}

/// Counters for the stats strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub active_jobs: usize,
    pub companies: usize,
}

/// Active-job and company counts, fetched concurrently; both or nothing
pub async fn load_stats(api: &dyn JobDirectory) -> ClientResult<CatalogStats> {
    let (jobs, companies) = futures::future::try_join(api.list_active_jobs(), api.list_companies())
        .await
        .map_err(|err| {
            log::error!("[CATALOG] error loading stats: {}", err);
            err
        })?;
    Ok(CatalogStats {
        active_jobs: jobs.len(),
        companies: companies.len(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::JobListing;

    pub fn job(id: u64, title: &str, min_salary: f64, max_salary: f64) -> JobListing {
        JobListing {
            id,
            title: title.to_string(),
            description: format!("{} description", title),
            requirements: String::new(),
            skills: None,
            location: Some("Remote".to_string()),
            job_type: Some("Full Time".to_string()),
            experience_level: None,
            category: None,
            min_salary,
            max_salary,
            created_at: Some("2024-01-15T10:30:00".to_string()),
            company: None,
            posted_by: None,
        }
    }
}
