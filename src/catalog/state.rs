//! Catalog State
//!
//! The fetched job set plus the view derived from it. Owned by whoever
//! drives the catalog (the app store, or a `RefCell` in tests) and passed
//! into every operation.

use super::filter::FilterCriteria;
use crate::models::JobListing;

/// Which kind of round-trip produced a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Load,
    Search,
}

/// Issued when a request starts; the response is applied only if the ticket
/// is still the latest one of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    seq: u64,
}

impl RequestTicket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// What the list region is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    all_jobs: Vec<JobListing>,
    filtered_jobs: Vec<JobListing>,
    phase: CatalogPhase,
    load_seq: u64,
    search_seq: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything from the last full load, in server order
    pub fn all_jobs(&self) -> &[JobListing] {
        &self.all_jobs
    }

    /// What gets rendered
    pub fn filtered_jobs(&self) -> &[JobListing] {
        &self.filtered_jobs
    }

    pub fn phase(&self) -> &CatalogPhase {
        &self.phase
    }

    /// Start a request of `kind`, superseding any earlier one of the same kind
    pub fn begin(&mut self, kind: RequestKind) -> RequestTicket {
        let seq = match kind {
            RequestKind::Load => {
                self.load_seq += 1;
                self.load_seq
            }
            RequestKind::Search => {
                self.search_seq += 1;
                self.search_seq
            }
        };
        self.phase = CatalogPhase::Loading;
        RequestTicket { kind, seq }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        match ticket.kind {
            RequestKind::Load => ticket.seq == self.load_seq,
            RequestKind::Search => ticket.seq == self.search_seq,
        }
    }

    /// Replace the whole catalog. Filters are not re-applied.
    ///
    /// Returns false when a newer load was issued after this one.
    pub fn apply_load(&mut self, ticket: RequestTicket, jobs: Vec<JobListing>) -> bool {
        if !self.accepts(ticket, RequestKind::Load) {
            return false;
        }
        self.filtered_jobs = jobs.clone();
        self.all_jobs = jobs;
        self.phase = CatalogPhase::Ready;
        true
    }

    /// Show server search results. `all_jobs` is left untouched.
    pub fn apply_search(&mut self, ticket: RequestTicket, jobs: Vec<JobListing>) -> bool {
        if !self.accepts(ticket, RequestKind::Search) {
            return false;
        }
        self.filtered_jobs = jobs;
        self.phase = CatalogPhase::Ready;
        true
    }

    /// Put the list region into its failure state
    pub fn apply_failure(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("[CATALOG] dropping stale {:?} failure", ticket.kind);
            return false;
        }
        self.phase = CatalogPhase::Failed(message.into());
        true
    }

    /// Recompute `filtered_jobs` from the full snapshot, never from the
    /// previous filtered view.
    pub fn apply_filters(&mut self, criteria: &FilterCriteria) {
        self.filtered_jobs = criteria.apply(&self.all_jobs);
        self.phase = CatalogPhase::Ready;
    }

    fn accepts(&self, ticket: RequestTicket, kind: RequestKind) -> bool {
        debug_assert_eq!(ticket.kind, kind);
        if self.is_current(ticket) {
            return true;
        }
        log::debug!("[CATALOG] dropping stale {:?} response (seq {})", kind, ticket.seq);
        false
    }
}
