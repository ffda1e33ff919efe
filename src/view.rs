//! View Models
//!
//! Listings are turned into plain display structs here; components only
//! lay them out. Keeps formatting rules testable without a DOM.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::catalog::{CatalogPhase, CatalogState};
use crate::models::{Application, JobListing, User};

/// Longest description shown on a list card, in characters
pub const SUMMARY_LENGTH: usize = 150;

const NOT_SPECIFIED: &str = "Not specified";

/// What the job list region shows
#[derive(Debug, Clone, PartialEq)]
pub enum JobListView {
    Loading,
    Failed(String),
    /// Nothing matched; rendered as a "no jobs found" panel, never an empty region
    Empty,
    Jobs(Vec<JobCardView>),
}

impl JobListView {
    pub fn from_jobs(jobs: &[JobListing]) -> Self {
        if jobs.is_empty() {
            JobListView::Empty
        } else {
            JobListView::Jobs(jobs.iter().map(JobCardView::from_listing).collect())
        }
    }

    pub fn from_state(state: &CatalogState) -> Self {
        match state.phase() {
            CatalogPhase::Idle | CatalogPhase::Loading => JobListView::Loading,
            CatalogPhase::Failed(message) => JobListView::Failed(message.clone()),
            CatalogPhase::Ready => Self::from_jobs(state.filtered_jobs()),
        }
    }
}

/// One card in the job list
#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub summary: String,
    pub posted: String,
}

impl JobCardView {
    pub fn from_listing(job: &JobListing) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: company_name(job).unwrap_or("Company Name").to_string(),
            location: or_not_specified(job.location.as_deref()),
            job_type: non_empty(job.job_type.as_deref()).unwrap_or("Full Time").to_string(),
            salary: format_salary(job.min_salary, job.max_salary),
            summary: truncate_text(&job.description, SUMMARY_LENGTH),
            posted: format_date(job.created_at.as_deref()),
        }
    }
}

/// Everything the detail modal shows
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub skills: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub category: String,
    pub salary: String,
    pub posted: String,
}

impl JobDetailView {
    pub fn from_listing(job: &JobListing) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            skills: or_not_specified(job.skills.as_deref()),
            company: or_not_specified(company_name(job)),
            location: or_not_specified(job.location.as_deref()),
            job_type: or_not_specified(job.job_type.as_deref()),
            experience_level: or_not_specified(job.experience_level.as_deref()),
            category: or_not_specified(job.category.as_deref()),
            salary: format_salary(job.min_salary, job.max_salary),
            posted: format_date(job.created_at.as_deref()),
        }
    }
}

/// Row in the "My Applications" list
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationView {
    pub id: u64,
    pub job: String,
    pub status: String,
    pub applied: String,
}

impl ApplicationView {
    pub fn from_application(application: &Application) -> Self {
        let job = match &application.job {
            Some(job) => job.title.clone().unwrap_or_else(|| format!("Job #{}", job.id)),
            None => NOT_SPECIFIED.to_string(),
        };
        Self {
            id: application.id,
            job,
            status: application.status.clone().unwrap_or_else(|| "PENDING".to_string()),
            applied: format_date(application.applied_at.as_deref()),
        }
    }
}

/// Name shown in the navigation bar
pub fn user_badge(user: &User) -> String {
    user.display_name()
}

fn company_name(job: &JobListing) -> Option<&str> {
    job.company.as_ref().and_then(|company| non_empty(company.name.as_deref()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn or_not_specified(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(NOT_SPECIFIED).to_string()
}

/// First `max` characters plus `...` when longer. Counts chars, not bytes,
/// and may cut mid-word.
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// `$50,000 - $90,000`
pub fn format_salary(min: f64, max: f64) -> String {
    format!("${} - ${}", format_number(min), format_number(max))
}

/// Grouped thousands, at most three fraction digits: `1234567.891` → `1,234,567.891`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞".to_string() } else { "∞".to_string() };
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// `Jan 15, 2024`. Accepts RFC 3339 and the backend's offset-less timestamps.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "Unknown date".to_string();
    };
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => "Unknown date".to_string(),
    }
}
