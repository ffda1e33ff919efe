//! Frontend Models
//!
//! Data structures matching the job board REST payloads (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Reference to an entity by id only, as the backend expects in request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: u64,
}

/// Company embedded in a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
}

/// One job posting as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_salary: f64,
    #[serde(default)]
    pub max_salary: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub posted_by: Option<IdRef>,
}

/// Company record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Authenticated user profile.
///
/// Kept opaque: fields the client does not know about are carried in
/// `extra` so the persisted record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `{user}` envelope returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthReply {
    pub user: User,
}

/// `{error}` body the backend sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReply {
    pub error: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Job fields entered in the post-job form
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub job_type: String,
    pub category: String,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Wire payload for `POST /jobs`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub job_type: String,
    pub category: String,
    pub min_salary: f64,
    pub max_salary: f64,
    pub posted_by: IdRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<IdRef>,
}

impl NewJob {
    pub fn from_draft(draft: JobDraft, posted_by: u64, company: Option<u64>) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            requirements: draft.requirements,
            location: draft.location,
            job_type: draft.job_type,
            category: draft.category,
            min_salary: draft.min_salary,
            max_salary: draft.max_salary,
            posted_by: IdRef { id: posted_by },
            company: company.map(|id| IdRef { id }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCompany {
    pub name: String,
    pub description: String,
    pub email: Option<String>,
    pub user: IdRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job: IdRef,
    pub user: IdRef,
    pub cover_letter: String,
    pub resume_url: String,
}

/// Job summary embedded in an application record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedJob {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Application record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u64,
    #[serde(default)]
    pub job: Option<AppliedJob>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub applied_at: Option<String>,
}
