//! Form Submissions
//!
//! Write operations behind the post-job and apply forms, plus the inline
//! messages every form shows on success and failure.

use crate::api::JobDirectory;
use crate::error::{ClientError, ClientResult};
use crate::models::{Application, Company, IdRef, JobDraft, JobListing, NewApplication, NewCompany, NewJob, User};

/// Which form a submission came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Login,
    Register,
    PostJob,
    Apply,
}

impl Submission {
    /// Shown when the server rejected the request without its own message
    fn rejected(&self) -> &'static str {
        match self {
            Submission::Login => "Login failed",
            Submission::Register => "Registration failed",
            Submission::PostJob => "Failed to post job",
            Submission::Apply => "Failed to submit application",
        }
    }

    /// Shown when the request never got a usable reply
    fn failed(&self) -> &'static str {
        match self {
            Submission::Login => "Login failed. Please try again.",
            Submission::Register => "Registration failed. Please try again.",
            Submission::PostJob => "Failed to post job. Please try again.",
            Submission::Apply => "Failed to submit application. Please try again.",
        }
    }

    pub fn succeeded(&self) -> &'static str {
        match self {
            Submission::Login => "Login successful!",
            Submission::Register => "Registration successful!",
            Submission::PostJob => "Job posted successfully!",
            Submission::Apply => "Application submitted successfully!",
        }
    }

    /// Inline error text for a failed submission
    pub fn error_text(&self, err: &ClientError) -> String {
        match err {
            ClientError::Status { .. } => err.user_message(self.rejected()),
            ClientError::NotLoggedIn => match self {
                Submission::PostJob => "Please login to post a job".to_string(),
                Submission::Apply => "Please login to apply for jobs".to_string(),
                _ => self.failed().to_string(),
            },
            _ => self.failed().to_string(),
        }
    }
}

/// How a new posting gets its company
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompanyPolicy {
    /// Attach the user's first company if they have one, else post without
    #[default]
    AttachExisting,
    /// Create a company for the user first when they have none
    EnsureExists,
}

/// Post a job as `user`.
///
/// A failed company lookup is not an error: the job is posted without one.
pub async fn post_job(
    api: &dyn JobDirectory,
    user: Option<&User>,
    draft: JobDraft,
    policy: CompanyPolicy,
) -> ClientResult<JobListing> {
    let user = user.ok_or(ClientError::NotLoggedIn)?;

    let company = match policy {
        CompanyPolicy::AttachExisting => match api.companies_for_user(user.id).await {
            Ok(companies) => companies.first().map(|company| company.id),
            Err(err) => {
                log::info!("[SUBMIT] no company found for user, proceeding without company: {}", err);
                None
            }
        },
        CompanyPolicy::EnsureExists => ensure_company(api, user).await.map(|company| company.id),
    };

    let job = NewJob::from_draft(draft, user.id, company);
    log::info!("[SUBMIT] posting job {:?} (company {:?})", job.title, job.company);
    api.create_job(&job).await.map_err(|err| {
        log::error!("[SUBMIT] post job error: {}", err);
        err
    })
}

/// The user's first company, creating a default one when they have none.
///
/// Any failure yields `None`.
pub async fn ensure_company(api: &dyn JobDirectory, user: &User) -> Option<Company> {
    match api.companies_for_user(user.id).await {
        Ok(companies) if !companies.is_empty() => return companies.into_iter().next(),
        Ok(_) => {}
        Err(err) => {
            log::error!("[SUBMIT] error ensuring company: {}", err);
            return None;
        }
    }

    let company = NewCompany {
        name: format!("{} {}'s Company", user.first_name, user.last_name),
        description: "Company created automatically for job posting".to_string(),
        email: user.email.clone(),
        user: IdRef { id: user.id },
    };
    match api.create_company(&company).await {
        Ok(created) => Some(created),
        Err(err) => {
            log::error!("[SUBMIT] failed to create company: {}", err);
            None
        }
    }
}

/// Apply to `job_id` as `user`
pub async fn apply_to_job(
    api: &dyn JobDirectory,
    user: Option<&User>,
    job_id: u64,
    cover_letter: String,
    resume_url: String,
) -> ClientResult<Application> {
    let user = user.ok_or(ClientError::NotLoggedIn)?;
    let application = NewApplication {
        job: IdRef { id: job_id },
        user: IdRef { id: user.id },
        cover_letter,
        resume_url,
    };
    api.submit_application(&application).await.map_err(|err| {
        log::error!("[SUBMIT] apply job error: {}", err);
        err
    })
}

/// Applications the user has submitted
pub async fn my_applications(api: &dyn JobDirectory, user: Option<&User>) -> ClientResult<Vec<Application>> {
    let user = user.ok_or(ClientError::NotLoggedIn)?;
    api.applications_for_user(user.id).await.map_err(|err| {
        log::error!("[SUBMIT] error loading applications: {}", err);
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{company, user, FakeDirectory};

    fn draft() -> JobDraft {
        JobDraft {
            title: "Rust Engineer".into(),
            description: "Build the client".into(),
            requirements: "Rust, WASM".into(),
            location: "Remote".into(),
            job_type: "FULL_TIME".into(),
            category: "IT".into(),
            min_salary: 90000.0,
            max_salary: 120000.0,
        }
    }

    #[tokio::test]
    async fn test_post_job_requires_user() {
        let api = FakeDirectory::new();
        let err = post_job(&api, None, draft(), CompanyPolicy::AttachExisting).await.unwrap_err();

        assert!(matches!(err, ClientError::NotLoggedIn));
        assert_eq!(Submission::PostJob.error_text(&err), "Please login to post a job");
        assert!(api.created_jobs.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_post_job_attaches_first_company() {
        let api = FakeDirectory::new().with_user_companies(vec![company(3, "TechCorp"), company(4, "Other")]);
        let poster = user(7, "John", "Employer");

        post_job(&api, Some(&poster), draft(), CompanyPolicy::AttachExisting).await.unwrap();

        let created = api.created_jobs.borrow();
        assert_eq!(created[0].company, Some(IdRef { id: 3 }));
        assert_eq!(created[0].posted_by, IdRef { id: 7 });
    }

    #[tokio::test]
    async fn test_post_job_survives_company_lookup_failure() {
        let api = FakeDirectory::new();
        api.fail_user_companies();
        let poster = user(7, "John", "Employer");

        post_job(&api, Some(&poster), draft(), CompanyPolicy::AttachExisting).await.unwrap();

        assert_eq!(api.created_jobs.borrow()[0].company, None);
    }

    #[tokio::test]
    async fn test_post_job_can_create_company() {
        let api = FakeDirectory::new();
        let poster = user(7, "John", "Employer");

        post_job(&api, Some(&poster), draft(), CompanyPolicy::EnsureExists).await.unwrap();

        let companies = api.created_companies.borrow();
        assert_eq!(companies[0].name, "John Employer's Company");
        assert_eq!(companies[0].user, IdRef { id: 7 });
        assert!(api.created_jobs.borrow()[0].company.is_some());
    }

    #[tokio::test]
    async fn test_ensure_company_reuses_existing() {
        let api = FakeDirectory::new().with_user_companies(vec![company(3, "TechCorp")]);
        let found = ensure_company(&api, &user(7, "John", "Employer")).await;

        assert_eq!(found.map(|c| c.id), Some(3));
        assert!(api.created_companies.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_apply_and_list_applications() {
        let api = FakeDirectory::new();
        let seeker = user(9, "Jane", "Seeker");

        apply_to_job(&api, Some(&seeker), 5, "Hello".into(), "https://cv.example.com".into())
            .await
            .unwrap();

        let sent = api.applications.borrow().clone();
        assert_eq!(sent[0].job, IdRef { id: 5 });
        assert_eq!(sent[0].user, IdRef { id: 9 });

        let mine = my_applications(&api, Some(&seeker)).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].job.as_ref().map(|j| j.id), Some(5));
    }

    #[tokio::test]
    async fn test_rejected_application_shows_server_message() {
        let api = FakeDirectory::new();
        api.reject_applications("You have already applied for this job");
        let seeker = user(9, "Jane", "Seeker");

        let err = apply_to_job(&api, Some(&seeker), 5, String::new(), String::new())
            .await
            .unwrap_err();
        assert_eq!(Submission::Apply.error_text(&err), "You have already applied for this job");
    }

    #[test]
    fn test_error_text_fallbacks() {
        let rejected = ClientError::Status { status: 400, message: None };
        assert_eq!(Submission::Register.error_text(&rejected), "Registration failed");

        let broken = ClientError::Storage("quota".into());
        assert_eq!(Submission::Login.error_text(&broken), "Login failed. Please try again.");
        assert_eq!(Submission::Apply.error_text(&ClientError::NotLoggedIn), "Please login to apply for jobs");
    }
}
