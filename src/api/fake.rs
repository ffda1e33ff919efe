//! In-memory Job Directory for tests
//!
//! Every list defaults to empty and succeeds. `fail_*` switches an endpoint
//! to a 500, `gate_*` holds its response until the returned sender fires.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::JobDirectory;
use crate::catalog::SearchCriteria;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Application, AppliedJob, Company, Credentials, JobListing, NewApplication, NewCompany, NewJob, Registration, User,
};

fn server_error() -> ClientError {
    ClientError::Status { status: 500, message: None }
}

fn reply<T: Clone>(slot: &RefCell<Option<T>>) -> ClientResult<T> {
    slot.borrow().clone().ok_or_else(server_error)
}

async fn wait(gate: &RefCell<Option<oneshot::Receiver<()>>>) {
    let pending = gate.borrow_mut().take();
    if let Some(rx) = pending {
        let _ = rx.await;
    }
}

pub fn user(id: u64, first_name: &str, last_name: &str) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!("{}@example.com", first_name.to_lowercase())),
        username: None,
        role: None,
        extra: Default::default(),
    }
}

pub fn company(id: u64, name: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        description: None,
        email: None,
        location: None,
    }
}

pub struct FakeDirectory {
    active: RefCell<Option<Vec<JobListing>>>,
    search: RefCell<Option<Vec<JobListing>>>,
    categories: RefCell<Option<Vec<String>>>,
    job_types: RefCell<Option<Vec<String>>>,
    companies: RefCell<Option<Vec<Company>>>,
    user_companies: RefCell<Option<Vec<Company>>>,
    auth: RefCell<Result<User, String>>,
    application_error: RefCell<Option<String>>,
    active_gate: RefCell<Option<oneshot::Receiver<()>>>,
    search_gate: RefCell<Option<oneshot::Receiver<()>>>,
    next_id: Cell<u64>,

    pub search_queries: RefCell<Vec<Vec<(&'static str, String)>>>,
    pub created_jobs: RefCell<Vec<NewJob>>,
    pub created_companies: RefCell<Vec<NewCompany>>,
    pub applications: RefCell<Vec<NewApplication>>,
    pub logins: RefCell<Vec<String>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            active: RefCell::new(Some(Vec::new())),
            search: RefCell::new(Some(Vec::new())),
            categories: RefCell::new(Some(Vec::new())),
            job_types: RefCell::new(Some(Vec::new())),
            companies: RefCell::new(Some(Vec::new())),
            user_companies: RefCell::new(Some(Vec::new())),
            auth: RefCell::new(Err("Invalid username or password".to_string())),
            application_error: RefCell::new(None),
            active_gate: RefCell::new(None),
            search_gate: RefCell::new(None),
            next_id: Cell::new(100),
            search_queries: RefCell::new(Vec::new()),
            created_jobs: RefCell::new(Vec::new()),
            created_companies: RefCell::new(Vec::new()),
            applications: RefCell::new(Vec::new()),
            logins: RefCell::new(Vec::new()),
        }
    }

    pub fn with_active(self, jobs: Vec<JobListing>) -> Self {
        *self.active.borrow_mut() = Some(jobs);
        self
    }

    pub fn with_search(self, jobs: Vec<JobListing>) -> Self {
        *self.search.borrow_mut() = Some(jobs);
        self
    }

    pub fn with_companies(self, count: u64) -> Self {
        let companies = (1..=count).map(|id| company(id, &format!("Company {}", id))).collect();
        *self.companies.borrow_mut() = Some(companies);
        self
    }

    pub fn with_user_companies(self, companies: Vec<Company>) -> Self {
        *self.user_companies.borrow_mut() = Some(companies);
        self
    }

    pub fn with_auth_user(self, user: User) -> Self {
        *self.auth.borrow_mut() = Ok(user);
        self
    }

    pub fn set_categories(&self, categories: Vec<String>) {
        *self.categories.borrow_mut() = Some(categories);
    }

    pub fn reject_applications(&self, message: &str) {
        *self.application_error.borrow_mut() = Some(message.to_string());
    }

    pub fn fail_active(&self) {
        *self.active.borrow_mut() = None;
    }

    pub fn fail_search(&self) {
        *self.search.borrow_mut() = None;
    }

    pub fn fail_job_types(&self) {
        *self.job_types.borrow_mut() = None;
    }

    pub fn fail_companies(&self) {
        *self.companies.borrow_mut() = None;
    }

    pub fn fail_user_companies(&self) {
        *self.user_companies.borrow_mut() = None;
    }

    pub fn gate_active(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.active_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn gate_search(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.search_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn last_search_query(&self) -> Vec<(&'static str, String)> {
        self.search_queries.borrow().last().cloned().unwrap_or_default()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn auth_reply(&self) -> ClientResult<User> {
        self.auth.borrow().clone().map_err(|message| ClientError::Status {
            status: 401,
            message: Some(message),
        })
    }
}

#[async_trait(?Send)]
impl JobDirectory for FakeDirectory {
    async fn list_active_jobs(&self) -> ClientResult<Vec<JobListing>> {
        wait(&self.active_gate).await;
        reply(&self.active)
    }

    async fn get_job(&self, id: u64) -> ClientResult<JobListing> {
        reply(&self.active)?
            .into_iter()
            .find(|job| job.id == id)
            .ok_or_else(|| ClientError::Status {
                status: 400,
                message: Some("Job not found".to_string()),
            })
    }

    async fn search_jobs(&self, criteria: &SearchCriteria) -> ClientResult<Vec<JobListing>> {
        self.search_queries.borrow_mut().push(criteria.query_pairs());
        wait(&self.search_gate).await;
        reply(&self.search)
    }

    async fn list_categories(&self) -> ClientResult<Vec<String>> {
        reply(&self.categories)
    }

    async fn list_job_types(&self) -> ClientResult<Vec<String>> {
        reply(&self.job_types)
    }

    async fn list_locations(&self) -> ClientResult<Vec<String>> {
        Ok(Vec::new())
    }

    async fn create_job(&self, job: &NewJob) -> ClientResult<JobListing> {
        self.created_jobs.borrow_mut().push(job.clone());
        Ok(JobListing {
            id: self.next_id(),
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            skills: None,
            location: Some(job.location.clone()),
            job_type: Some(job.job_type.clone()),
            experience_level: None,
            category: Some(job.category.clone()),
            min_salary: job.min_salary,
            max_salary: job.max_salary,
            created_at: None,
            company: None,
            posted_by: Some(job.posted_by),
        })
    }

    async fn list_companies(&self) -> ClientResult<Vec<Company>> {
        reply(&self.companies)
    }

    async fn companies_for_user(&self, _user_id: u64) -> ClientResult<Vec<Company>> {
        reply(&self.user_companies)
    }

    async fn create_company(&self, new_company: &NewCompany) -> ClientResult<Company> {
        self.created_companies.borrow_mut().push(new_company.clone());
        Ok(company(self.next_id(), &new_company.name))
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        self.logins.borrow_mut().push(credentials.username.clone());
        self.auth_reply()
    }

    async fn register(&self, registration: &Registration) -> ClientResult<User> {
        self.logins.borrow_mut().push(registration.username.clone());
        self.auth_reply()
    }

    async fn submit_application(&self, application: &NewApplication) -> ClientResult<Application> {
        if let Some(message) = self.application_error.borrow().clone() {
            return Err(ClientError::Status { status: 400, message: Some(message) });
        }
        self.applications.borrow_mut().push(application.clone());
        Ok(Application {
            id: self.next_id(),
            job: Some(AppliedJob { id: application.job.id, title: None }),
            status: Some("PENDING".to_string()),
            cover_letter: Some(application.cover_letter.clone()),
            applied_at: None,
        })
    }

    async fn applications_for_user(&self, _user_id: u64) -> ClientResult<Vec<Application>> {
        Ok(self
            .applications
            .borrow()
            .iter()
            .enumerate()
            .map(|(i, application)| Application {
                id: i as u64 + 1,
                job: Some(AppliedJob { id: application.job.id, title: None }),
                status: Some("PENDING".to_string()),
                cover_letter: Some(application.cover_letter.clone()),
                applied_at: None,
            })
            .collect())
    }
}
