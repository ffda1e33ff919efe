//! HTTP Job Directory
//!
//! `reqwest` bindings for the backend endpoints. On wasm32 reqwest goes
//! through the browser's `fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::JobDirectory;
use crate::catalog::SearchCriteria;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Application, AuthReply, Company, Credentials, ErrorReply, JobListing, NewApplication, NewCompany, NewJob,
    Registration, User,
};

/// Backend client bound to one API root
#[derive(Clone)]
pub struct HttpJobDirectory {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpJobDirectory {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.config.endpoint(path);
        log::debug!("[API] GET {}", url);
        let response = self.client.get(&url).send().await?;
        read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log::debug!("[API] POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        read_json(response).await
    }
}

/// Decode a 2xx body, or turn anything else into `ClientError::Status`
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Build the error for a non-2xx reply, keeping the server's `{error}` text
fn status_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorReply>(body)
        .ok()
        .and_then(|reply| reply.error);
    log::warn!("[API] request failed with status {}: {:?}", status, message);
    ClientError::Status { status, message }
}

#[async_trait(?Send)]
impl JobDirectory for HttpJobDirectory {
    async fn list_active_jobs(&self) -> ClientResult<Vec<JobListing>> {
        self.get_json("/jobs/active").await
    }

    async fn get_job(&self, id: u64) -> ClientResult<JobListing> {
        self.get_json(&format!("/jobs/{}", id)).await
    }

    async fn search_jobs(&self, criteria: &SearchCriteria) -> ClientResult<Vec<JobListing>> {
        let url = self.config.endpoint("/jobs/search");
        let params = criteria.query_pairs();
        log::debug!("[API] GET {} {:?}", url, params);
        let response = self.client.get(&url).query(&params).send().await?;
        read_json(response).await
    }

    async fn list_categories(&self) -> ClientResult<Vec<String>> {
        self.get_json("/jobs/filters/categories").await
    }

    async fn list_job_types(&self) -> ClientResult<Vec<String>> {
        self.get_json("/jobs/filters/job-types").await
    }

    async fn list_locations(&self) -> ClientResult<Vec<String>> {
        self.get_json("/jobs/filters/locations").await
    }

    async fn create_job(&self, job: &NewJob) -> ClientResult<JobListing> {
        self.post_json("/jobs", job).await
    }

    async fn list_companies(&self) -> ClientResult<Vec<Company>> {
        self.get_json("/companies").await
    }

    async fn companies_for_user(&self, user_id: u64) -> ClientResult<Vec<Company>> {
        self.get_json(&format!("/companies/user/{}", user_id)).await
    }

    async fn create_company(&self, company: &NewCompany) -> ClientResult<Company> {
        self.post_json("/companies", company).await
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<User> {
        let reply: AuthReply = self.post_json("/auth/login", credentials).await?;
        Ok(reply.user)
    }

    async fn register(&self, registration: &Registration) -> ClientResult<User> {
        let reply: AuthReply = self.post_json("/auth/register", registration).await?;
        Ok(reply.user)
    }

    async fn submit_application(&self, application: &NewApplication) -> ClientResult<Application> {
        self.post_json("/applications", application).await
    }

    async fn applications_for_user(&self, user_id: u64) -> ClientResult<Vec<Application>> {
        self.get_json(&format!("/applications/user/{}", user_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_server_message() {
        match status_error(400, r#"{"error":"Invalid credentials"}"#) {
            ClientError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message.as_deref(), Some("Invalid credentials"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_without_json_body() {
        match status_error(502, "<html>Bad Gateway</html>") {
            ClientError::Status { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
