//! Client Configuration

/// Storage key of the persisted user record
pub const DEFAULT_IDENTITY_KEY: &str = "currentUser";

/// API root path relative to the page origin
const DEFAULT_API_PATH: &str = "/api";

/// Where the backend lives and where the session is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub identity_key: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let base: String = api_base_url.into();
        Self {
            api_base_url: base.trim_end_matches('/').to_string(),
            identity_key: DEFAULT_IDENTITY_KEY.to_string(),
        }
    }

    /// Resolve from the build environment, falling back to `<page origin>/api`.
    ///
    /// `JOB_BOARD_API_URL` is read at compile time; the browser has no process env.
    pub fn resolve() -> Self {
        if let Some(url) = option_env!("JOB_BOARD_API_URL").filter(|url| !url.is_empty()) {
            return Self::new(url);
        }
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        Self::new(format!("{}{}", origin, DEFAULT_API_PATH))
    }

    /// Full URL for an API path such as `/jobs/active`
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/api/");
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.identity_key, "currentUser");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ClientConfig::new("http://localhost:8080/api");
        assert_eq!(config.endpoint("/jobs/active"), "http://localhost:8080/api/jobs/active");
        assert_eq!(config.endpoint("jobs/7"), "http://localhost:8080/api/jobs/7");
    }
}
