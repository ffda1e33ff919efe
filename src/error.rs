//! Client Errors

/// Error type for everything the client does against the backend or storage
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not logged in")]
    NotLoggedIn,
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Text shown next to the form that failed.
    ///
    /// The server-provided message wins; otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Status { message: Some(message), .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
