pub mod http;

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;

use self::http::HttpBackend;

pub const CONNECTION_FALLBACK: &str =
    "I'm having trouble connecting to my knowledge base right now. Please try again in a moment, or check that the backend server is running.";
pub const CONNECTION_ERROR: &str =
    "Unable to connect to the server. Please check your connection.";
pub const EMPTY_ANSWER_FALLBACK: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("invalid backend base URL '{url}': {reason}")]
    InvalidBaseUrl {
        url: String,
        reason: String,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What a query settles to. `error` carries the side-channel message shown
/// inline when the request itself failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub answer: String,
    pub error: Option<String>,
}

impl QueryOutcome {
    pub fn from_answer(answer: Option<String>) -> Self {
        let answer = answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| EMPTY_ANSWER_FALLBACK.to_string());
        Self { answer, error: None }
    }

    pub fn connection_failure() -> Self {
        Self {
            answer: CONNECTION_FALLBACK.to_string(),
            error: Some(CONNECTION_ERROR.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// A question-answering endpoint. Implementations never fail: every error is
/// folded into a fallback `QueryOutcome`.
#[async_trait]
pub trait AnswerBackend: Send + Sync {
    async fn query(&self, text: &str) -> QueryOutcome;
}

pub fn new_backend(base_url: &str) -> Result<Arc<dyn AnswerBackend>, BackendError> {
    let backend = HttpBackend::new(base_url)?;
    Ok(Arc::new(backend))
}
