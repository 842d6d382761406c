use async_trait::async_trait;
use log::{ debug, error };
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;

use super::{ AnswerBackend, BackendError, QueryOutcome };
use crate::models::query::{ QueryRequest, QueryResponse };

const QUERY_ROUTE: &str = "/query";

/// Posts each question to `{base_url}/query`. Stateless: no retry, no
/// timeout and no cancellation.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: HttpClient,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(base).map_err(|e| BackendError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http or https URL".to_string(),
            });
        }

        Ok(Self {
            http: HttpClient::new(),
            endpoint: format!("{}{}", base, QUERY_ROUTE),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn post_query(&self, text: &str) -> Result<QueryResponse, BackendError> {
        let resp = self.http.post(&self.endpoint).json(&QueryRequest { query: text }).send().await?;
        let status = resp.status();
        debug!("Query response from {}: {}", self.endpoint, status);
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }
        let body = resp.text().await?;
        let value = serde_json::from_str::<Value>(&body)?;
        Ok(QueryResponse::from_json(&value))
    }
}

#[async_trait]
impl AnswerBackend for HttpBackend {
    async fn query(&self, text: &str) -> QueryOutcome {
        match self.post_query(text).await {
            Ok(data) => QueryOutcome::from_answer(data.answer),
            Err(e) => {
                error!("Backend error: {}", e);
                QueryOutcome::connection_failure()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join_trims_trailing_slashes() {
        let backend = HttpBackend::new("http://localhost:8000/").unwrap();
        assert_eq!(backend.endpoint(), "http://localhost:8000/query");
        let backend = HttpBackend::new(" https://api.example.com/v1// ").unwrap();
        assert_eq!(backend.endpoint(), "https://api.example.com/v1/query");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(matches!(
            HttpBackend::new("mailto:me@example.com"),
            Err(BackendError::InvalidBaseUrl { .. })
        ));
        assert!(HttpBackend::new("ftp://example.com").is_err());
        assert!(HttpBackend::new("").is_err());
    }
}
