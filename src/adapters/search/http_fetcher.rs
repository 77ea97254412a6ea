//! Implements PageFetcherPort with reqwest, for hosts without curl.

use crate::domain::DomainError;
use crate::ports::PageFetcherPort;
use reqwest::header::USER_AGENT;

pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait::async_trait]
impl PageFetcherPort for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::Fetch(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DomainError::Fetch(format!("read body: {}", e)))
    }
}
