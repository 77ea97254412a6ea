//! Implements PageFetcherPort by running `curl -s <url> -A <user-agent>`.

use crate::domain::DomainError;
use crate::ports::PageFetcherPort;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub struct CurlFetcher {
    curl_bin: String,
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(curl_bin: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            curl_bin: curl_bin.into(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new("curl", DEFAULT_USER_AGENT)
    }
}

#[async_trait]
impl PageFetcherPort for CurlFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let output = Command::new(&self.curl_bin)
            .arg("-s")
            .arg(url)
            .arg("-A")
            .arg(&self.user_agent)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DomainError::Fetch(format!("spawn {}: {}", self.curl_bin, e)))?;

        if !output.status.success() {
            return Err(DomainError::Fetch(format!(
                "{} exited with {}",
                self.curl_bin, output.status
            )));
        }

        let body = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(url = %url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_zero_exit_is_fetch_error() {
        let fetcher = CurlFetcher::new("false", DEFAULT_USER_AGENT);
        let err = fetcher.fetch("https://example.test").await.unwrap_err();
        assert!(matches!(err, DomainError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_arguments_passed_through() {
        // `echo` prints its argv, so the body shows what curl would have received.
        let fetcher = CurlFetcher::new("echo", "TestAgent/1.0");
        let body = fetcher.fetch("https://example.test/search?q=a+b").await.unwrap();
        assert_eq!(
            body.trim(),
            "-s https://example.test/search?q=a+b -A TestAgent/1.0"
        );
    }
}
