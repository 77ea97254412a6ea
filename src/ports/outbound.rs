//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, SentimentLogEntry, SentimentResult};

/// Inference backend. Turns a prompt into a completion.
#[async_trait::async_trait]
pub trait InferencePort: Send + Sync {
    /// Run one completion. Fails with `DomainError::InferenceUnavailable`.
    async fn complete(&self, prompt: &str) -> Result<String, DomainError>;
}

/// Pre-trained single-label sentiment model.
#[async_trait::async_trait]
pub trait SentimentModelPort: Send + Sync {
    /// Top-ranked label and its probability for `text`. No input validation is expected.
    async fn predict(&self, text: &str) -> Result<SentimentResult, DomainError>;
}

/// Append-only store of classification results.
#[async_trait::async_trait]
pub trait SentimentSinkPort: Send + Sync {
    /// Discard all prior rows and write the header row.
    async fn reset_with_header(&self) -> Result<(), DomainError>;

    /// Append exactly one row.
    async fn append(&self, entry: &SentimentLogEntry) -> Result<(), DomainError>;
}

/// External page fetch utility (curl, HTTP client).
#[async_trait::async_trait]
pub trait PageFetcherPort: Send + Sync {
    /// GET `url` and return the raw body.
    async fn fetch(&self, url: &str) -> Result<String, DomainError>;
}
