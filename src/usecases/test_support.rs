//! Port fakes shared by the use-case tests.

use crate::domain::{DomainError, SentimentLabel, SentimentLogEntry, SentimentResult};
use crate::ports::{InferencePort, PageFetcherPort, SentimentModelPort, SentimentSinkPort};
use std::sync::Mutex;

/// Replies with `prefix + prompt`.
pub struct EchoBackend {
    prefix: String,
}

impl EchoBackend {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl InferencePort for EchoBackend {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        Ok(format!("{}{}", self.prefix, prompt))
    }
}

/// Completes successfully with no text.
pub struct SilentBackend;

#[async_trait::async_trait]
impl InferencePort for SilentBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
        Ok(String::new())
    }
}

pub struct FailingBackend;

#[async_trait::async_trait]
impl InferencePort for FailingBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::InferenceUnavailable(
            "exit status: 1 (model 'nope' not found)".into(),
        ))
    }
}

pub struct PanickingBackend;

#[async_trait::async_trait]
impl InferencePort for PanickingBackend {
    async fn complete(&self, _prompt: &str) -> Result<String, DomainError> {
        panic!("backend exploded")
    }
}

/// Always answers with the same label and confidence.
pub struct FixedModel {
    result: SentimentResult,
}

impl FixedModel {
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self {
            result: SentimentResult::new(label, confidence),
        }
    }
}

#[async_trait::async_trait]
impl SentimentModelPort for FixedModel {
    async fn predict(&self, _text: &str) -> Result<SentimentResult, DomainError> {
        Ok(self.result)
    }
}

pub struct FailingModel;

#[async_trait::async_trait]
impl SentimentModelPort for FailingModel {
    async fn predict(&self, _text: &str) -> Result<SentimentResult, DomainError> {
        Err(DomainError::Sentiment("model not loaded".into()))
    }
}

/// In-memory sink; records appended rows in order.
#[derive(Default)]
pub struct MemorySink {
    entries: Mutex<Vec<SentimentLogEntry>>,
}

impl MemorySink {
    pub fn entries(&self) -> Vec<SentimentLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SentimentSinkPort for MemorySink {
    async fn reset_with_header(&self) -> Result<(), DomainError> {
        self.entries.lock().unwrap().clear();
        Ok(())
    }

    async fn append(&self, entry: &SentimentLogEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

/// Returns the same body for every URL and remembers what was requested.
pub struct StaticFetcher {
    body: String,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageFetcherPort for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}

pub struct FailingFetcher;

#[async_trait::async_trait]
impl PageFetcherPort for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, DomainError> {
        Err(DomainError::Fetch("curl exited with status 6".into()))
    }
}

pub struct PanickingFetcher;

#[async_trait::async_trait]
impl PageFetcherPort for PanickingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, DomainError> {
        panic!("fetcher exploded")
    }
}
