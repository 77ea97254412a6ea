//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The inference backend could not produce a completion (bad model, non-zero exit, HTTP error).
    #[error("Inference backend unavailable: {0}")]
    InferenceUnavailable(String),

    #[error("Sentiment model error: {0}")]
    Sentiment(String),

    #[error("Sentiment log error: {0}")]
    Sink(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Front-end error: {0}")]
    Frontend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
