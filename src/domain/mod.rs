//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    BotCommand, INFERENCE_APOLOGY, InferenceOutcome, SentimentLabel, SentimentLogEntry,
    SentimentOutcome, SentimentResult,
};
pub use errors::DomainError;
