//! Inference adapters. Implement InferencePort.
//!
//! A local process runner (default) and an OpenAI-compatible HTTP client.

pub mod cli_backend;
pub mod openai_backend;

pub use cli_backend::CliInferenceBackend;
pub use openai_backend::OpenAiBackend;
