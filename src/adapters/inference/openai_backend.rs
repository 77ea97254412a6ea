//! OpenAI-compatible inference backend.
//!
//! Works with a local Ollama server (`/v1/chat/completions`), OpenAI, or any compatible API.
//! Implements `InferencePort` without spawning a process per prompt.

use crate::domain::DomainError;
use crate::ports::InferencePort;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// OpenAI-compatible chat-completions backend.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    /// # Arguments
    /// * `api_url` - Endpoint (e.g. "http://localhost:11434/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g. "llama2")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    fn request_for(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

/// First choice's content, trimmed.
fn first_completion(body: &str) -> Result<String, DomainError> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        DomainError::InferenceUnavailable(format!("Failed to parse API response: {}", e))
    })?;
    response
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| DomainError::InferenceUnavailable("No response choices returned".into()))
}

#[async_trait::async_trait]
impl InferencePort for OpenAiBackend {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let mut request = self.client.post(&self.api_url).json(&self.request_for(prompt));
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::InferenceUnavailable(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if !status.is_success() {
            warn!(status = %status, body = %text, "inference API returned error");
            return Err(DomainError::InferenceUnavailable(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let completion = first_completion(&text)?;
        debug!(completion_len = completion.len(), "received completion");
        Ok(completion)
    }
}
