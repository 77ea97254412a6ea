//! Hosted sentiment model over the Hugging Face inference API.
//!
//! Default model is the SST-2 fine-tuned DistilBERT (POSITIVE/NEGATIVE).

use crate::domain::{DomainError, SentimentLabel, SentimentResult};
use crate::ports::SentimentModelPort;
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_SENTIMENT_API_URL: &str = "https://api-inference.huggingface.co/models";

pub struct HfInferenceModel {
    client: reqwest::Client,
    endpoint: String,
    api_token: Option<String>,
}

impl HfInferenceModel {
    /// # Arguments
    /// * `api_url` - Base URL; the model name is appended as a path segment
    /// * `model` - Text-classification model id
    /// * `api_token` - Optional bearer token
    pub fn new(api_url: &str, model: &str, api_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/{}", api_url.trim_end_matches('/'), model),
            api_token,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// The API answers `[[{label, score}, ...]]` for a single input; some deployments drop the
/// outer list. Errors come back as `{"error": "..."}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
    Error { error: String },
}

/// Highest-scoring label mapped into the vocabulary.
fn top_result(body: &str) -> Result<SentimentResult, DomainError> {
    let parsed: ClassificationResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::Sentiment(format!("unexpected response: {}", e)))?;
    let scores = match parsed {
        ClassificationResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
        ClassificationResponse::Flat(scores) => scores,
        ClassificationResponse::Error { error } => return Err(DomainError::Sentiment(error)),
    };

    let top = scores
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| DomainError::Sentiment("model returned no labels".into()))?;

    let label = SentimentLabel::from_model_label(&top.label)
        .ok_or_else(|| DomainError::Sentiment(format!("unrecognised label '{}'", top.label)))?;
    Ok(SentimentResult::new(label, top.score))
}

#[async_trait::async_trait]
impl SentimentModelPort for HfInferenceModel {
    async fn predict(&self, text: &str) -> Result<SentimentResult, DomainError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "inputs": text }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Sentiment(format!("HTTP request failed: {}", e)))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            warn!(status = %status, body = %body, "sentiment API returned error");
            return Err(DomainError::Sentiment(format!(
                "API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        let result = top_result(&body)?;
        debug!(label = %result.label, confidence = result.confidence, "sentiment predicted");
        Ok(result)
    }
}
