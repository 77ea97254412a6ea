//! Relay orchestrator. Composes the classifier and the inference invoker.
//!
//! Order is fixed (user sentiment, inference, AI sentiment) because it decides log row order.

use crate::domain::{DomainError, InferenceOutcome, SentimentOutcome};
use crate::usecases::{InferenceInvoker, SentimentService};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// Which reply the bot sends for a plain chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyMode {
    /// Model reply plus both sentiment tags.
    #[default]
    Combined,
    /// Model reply only; no classification.
    Simple,
}

impl FromStr for ReplyMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "combined" => Ok(ReplyMode::Combined),
            "simple" => Ok(ReplyMode::Simple),
            other => Err(DomainError::Config(format!(
                "unknown reply mode '{}' (expected combined|simple)",
                other
            ))),
        }
    }
}

pub struct RelayService {
    sentiment: Arc<SentimentService>,
    invoker: Arc<InferenceInvoker>,
}

impl RelayService {
    pub fn new(sentiment: Arc<SentimentService>, invoker: Arc<InferenceInvoker>) -> Self {
        Self { sentiment, invoker }
    }

    /// Dispatch on the configured reply mode.
    pub async fn reply(&self, mode: ReplyMode, user_message: &str) -> String {
        match mode {
            ReplyMode::Combined => self.relay_and_analyze(user_message).await,
            ReplyMode::Simple => self.relay(user_message).await,
        }
    }

    /// Model reply verbatim (or the apology).
    pub async fn relay(&self, user_message: &str) -> String {
        self.invoker.invoke_text(user_message).await
    }

    /// Classify the user message, relay it, classify the reply, and format all three.
    pub async fn relay_and_analyze(&self, user_message: &str) -> String {
        let user_sentiment = self.sentiment.classify(user_message).await;
        let ai = self.invoker.invoke(user_message).await;
        let ai_sentiment = self.sentiment.classify(ai.text()).await;

        if let InferenceOutcome::Failed(e) = &ai {
            warn!(error = %e, "relaying apology in place of model reply");
        }
        for (side, outcome) in [("user", &user_sentiment), ("ai", &ai_sentiment)] {
            if let SentimentOutcome::Degraded(e) = outcome {
                warn!(side, error = %e, "sentiment degraded to Unknown");
            }
        }

        let user = user_sentiment.result();
        let reply = ai_sentiment.result();
        info!(
            user_label = %user.label,
            ai_label = %reply.label,
            "relay complete"
        );

        format!(
            "User Sentiment: {}\nAI Response: {}\nAI Sentiment: {}",
            user,
            ai.text(),
            reply
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{INFERENCE_APOLOGY, SentimentLabel};
    use crate::ports::{InferencePort, SentimentModelPort};
    use crate::usecases::test_support::{
        EchoBackend, FailingBackend, FailingModel, FixedModel, MemorySink,
    };

    fn relay(
        backend: Arc<dyn InferencePort>,
        model: Arc<dyn SentimentModelPort>,
    ) -> (RelayService, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let sentiment = Arc::new(SentimentService::new(model, sink.clone()));
        let invoker = Arc::new(InferenceInvoker::new(backend));
        (RelayService::new(sentiment, invoker), sink)
    }

    fn assert_labels_in_order(out: &str) {
        let user = out.find("User Sentiment:").unwrap();
        let response = out.find("AI Response:").unwrap();
        let ai = out.find("AI Sentiment:").unwrap();
        assert!(user < response && response < ai, "unexpected layout: {}", out);
    }

    #[tokio::test]
    async fn test_relay_and_analyze_success() {
        let (service, sink) = relay(
            Arc::new(EchoBackend::new("You said: ")),
            Arc::new(FixedModel::new(SentimentLabel::Positive, 0.9876)),
        );

        let out = service.relay_and_analyze("great day").await;
        assert_eq!(
            out,
            "User Sentiment: POSITIVE (0.99)\nAI Response: You said: great day\nAI Sentiment: POSITIVE (0.99)"
        );
        assert_labels_in_order(&out);

        let rows = sink.entries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "great day");
        assert_eq!(rows[1].text, "You said: great day");
    }

    #[tokio::test]
    async fn test_relay_and_analyze_inference_failure() {
        let (service, sink) = relay(
            Arc::new(FailingBackend),
            Arc::new(FixedModel::new(SentimentLabel::Negative, 0.6)),
        );

        let out = service.relay_and_analyze("hello").await;
        assert_labels_in_order(&out);
        assert!(out.contains(&format!("AI Response: {}", INFERENCE_APOLOGY)));

        // The apology itself is classified and logged.
        let rows = sink.entries();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, INFERENCE_APOLOGY);
    }

    #[tokio::test]
    async fn test_relay_and_analyze_all_degraded() {
        let (service, sink) = relay(Arc::new(FailingBackend), Arc::new(FailingModel));

        let out = service.relay_and_analyze("hello").await;
        assert_labels_in_order(&out);
        assert!(out.starts_with("User Sentiment: Unknown (0.00)"));
        assert!(out.ends_with("AI Sentiment: Unknown (0.00)"));
        assert!(sink.entries().is_empty());
    }

    #[tokio::test]
    async fn test_simple_relay_skips_sentiment() {
        let (service, sink) = relay(
            Arc::new(EchoBackend::new("")),
            Arc::new(FixedModel::new(SentimentLabel::Positive, 0.9)),
        );

        assert_eq!(service.reply(ReplyMode::Simple, "ping").await, "ping");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_reply_mode_from_str() {
        assert_eq!("Combined".parse::<ReplyMode>().unwrap(), ReplyMode::Combined);
        assert_eq!("simple".parse::<ReplyMode>().unwrap(), ReplyMode::Simple);
        assert!("chatty".parse::<ReplyMode>().is_err());
    }
}
