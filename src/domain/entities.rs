//! Domain entities. Pure data structures for the relay pipeline.
//!
//! No Telegram/IO types here; adapters map their payloads into these.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed apology returned to the user whenever the inference backend fails.
pub const INFERENCE_APOLOGY: &str = "Sorry, I couldn't process that. Please try again.";

/// Coarse sentiment vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// Degraded result: the model or the log write failed.
    Unknown,
}

impl SentimentLabel {
    /// Label as written to the log and shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Unknown => "Unknown",
        }
    }

    /// Map a model's raw label (e.g. "POSITIVE", "neg") to the vocabulary.
    /// Returns `None` for labels outside it; `Unknown` is never produced here.
    pub fn from_model_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" => Some(SentimentLabel::Positive),
            "negative" | "neg" => Some(SentimentLabel::Negative),
            "neutral" | "neu" => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label plus the model's probability for it. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// In [0.0, 1.0].
    pub confidence: f64,
}

impl SentimentResult {
    /// Build a result, clamping confidence into [0.0, 1.0] (NaN becomes 0.0).
    pub fn new(label: SentimentLabel, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self { label, confidence }
    }

    /// The neutral fallback: ("Unknown", 0.0).
    pub fn unknown() -> Self {
        Self {
            label: SentimentLabel::Unknown,
            confidence: 0.0,
        }
    }
}

impl fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.label, self.confidence)
    }
}

/// One persisted row of the sentiment log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentLogEntry {
    pub text: String,
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl SentimentLogEntry {
    pub fn new(text: &str, result: SentimentResult) -> Self {
        Self {
            text: text.to_string(),
            label: result.label,
            confidence: result.confidence,
        }
    }
}

/// Result of one inference call: the completion, or the reason it failed.
#[derive(Debug)]
pub enum InferenceOutcome {
    Completed(String),
    Failed(DomainError),
}

impl InferenceOutcome {
    /// Text to show the user: the completion, or the fixed apology.
    pub fn text(&self) -> &str {
        match self {
            InferenceOutcome::Completed(text) => text,
            InferenceOutcome::Failed(_) => INFERENCE_APOLOGY,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            InferenceOutcome::Completed(text) => text,
            InferenceOutcome::Failed(_) => INFERENCE_APOLOGY.to_string(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, InferenceOutcome::Completed(_))
    }
}

/// Result of one classification: the model's verdict, or a degraded neutral result.
#[derive(Debug)]
pub enum SentimentOutcome {
    Classified(SentimentResult),
    Degraded(DomainError),
}

impl SentimentOutcome {
    /// Payload, or ("Unknown", 0.0) when degraded.
    pub fn result(&self) -> SentimentResult {
        match self {
            SentimentOutcome::Classified(result) => *result,
            SentimentOutcome::Degraded(_) => SentimentResult::unknown(),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, SentimentOutcome::Degraded(_))
    }
}

/// A parsed inbound chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// `/start`
    Start,
    /// `/search <query...>`; query may be empty.
    Search(String),
    /// Plain text to relay to the model.
    Chat(String),
    /// Any other `/command`; not answered.
    Unsupported(String),
}

impl BotCommand {
    /// Parse one inbound message. Accepts the `/cmd@botname` form Telegram uses in groups.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return BotCommand::Chat(text.to_string());
        };

        let mut parts = rest.split_whitespace();
        let head = parts.next().unwrap_or_default();
        let name = head.split('@').next().unwrap_or_default();

        match name {
            "start" => BotCommand::Start,
            "search" => BotCommand::Search(parts.collect::<Vec<_>>().join(" ")),
            _ => BotCommand::Unsupported(name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_result_clamps_confidence() {
        assert_eq!(
            SentimentResult::new(SentimentLabel::Positive, 1.7).confidence,
            1.0
        );
        assert_eq!(
            SentimentResult::new(SentimentLabel::Negative, -0.2).confidence,
            0.0
        );
        assert_eq!(
            SentimentResult::new(SentimentLabel::Neutral, f64::NAN).confidence,
            0.0
        );
    }

    #[test]
    fn test_sentiment_result_display() {
        let r = SentimentResult::new(SentimentLabel::Positive, 0.99876);
        assert_eq!(r.to_string(), "POSITIVE (1.00)");
        assert_eq!(SentimentResult::unknown().to_string(), "Unknown (0.00)");
    }

    #[test]
    fn test_label_from_model_label() {
        assert_eq!(
            SentimentLabel::from_model_label("POSITIVE"),
            Some(SentimentLabel::Positive)
        );
        assert_eq!(
            SentimentLabel::from_model_label(" neg "),
            Some(SentimentLabel::Negative)
        );
        assert_eq!(SentimentLabel::from_model_label("LABEL_1"), None);
    }

    #[test]
    fn test_inference_outcome_text() {
        let ok = InferenceOutcome::Completed("hi there".into());
        assert_eq!(ok.text(), "hi there");
        let failed = InferenceOutcome::Failed(DomainError::InferenceUnavailable("boom".into()));
        assert_eq!(failed.text(), INFERENCE_APOLOGY);
        assert_eq!(failed.into_text(), INFERENCE_APOLOGY);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(BotCommand::parse("/start"), BotCommand::Start);
        assert_eq!(BotCommand::parse("/start@relay_bot"), BotCommand::Start);
        assert_eq!(
            BotCommand::parse("/search  rust   async "),
            BotCommand::Search("rust async".into())
        );
        assert_eq!(BotCommand::parse("/search"), BotCommand::Search(String::new()));
        assert_eq!(
            BotCommand::parse("/help"),
            BotCommand::Unsupported("help".into())
        );
        assert_eq!(
            BotCommand::parse("how are you?"),
            BotCommand::Chat("how are you?".into())
        );
    }
}
