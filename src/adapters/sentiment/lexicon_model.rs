//! In-process word-list sentiment model. Used when no hosted model is configured.
//!
//! Counts positive and negative cue words; a negator flips the next cue.

use crate::domain::{DomainError, SentimentLabel, SentimentResult};
use crate::ports::SentimentModelPort;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "love", "like", "happy", "glad",
    "nice", "wonderful", "fantastic", "thanks", "thank", "best", "helpful", "perfect",
    "enjoy", "beautiful", "fun", "cool", "brilliant", "pleased", "excited", "positive",
    "correct", "success", "well", "yes", "sure",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "hate", "sad", "angry", "upset", "worst",
    "poor", "wrong", "error", "fail", "failed", "failure", "broken", "sorry", "problem",
    "annoying", "boring", "ugly", "disappointed", "useless", "negative", "never", "couldn't",
    "can't", "slow", "bug", "crash",
];

const NEGATORS: &[&str] = &["not", "no", "never", "dont", "don't", "isnt", "isn't", "wasnt", "wasn't"];

#[derive(Debug, Default)]
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }

    /// Pure scoring; never fails.
    pub fn score(text: &str) -> SentimentResult {
        let mut positive = 0u32;
        let mut negative = 0u32;
        let mut negate_next = false;

        for raw in text.split_whitespace() {
            let word = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase();
            if word.is_empty() {
                continue;
            }

            let is_negator = NEGATORS.contains(&word.as_str());
            let polarity = if POSITIVE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if NEGATIVE_WORDS.contains(&word.as_str()) && !is_negator {
                Some(false)
            } else {
                None
            };

            if let Some(is_positive) = polarity {
                if is_positive != negate_next {
                    positive += 1;
                } else {
                    negative += 1;
                }
                negate_next = false;
            } else if is_negator || word.ends_with("n't") {
                negate_next = true;
            }
        }

        let total = positive + negative;
        if total == 0 || positive == negative {
            return SentimentResult::new(SentimentLabel::Neutral, 0.5);
        }

        let (label, majority) = if positive > negative {
            (SentimentLabel::Positive, positive)
        } else {
            (SentimentLabel::Negative, negative)
        };
        SentimentResult::new(label, f64::from(majority) / f64::from(total))
    }
}

#[async_trait::async_trait]
impl SentimentModelPort for LexiconModel {
    async fn predict(&self, text: &str) -> Result<SentimentResult, DomainError> {
        Ok(Self::score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let r = LexiconModel::score("This is a great and wonderful day!");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_negative_text() {
        let r = LexiconModel::score("Terrible service, I hate it.");
        assert_eq!(r.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_negation_flips_cue() {
        let r = LexiconModel::score("this is not good");
        assert_eq!(r.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_mixed_confidence_is_majority_share() {
        let r = LexiconModel::score("good great awesome but bad");
        assert_eq!(r.label, SentimentLabel::Positive);
        assert!((r.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_no_cues_is_neutral() {
        for text in ["", "   ", "the cat sat on the mat"] {
            let r = LexiconModel::score(text);
            assert_eq!(r.label, SentimentLabel::Neutral);
            assert!((0.0..=1.0).contains(&r.confidence));
        }
    }
}
