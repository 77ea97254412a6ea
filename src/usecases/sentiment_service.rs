//! Sentiment classifier. Runs the model and appends each successful result to the sink.
//!
//! Failures degrade to ("Unknown", 0.0) and are not written to the log.

use crate::domain::{DomainError, SentimentLogEntry, SentimentOutcome, SentimentResult};
use crate::ports::{SentimentModelPort, SentimentSinkPort};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Service wrapping the sentiment model and the log sink.
pub struct SentimentService {
    model: Arc<dyn SentimentModelPort>,
    sink: Arc<dyn SentimentSinkPort>,
}

impl SentimentService {
    /// # Arguments
    /// * `model` - Sentiment model (hosted, lexicon, ...)
    /// * `sink` - Append-only log shared by every request
    pub fn new(model: Arc<dyn SentimentModelPort>, sink: Arc<dyn SentimentSinkPort>) -> Self {
        Self { model, sink }
    }

    /// Truncate the log and write its header. Call once at startup, before any `classify`.
    pub async fn initialize_log(&self) -> Result<(), DomainError> {
        self.sink.reset_with_header().await?;
        info!("sentiment log initialized");
        Ok(())
    }

    /// Classify `text` and log the row. Identical inputs are reclassified and re-logged.
    pub async fn classify(&self, text: &str) -> SentimentOutcome {
        match self.classify_and_log(text).await {
            Ok(result) => {
                debug!(label = %result.label, confidence = result.confidence, "classified");
                SentimentOutcome::Classified(result)
            }
            Err(e) => {
                error!(error = %e, "error analyzing sentiment");
                SentimentOutcome::Degraded(e)
            }
        }
    }

    async fn classify_and_log(&self, text: &str) -> Result<SentimentResult, DomainError> {
        let result = self.model.predict(text).await?;
        self.sink
            .append(&SentimentLogEntry::new(text, result))
            .await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sentiment::CsvSentimentSink;
    use crate::domain::SentimentLabel;
    use crate::usecases::test_support::{FailingModel, FixedModel};

    fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        rdr.records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    fn service_with(
        model: Arc<dyn SentimentModelPort>,
        dir: &tempfile::TempDir,
    ) -> (SentimentService, std::path::PathBuf) {
        let path = dir.path().join("sentiment_log.csv");
        let sink = Arc::new(CsvSentimentSink::new(&path));
        (SentimentService::new(model, sink), path)
    }

    #[tokio::test]
    async fn test_classify_logs_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let (service, path) = service_with(
            Arc::new(FixedModel::new(SentimentLabel::Positive, 0.98)),
            &dir,
        );
        service.initialize_log().await.unwrap();

        let outcome = service.classify("hello").await;
        let result = outcome.result();
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!((0.0..=1.0).contains(&result.confidence));

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Message", "Sentiment", "Confidence"]);
        assert_eq!(rows[1][0], "hello");
        assert_eq!(rows[1][1], "POSITIVE");
        assert_eq!(rows[1][2].parse::<f64>().unwrap(), 0.98);
    }

    #[tokio::test]
    async fn test_model_failure_degrades_without_logging() {
        let dir = tempfile::tempdir().unwrap();
        let (service, path) = service_with(Arc::new(FailingModel), &dir);
        service.initialize_log().await.unwrap();

        let outcome = service.classify("hello").await;
        assert!(outcome.is_degraded());
        assert_eq!(outcome.result(), SentimentResult::unknown());
        assert_eq!(outcome.result().label.as_str(), "Unknown");
        assert_eq!(outcome.result().confidence, 0.0);

        assert_eq!(read_rows(&path).len(), 1);
    }

    #[tokio::test]
    async fn test_repeated_text_is_logged_every_time() {
        let dir = tempfile::tempdir().unwrap();
        let (service, path) = service_with(
            Arc::new(FixedModel::new(SentimentLabel::Negative, 0.7)),
            &dir,
        );
        service.initialize_log().await.unwrap();

        service.classify("same").await;
        service.classify("same").await;
        service.classify("same").await;

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 4);
        assert!(rows[1..].iter().all(|r| r[0] == "same" && r[1] == "NEGATIVE"));
    }

    #[tokio::test]
    async fn test_initialize_twice_keeps_only_header() {
        let dir = tempfile::tempdir().unwrap();
        let (service, path) = service_with(
            Arc::new(FixedModel::new(SentimentLabel::Positive, 0.5)),
            &dir,
        );
        service.initialize_log().await.unwrap();
        service.classify("one").await;
        service.initialize_log().await.unwrap();
        service.initialize_log().await.unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows, vec![vec!["Message", "Sentiment", "Confidence"]]);
    }

    #[tokio::test]
    async fn test_empty_text_is_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let (service, path) = service_with(
            Arc::new(FixedModel::new(SentimentLabel::Neutral, 0.5)),
            &dir,
        );
        service.initialize_log().await.unwrap();

        let outcome = service.classify("").await;
        assert!(!outcome.is_degraded());
        assert_eq!(read_rows(&path).len(), 2);
    }

    #[tokio::test]
    async fn test_sink_failure_degrades() {
        let dir = tempfile::tempdir().unwrap();
        // Parent is a regular file, so the append cannot open the log.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let sink = Arc::new(CsvSentimentSink::new(blocker.join("log.csv")));
        let service = SentimentService::new(
            Arc::new(FixedModel::new(SentimentLabel::Positive, 0.9)),
            sink,
        );

        let outcome = service.classify("hello").await;
        assert!(outcome.is_degraded());
        assert_eq!(outcome.result(), SentimentResult::unknown());
    }
}
