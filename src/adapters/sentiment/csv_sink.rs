//! Implements SentimentSinkPort as a CSV file. Uses the `csv` crate for quoting/escaping.
//!
//! Layout: header `Message,Sentiment,Confidence`, then one row per successful classification.
//! Each append opens the file in append mode for that single write only.

use crate::domain::{DomainError, SentimentLogEntry};
use crate::ports::SentimentSinkPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const LOG_HEADER: [&str; 3] = ["Message", "Sentiment", "Confidence"];

/// CSV-backed sentiment log.
///
/// Writes are serialized through an internal lock, so rows from concurrent requests never
/// interleave within a line. Row order follows lock acquisition order.
pub struct CsvSentimentSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvSentimentSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Encode one record (with trailing newline) using standard CSV quoting.
fn encode_record<I, T>(record: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(record)?;
    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))
}

#[async_trait::async_trait]
impl SentimentSinkPort for CsvSentimentSink {
    async fn reset_with_header(&self) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Sink(format!("create log directory: {}", e)))?;
        }
        let header = encode_record(LOG_HEADER).map_err(|e| DomainError::Sink(e.to_string()))?;
        fs::write(&self.path, header)
            .await
            .map_err(|e| DomainError::Sink(format!("write header: {}", e)))?;
        info!(path = %self.path.display(), "sentiment log reset");
        Ok(())
    }

    async fn append(&self, entry: &SentimentLogEntry) -> Result<(), DomainError> {
        let confidence = entry.confidence.to_string();
        let row = encode_record([entry.text.as_str(), entry.label.as_str(), confidence.as_str()])
            .map_err(|e| DomainError::Sink(e.to_string()))?;

        let _guard = self.write_lock.lock().await;
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DomainError::Sink(format!("open log: {}", e)))?;
        f.write_all(&row)
            .await
            .map_err(|e| DomainError::Sink(format!("append row: {}", e)))?;
        f.flush()
            .await
            .map_err(|e| DomainError::Sink(format!("flush log: {}", e)))?;
        debug!(label = %entry.label, "sentiment row appended");
        Ok(())
    }
}
