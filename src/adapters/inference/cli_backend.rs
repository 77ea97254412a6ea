//! Implements InferencePort by spawning a local model runner (e.g. `ollama run llama2`).
//!
//! One process per prompt. The prompt is the whole stdin; stdout (trimmed) is the completion.
//! No timeout: a hung runner blocks the caller.

use crate::domain::DomainError;
use crate::ports::InferencePort;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// External-process inference backend.
pub struct CliInferenceBackend {
    program: String,
    args: Vec<String>,
}

impl CliInferenceBackend {
    /// Arbitrary program + args; the prompt is written to its stdin.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `<ollama_bin> run <model>`.
    pub fn ollama(ollama_bin: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(ollama_bin, vec!["run".to_string(), model.into()])
    }
}

#[async_trait]
impl InferencePort for CliInferenceBackend {
    async fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        debug!(program = %self.program, args = ?self.args, "spawning model process");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::InferenceUnavailable(format!("spawn {}: {}", self.program, e))
            })?;

        // Stdin is fed from its own task; stdout and stderr are drained concurrently.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            tokio::spawn(async move {
                match stdin.write_all(prompt.as_bytes()).await {
                    // Runner exited without reading; its exit status decides the outcome.
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        debug!("model process closed stdin early");
                        Ok(())
                    }
                    other => other,
                }
                // Dropping stdin closes the pipe so the runner sees EOF.
            })
        });

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| DomainError::InferenceUnavailable(format!("wait: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::InferenceUnavailable(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        if let Some(writer) = writer {
            writer
                .await
                .map_err(|e| DomainError::InferenceUnavailable(format!("stdin task: {}", e)))?
                .map_err(|e| DomainError::InferenceUnavailable(format!("write prompt: {}", e)))?;
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
