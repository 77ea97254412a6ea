//! Inference invoker. Sends a prompt to the configured backend and never fails.
//!
//! Backend errors are logged and folded into `InferenceOutcome::Failed`, whose text is the
//! fixed apology. No retry, no timeout: a hung backend blocks the caller.

use crate::domain::InferenceOutcome;
use crate::ports::InferencePort;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct InferenceInvoker {
    backend: Arc<dyn InferencePort>,
}

impl InferenceInvoker {
    pub fn new(backend: Arc<dyn InferencePort>) -> Self {
        Self { backend }
    }

    /// Run one completion and tag the result.
    pub async fn invoke(&self, prompt: &str) -> InferenceOutcome {
        info!(prompt = %prompt, "sending message to model");
        match self.backend.complete(prompt).await {
            Ok(text) => {
                debug!(response_len = text.len(), "model responded");
                InferenceOutcome::Completed(text)
            }
            Err(e) => {
                error!(error = %e, "error generating response");
                InferenceOutcome::Failed(e)
            }
        }
    }

    /// Completion text, or the apology on failure.
    pub async fn invoke_text(&self, prompt: &str) -> String {
        self.invoke(prompt).await.into_text()
    }
}
