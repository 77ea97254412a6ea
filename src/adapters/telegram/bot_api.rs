//! Implements FrontendPort over the Telegram Bot API (long polling).
//!
//! Each text message is handled on its own task, so slow model calls don't stall polling.
//! Poll failures are logged and the loop continues after a short pause.

use crate::adapters::telegram::types::{
    ApiResponse, GetUpdatesRequest, IncomingMessage, SendMessageRequest, Update,
};
use crate::domain::DomainError;
use crate::ports::FrontendPort;
use crate::usecases::BotService;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram rejects messages longer than this many UTF-16 code units.
pub const MAX_MESSAGE_UNITS: usize = 4096;

/// Pause after a failed poll before trying again.
const POLL_ERROR_DELAY: Duration = Duration::from_secs(5);

/// Split `text` into chunks of at most `max_units` UTF-16 code units (never splits a char).
pub fn split_message(text: &str, max_units: usize) -> Vec<String> {
    if text.is_empty() || max_units == 0 {
        return vec![text.to_string()];
    }
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut units = 0;
    for c in text.chars() {
        let width = c.len_utf16();
        if units + width > max_units && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            units = 0;
        }
        current.push(c);
        units += width;
    }
    chunks.push(current);
    chunks
}

/// Bot API client; cheap to clone into per-message tasks.
#[derive(Clone)]
struct BotApi {
    client: reqwest::Client,
    base_url: String,
}

impl BotApi {
    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, method);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            // reqwest errors can embed the URL, which contains the token.
            .map_err(|e| DomainError::Frontend(format!("{}: {}", method, e.without_url())))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| DomainError::Frontend(format!("{}: bad response: {}", method, e.without_url())))?;

        if !envelope.ok {
            return Err(DomainError::Frontend(format!(
                "{}: {}",
                method,
                envelope.description.unwrap_or_else(|| "unknown error".into())
            )));
        }
        envelope
            .result
            .ok_or_else(|| DomainError::Frontend(format!("{}: empty result", method)))
    }

    async fn send_text(&self, chat_id: i64, text: &str, reply_to: i64) -> Result<(), DomainError> {
        for chunk in split_message(text, MAX_MESSAGE_UNITS) {
            let req = SendMessageRequest {
                chat_id,
                text: &chunk,
                reply_to_message_id: Some(reply_to),
            };
            let _: serde_json::Value = self.call("sendMessage", &req).await?;
        }
        Ok(())
    }
}

/// Telegram bot front-end.
pub struct TelegramBotAdapter {
    api: BotApi,
    bot: Arc<BotService>,
    poll_timeout_secs: u64,
}

impl TelegramBotAdapter {
    /// # Arguments
    /// * `token` - Bot token from @BotFather
    /// * `bot` - Command router shared by all front-ends
    /// * `poll_timeout_secs` - Long-poll timeout for getUpdates
    pub fn new(token: &str, bot: Arc<BotService>, poll_timeout_secs: u64) -> Self {
        Self {
            api: BotApi {
                client: reqwest::Client::new(),
                base_url: format!("{}/bot{}", TELEGRAM_API_URL, token),
            },
            bot,
            poll_timeout_secs,
        }
    }

    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, DomainError> {
        let req = GetUpdatesRequest {
            offset,
            timeout: self.poll_timeout_secs,
            allowed_updates: vec!["message".to_string()],
        };
        self.api.call("getUpdates", &req).await
    }

    fn dispatch(&self, message: IncomingMessage) {
        let Some(text) = message.text else {
            debug!(chat_id = message.chat.id, "skipping non-text message");
            return;
        };
        let api = self.api.clone();
        let bot = Arc::clone(&self.bot);
        let chat_id = message.chat.id;
        let message_id = message.message_id;

        tokio::spawn(async move {
            info!(chat_id, message_id, "message received");
            let Some(reply) = bot.respond(text).await else {
                return;
            };
            if let Err(e) = api.send_text(chat_id, &reply, message_id).await {
                error!(chat_id, message_id, error = %e, "failed to send reply");
            }
        });
    }
}

#[async_trait]
impl FrontendPort for TelegramBotAdapter {
    async fn run(&self) -> Result<(), DomainError> {
        let me: serde_json::Value = self.api.call("getMe", &serde_json::json!({})).await?;
        info!(
            username = %me.get("username").and_then(|u| u.as_str()).unwrap_or("?"),
            "starting Telegram bot (long polling)"
        );

        let mut offset = 0i64;
        loop {
            match self.get_updates(offset).await {
                Ok(updates) => {
                    for update in updates {
                        offset = offset.max(update.update_id + 1);
                        if let Some(message) = update.message {
                            self.dispatch(message);
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "getUpdates failed; retrying after pause");
                    tokio::time::sleep(POLL_ERROR_DELAY).await;
                }
            }
        }
    }
}
