//! Command routing shared by every front-end.
//!
//! `/start` greets, `/search` runs the search fallback, plain text goes through the relay.
//! `respond` is the catch-all: a panicking handler still yields a textual reply.

use crate::domain::BotCommand;
use crate::usecases::{RelayService, ReplyMode, SearchService, SentimentService};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const GREETING: &str = "Hello! I'm your AI chatbot. How can I assist you today?";
pub const SEARCH_USAGE: &str = "Please provide a search query. Example: /search Python programming";
pub const CHAT_APOLOGY: &str = "Sorry, I couldn't process that. Please try again.";
pub const SEARCH_APOLOGY: &str = "Sorry, I couldn't fetch search results. Please try again.";

pub struct BotService {
    relay: Arc<RelayService>,
    search: Arc<SearchService>,
    sentiment: Arc<SentimentService>,
    reply_mode: ReplyMode,
}

impl BotService {
    pub fn new(
        relay: Arc<RelayService>,
        search: Arc<SearchService>,
        sentiment: Arc<SentimentService>,
        reply_mode: ReplyMode,
    ) -> Self {
        Self {
            relay,
            search,
            sentiment,
            reply_mode,
        }
    }

    /// Handle one inbound turn on its own task. `None` means "do not reply".
    pub async fn respond(self: Arc<Self>, text: String) -> Option<String> {
        let command = BotCommand::parse(&text);
        let fallback = match command {
            BotCommand::Search(_) => SEARCH_APOLOGY,
            _ => CHAT_APOLOGY,
        };
        let this = Arc::clone(&self);
        match tokio::spawn(async move { this.handle(command).await }).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "unexpected error handling message");
                Some(fallback.to_string())
            }
        }
    }

    /// Route a parsed command.
    pub async fn handle(&self, command: BotCommand) -> Option<String> {
        match command {
            BotCommand::Start => Some(GREETING.to_string()),
            BotCommand::Search(query) if query.trim().is_empty() => Some(SEARCH_USAGE.to_string()),
            BotCommand::Search(query) => {
                let result = self.search.search_top_result(&query).await;
                let sentiment = self.sentiment.classify(&result).await.result();
                info!(query = %query, sentiment = %sentiment, "search answered");
                Some(result)
            }
            BotCommand::Chat(text) => {
                let reply = self.relay.reply(self.reply_mode, &text).await;
                // Chat front-ends reject empty messages.
                if reply.trim().is_empty() {
                    warn!("model returned an empty reply");
                    return Some(CHAT_APOLOGY.to_string());
                }
                Some(reply)
            }
            BotCommand::Unsupported(name) => {
                debug!(command = %name, "ignoring unsupported command");
                None
            }
        }
    }
}
