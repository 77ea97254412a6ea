//! Application configuration. Bot token, model runner, sentiment model, log path, search.
//!
//! Sources: `TG_SENTIMENT_*` env vars (after `.env` is loaded) and an optional config file
//! named by `TG_SENTIMENT_CONFIG`. A few unprefixed names are honoured for compatibility
//! (`TOKEN`, `HF_API_TOKEN`).

use crate::adapters::sentiment::hf_model::{DEFAULT_SENTIMENT_API_URL, DEFAULT_SENTIMENT_MODEL};
use crate::domain::DomainError;
use crate::usecases::ReplyMode;
use serde::Deserialize;
use std::str::FromStr;

pub const DEFAULT_MODEL: &str = "llama2";
pub const DEFAULT_SENTIMENT_LOG: &str = "sentiment_log.csv";
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// Which chat front-end drives the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendKind {
    Telegram,
    Console,
}

impl FrontendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrontendKind::Telegram => "telegram",
            FrontendKind::Console => "console",
        }
    }
}

impl FromStr for FrontendKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "telegram" => Ok(FrontendKind::Telegram),
            "console" => Ok(FrontendKind::Console),
            other => Err(DomainError::Config(format!(
                "unknown frontend '{}' (expected telegram|console)",
                other
            ))),
        }
    }
}

/// Where completions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceBackendKind {
    /// Spawn `<ollama_bin> run <model>` per prompt.
    Cli,
    /// OpenAI-compatible chat-completions endpoint.
    Http,
}

impl FromStr for InferenceBackendKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cli" => Ok(InferenceBackendKind::Cli),
            "http" => Ok(InferenceBackendKind::Http),
            other => Err(DomainError::Config(format!(
                "unknown inference backend '{}' (expected cli|http)",
                other
            ))),
        }
    }
}

/// How search pages are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFetcherKind {
    Curl,
    Http,
}

impl FromStr for SearchFetcherKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(SearchFetcherKind::Curl),
            "http" => Ok(SearchFetcherKind::Http),
            other => Err(DomainError::Config(format!(
                "unknown search fetcher '{}' (expected curl|http)",
                other
            ))),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Telegram bot token. Read from TG_SENTIMENT_BOT_TOKEN or TOKEN.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// "telegram" | "console". Defaults to telegram when a token is set.
    #[serde(default)]
    pub frontend: Option<String>,

    /// "combined" | "simple". Defaults to combined.
    #[serde(default)]
    pub reply_mode: Option<String>,

    /// Long-poll timeout for getUpdates in seconds (default 30).
    #[serde(default)]
    pub poll_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Inference
    // ─────────────────────────────────────────────────────────────────────────
    /// "cli" | "http". Defaults to cli.
    #[serde(default)]
    pub inference_backend: Option<String>,

    /// Model runner binary (default "ollama").
    #[serde(default)]
    pub ollama_bin: Option<String>,

    /// Model name (default "llama2").
    #[serde(default)]
    pub model: Option<String>,

    /// OpenAI-compatible endpoint for the http backend.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// API key for the http backend (empty for local Ollama).
    #[serde(default)]
    pub ai_api_key: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Sentiment
    // ─────────────────────────────────────────────────────────────────────────
    /// Hosted text-classification model id.
    #[serde(default)]
    pub sentiment_model: Option<String>,

    /// Base URL of the hosted inference API.
    #[serde(default)]
    pub sentiment_api_url: Option<String>,

    /// Hugging Face token. Read from TG_SENTIMENT_HF_API_TOKEN or HF_API_TOKEN.
    /// Without it the in-process lexicon model is used.
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// CSV log path (default "sentiment_log.csv"). Truncated at startup.
    #[serde(default)]
    pub sentiment_log_path: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub search_url: Option<String>,

    /// "curl" | "http". Defaults to curl.
    #[serde(default)]
    pub search_fetcher: Option<String>,

    #[serde(default)]
    pub curl_bin: Option<String>,

    /// User agent sent with search requests (default "Mozilla/5.0").
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TG_SENTIMENT"));
        if let Ok(path) = std::env::var("TG_SENTIMENT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // TOKEN is read directly (no prefix) so an existing .env with TOKEN=... keeps working
        if cfg.bot_token.is_none() {
            cfg.bot_token = std::env::var("TOKEN").ok().filter(|t| !t.is_empty());
        }
        if cfg.hf_api_token.is_none() {
            cfg.hf_api_token = std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty());
        }
        Ok(cfg)
    }

    /// Bot token, if configured and non-empty.
    pub fn bot_token(&self) -> Option<String> {
        self.bot_token.clone().filter(|t| !t.trim().is_empty())
    }

    /// Explicit front-end, else telegram when a token is present, else console.
    pub fn frontend(&self) -> Result<FrontendKind, DomainError> {
        match &self.frontend {
            Some(s) => s.parse(),
            None if self.bot_token().is_some() => Ok(FrontendKind::Telegram),
            None => Ok(FrontendKind::Console),
        }
    }

    pub fn reply_mode(&self) -> Result<ReplyMode, DomainError> {
        self.reply_mode
            .as_deref()
            .map(str::parse::<ReplyMode>)
            .unwrap_or(Ok(ReplyMode::Combined))
    }

    pub fn poll_timeout_secs_or_default(&self) -> u64 {
        self.poll_timeout_secs.unwrap_or(DEFAULT_POLL_TIMEOUT_SECS)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inference Helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn inference_backend(&self) -> Result<InferenceBackendKind, DomainError> {
        self.inference_backend
            .as_deref()
            .map(str::parse::<InferenceBackendKind>)
            .unwrap_or(Ok(InferenceBackendKind::Cli))
    }

    pub fn ollama_bin_or_default(&self) -> String {
        self.ollama_bin.clone().unwrap_or_else(|| "ollama".to_string())
    }

    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    /// Defaults to the local Ollama OpenAI-compatible endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434/v1/chat/completions".to_string())
    }

    pub fn ai_api_key_or_default(&self) -> String {
        self.ai_api_key.clone().unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sentiment Helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn sentiment_model_or_default(&self) -> String {
        self.sentiment_model
            .clone()
            .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string())
    }

    pub fn sentiment_api_url_or_default(&self) -> String {
        self.sentiment_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SENTIMENT_API_URL.to_string())
    }

    /// True if the hosted sentiment model can be used.
    pub fn is_hosted_sentiment_configured(&self) -> bool {
        self.hf_api_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    pub fn sentiment_log_path_or_default(&self) -> String {
        self.sentiment_log_path
            .clone()
            .unwrap_or_else(|| DEFAULT_SENTIMENT_LOG.to_string())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search Helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn search_url_or_default(&self) -> String {
        self.search_url
            .clone()
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string())
    }

    pub fn search_fetcher(&self) -> Result<SearchFetcherKind, DomainError> {
        self.search_fetcher
            .as_deref()
            .map(str::parse::<SearchFetcherKind>)
            .unwrap_or(Ok(SearchFetcherKind::Curl))
    }

    pub fn curl_bin_or_default(&self) -> String {
        self.curl_bin.clone().unwrap_or_else(|| "curl".to_string())
    }

    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| crate::adapters::search::curl_fetcher::DEFAULT_USER_AGENT.to_string())
    }
}
