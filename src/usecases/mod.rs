//! Application use cases. Orchestrate domain logic via ports.

pub mod bot_service;
pub mod inference_invoker;
pub mod relay_service;
pub mod search_service;
pub mod sentiment_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use bot_service::BotService;
pub use inference_invoker::InferenceInvoker;
pub use relay_service::{RelayService, ReplyMode};
pub use search_service::{SearchService, build_search_url};
pub use sentiment_service::SentimentService;
