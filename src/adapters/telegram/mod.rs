//! Telegram front-end. Bot API long polling; replies via sendMessage.

pub mod bot_api;
pub mod types;

pub use bot_api::TelegramBotAdapter;
