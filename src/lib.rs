//! tg-sentiment: Telegram relay to a local LLM with sentiment tagging, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
