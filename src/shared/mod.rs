//! Cross-cutting helpers shared by main and the adapters.

pub mod config;
