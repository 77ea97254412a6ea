//! Infrastructure adapters. Implement ports.
//!
//! Model runners, sentiment models, the CSV log, page fetchers, front-ends.
//! Map errors to DomainError.

pub mod inference;
pub mod search;
pub mod sentiment;
pub mod telegram;
pub mod ui;
