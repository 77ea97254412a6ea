//! Inbound port. Chat front-ends (adapters) call into the application.

use crate::domain::DomainError;

/// A chat front-end: receives user turns, hands them to `BotService`, sends replies back.
#[async_trait::async_trait]
pub trait FrontendPort: Send + Sync {
    /// Run until the front-end is closed (console exit) or fails fatally.
    async fn run(&self) -> Result<(), DomainError>;
}
