//! Implements FrontendPort as an interactive terminal chat (inquire prompts).
//!
//! Same commands as the Telegram bot. `/quit`, Esc or Ctrl-C ends the session.

use crate::domain::DomainError;
use crate::ports::FrontendPort;
use crate::usecases::BotService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, Text};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];

pub struct ConsoleFrontend {
    bot: Arc<BotService>,
}

impl ConsoleFrontend {
    pub fn new(bot: Arc<BotService>) -> Self {
        Self { bot }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[async_trait]
impl FrontendPort for ConsoleFrontend {
    async fn run(&self) -> Result<(), DomainError> {
        println!("Type a message, /search <query>, or /quit.");
        loop {
            let input = match Text::new("You:").prompt() {
                Ok(s) => s,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Frontend(e.to_string())),
            };
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.contains(&trimmed) {
                break;
            }

            let spinner = thinking_spinner();
            let reply = Arc::clone(&self.bot).respond(input).await;
            spinner.finish_and_clear();

            if let Some(reply) = reply {
                println!("{}\n", reply);
            }
        }
        info!("console session ended");
        Ok(())
    }
}
