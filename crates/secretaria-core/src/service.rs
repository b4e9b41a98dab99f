use std::sync::Arc;

use crate::{errors::AppError, ports::CommandHandler};

pub const COMMAND_NOT_FOUND_MSG: &str = "Command not found";
pub const NO_COMMAND_INPUT_MSG: &str = "No command input";

/// Trim, lowercase and split on whitespace runs.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Entry point for inbound chat text.
///
/// Holds an ordered registry of command handlers, immutable after
/// construction; the first handler whose `matches` accepts the keyword wins.
#[derive(Clone, Default)]
pub struct BotService {
    handlers: Vec<Arc<dyn CommandHandler>>,
}

impl BotService {
    pub fn new(handlers: Vec<Arc<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    pub fn with_handler(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Produce reply text for `raw`.
    ///
    /// Empty input and unknown keywords are ordinary replies, not errors.
    pub async fn handle_text_message(&self, raw: &str) -> Result<String, AppError> {
        let tokens = tokenize(raw);
        let Some(command) = tokens.first() else {
            return Ok(NO_COMMAND_INPUT_MSG.to_string());
        };

        match self.handlers.iter().find(|h| h.matches(command)) {
            Some(handler) => handler.handle(&tokens).await,
            None => Ok(COMMAND_NOT_FOUND_MSG.to_string()),
        }
    }
}
