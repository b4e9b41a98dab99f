use async_trait::async_trait;

use crate::errors::AppError;

/// A family of chat commands (finance today).
///
/// The router asks each registered handler in turn whether it owns the
/// command keyword (`tokens[0]`) and hands the whole token list to the first
/// one that does.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Returns true when this handler should process `command`.
    fn matches(&self, command: &str) -> bool;

    /// Execute the command. `tokens` is the normalized message, keyword first.
    async fn handle(&self, tokens: &[String]) -> Result<String, AppError>;
}
