use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Outbound side of a messenger (Telegram today).
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
