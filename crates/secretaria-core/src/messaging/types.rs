use crate::domain::{ChatId, UserId};

/// One already-authenticated message delivered by a messenger adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: ChatId,
    pub user_id: Option<UserId>,
    pub content: MessageContent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageContent {
    Text(String),
    /// Stickers, photos, voice, ... anything the bot does not understand.
    Other,
}
