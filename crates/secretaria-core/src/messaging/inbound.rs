use std::sync::Arc;

use tracing::Span;

use crate::{
    domain::{ChatId, UserId},
    messaging::{
        port::MessagingPort,
        types::{IncomingMessage, MessageContent},
    },
    security::is_authorized,
    service::BotService,
};

pub const UNAUTHORIZED_MSG: &str = "Unauthorized action!";
pub const UNKNOWN_MESSAGE_TYPE_MSG: &str = "Unknown message type";

/// Turns incoming messages into replies.
///
/// Every message gets exactly one reply attempt; delivery failures are
/// logged and swallowed so later messages still get processed.
pub struct InboundProcessor {
    service: Arc<BotService>,
    messenger: Arc<dyn MessagingPort>,
    owner: UserId,
    span: Span,
}

impl InboundProcessor {
    pub fn new(
        service: Arc<BotService>,
        messenger: Arc<dyn MessagingPort>,
        owner: UserId,
        span: Span,
    ) -> Self {
        Self {
            service,
            messenger,
            owner,
            span,
        }
    }

    pub async fn process(&self, msg: IncomingMessage) {
        let reply = self.reply_for(&msg).await;
        self.reply(msg.chat_id, &reply).await;
    }

    async fn reply_for(&self, msg: &IncomingMessage) -> String {
        if !is_authorized(msg.user_id, self.owner) {
            let user_id = msg.user_id.map(|u| u.0);
            tracing::warn!(
                parent: &self.span,
                user_id = ?user_id,
                chat_id = msg.chat_id.0,
                "unauthorized sender"
            );
            return UNAUTHORIZED_MSG.to_string();
        }

        match &msg.content {
            MessageContent::Text(text) => match self.service.handle_text_message(text).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::info!(
                        parent: &self.span,
                        status = err.status_code(),
                        "command failed: {}",
                        err.message().replace('\n', " ")
                    );
                    err.message().to_string()
                }
            },
            MessageContent::Other => UNKNOWN_MESSAGE_TYPE_MSG.to_string(),
        }
    }

    async fn reply(&self, chat_id: ChatId, text: &str) {
        if let Err(e) = self.messenger.send_text(chat_id, text).await {
            tracing::error!(parent: &self.span, chat_id = chat_id.0, "cannot reply message: {e}");
        }
    }
}
