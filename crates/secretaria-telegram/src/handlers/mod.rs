//! Telegram update handlers.
//!
//! Converts a teloxide `Message` into the messenger-agnostic
//! `IncomingMessage` and hands it to the core inbound processor, which
//! checks the sender, runs the command and replies.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use secretaria_core::{
    domain::{ChatId, UserId},
    messaging::types::{IncomingMessage, MessageContent},
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    state.inbound.process(to_incoming(&msg)).await;
    Ok(())
}

fn to_incoming(msg: &Message) -> IncomingMessage {
    let content = match msg.text() {
        Some(text) => MessageContent::Text(text.to_string()),
        None => MessageContent::Other,
    };

    IncomingMessage {
        chat_id: ChatId(msg.chat.id.0),
        user_id: msg.from().map(|u| UserId(u.id.0 as i64)),
        content,
    }
}
