use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};
use tracing::Span;

use secretaria_core::{
    config::Config,
    logging::component_span,
    messaging::{inbound::InboundProcessor, port::MessagingPort},
    service::BotService,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub inbound: Arc<InboundProcessor>,
}

/// Run the bot with long polling until the dispatcher stops (Ctrl-C).
pub async fn run_polling(
    cfg: Arc<Config>,
    service: Arc<BotService>,
    span: Span,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        println!("secretaria started: @{}", me.username());
    }
    println!("Owner: {}", cfg.owner_id.0);
    println!("Finance service: {}", cfg.finance_service_url);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let inbound = Arc::new(InboundProcessor::new(
        service,
        messenger,
        cfg.owner_id,
        component_span(&span, "inbound"),
    ));

    let state = Arc::new(AppState { inbound });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
