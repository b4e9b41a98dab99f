use std::sync::Arc;

use secretaria_core::{
    config::Config, finance::FinanceHandler, logging::component_span, service::BotService,
};
use secretaria_finance::FinanceHttpClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    secretaria_core::logging::init("secretaria")?;
    let root = tracing::info_span!("secretaria");

    let cfg = Arc::new(Config::load()?);

    let finance = Arc::new(FinanceHttpClient::new(
        cfg.finance_service_url.clone(),
        cfg.finance_timeout,
        component_span(&root, "finance-client"),
    )?);

    let service = Arc::new(BotService::default().with_handler(Arc::new(FinanceHandler::new(
        finance,
        component_span(&root, "finance"),
    ))));

    if let Some(addr) = cfg.http_addr {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        let http = secretaria_http::serve(listener, service.clone(), component_span(&root, "http"));
        let http_span = root.clone();
        tokio::spawn(async move {
            if let Err(e) = http.await {
                tracing::error!(parent: &http_span, "http server stopped: {e}");
            }
        });
    }

    secretaria_telegram::router::run_polling(cfg, service, root)
        .await
        .map_err(|e| anyhow::anyhow!("telegram bot failed: {e}"))?;

    Ok(())
}
