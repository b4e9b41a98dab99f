//! Inbound HTTP adapter (axum).
//!
//! Serves a health check and a JSON endpoint that feeds text straight into
//! `BotService`, bypassing the chat platform. This is the one place where an
//! `AppError`'s status kind becomes a real HTTP status.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::Span;

use secretaria_core::{errors::AppError, service::BotService, Result};

pub const TEST_MESSAGE_PATH: &str = "/__test";

#[derive(Clone)]
pub struct HttpState {
    service: Arc<BotService>,
    span: Span,
}

/// Body of `POST /__test`. A missing `message` is treated as empty text.
#[derive(Debug, Deserialize)]
pub struct TestMessage {
    #[serde(default)]
    pub message: String,
}

pub fn router(service: Arc<BotService>, span: Span) -> Router {
    Router::new()
        .route("/", get(health))
        .route(TEST_MESSAGE_PATH, post(handle_test_message))
        .with_state(HttpState { service, span })
}

/// Serve until the listener fails.
pub async fn serve(listener: TcpListener, service: Arc<BotService>, span: Span) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(parent: &span, %addr, "listening and serving HTTP");
    }
    axum::serve(listener, router(service, span)).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "UP" }))
}

async fn handle_test_message(State(state): State<HttpState>, body: Bytes) -> Response {
    let msg: TestMessage = match serde_json::from_slice(&body) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!(parent: &state.span, "bad test message body: {e}");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    match state.service.handle_text_message(&msg.message).await {
        Ok(reply) => (StatusCode::OK, Json(json!({ "message": reply }))).into_response(),
        Err(err) => app_error_response(&err),
    }
}

fn app_error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    error_response(status, err.message())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
