use tracing::Span;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{errors::Error, Result};

/// Initialize the tracing subscriber for the bot process.
///
/// Default: info for our crates, warn for everything else.
/// Can be overridden with `RUST_LOG`.
pub fn init(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,secretaria=info,secretaria_core=info,secretaria_finance=info,secretaria_telegram=info,{service_name}=info"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .try_init()
        .map_err(|e| Error::Config(format!("cannot initialize logging: {e}")))
}

/// Span handed to a component so its events are scoped under `component`.
pub fn component_span(parent: &Span, component: &'static str) -> Span {
    tracing::info_span!(parent: parent, "component", name = component)
}
