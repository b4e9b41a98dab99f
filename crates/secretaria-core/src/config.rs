use std::{env, fs, net::SocketAddr, path::Path, time::Duration};

use crate::{domain::UserId, errors::Error, Result};

/// Keys that must be present (and non-blank) for the bot to start.
///
/// Checked in order; the first missing one is reported.
pub const REQUIRED_KEYS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_OWNER_ID",
    "FINANCE_SERVICE_URL",
];

const DEFAULT_FINANCE_TIMEOUT_MS: u64 = 10_000;

/// Typed runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub telegram_bot_token: String,
    /// The only sender allowed to issue commands.
    pub owner_id: UserId,
    pub finance_service_url: String,
    pub finance_timeout: Duration,
    /// Bind address for the HTTP test surface; disabled when unset.
    pub http_addr: Option<SocketAddr>,
}

impl Config {
    /// Load from the process environment (plus `.env`, if present).
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let value = |key: &str| lookup(key).and_then(non_empty);

        check_missing(&value)?;

        let telegram_bot_token = value("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        let owner_raw = value("TELEGRAM_OWNER_ID").unwrap_or_default();
        let owner_id = owner_raw
            .trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| {
                Error::Config(format!(
                    "TELEGRAM_OWNER_ID must be a numeric user id, got '{owner_raw}'"
                ))
            })?;

        let finance_service_url = value("FINANCE_SERVICE_URL")
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/')
            .to_string();

        let finance_timeout = match value("FINANCE_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                Error::Config(format!(
                    "FINANCE_TIMEOUT_MS must be a whole number of milliseconds, got '{raw}'"
                ))
            })?,
            None => Duration::from_millis(DEFAULT_FINANCE_TIMEOUT_MS),
        };

        let http_addr = value("HTTP_ADDR")
            .map(|raw| {
                raw.trim().parse::<SocketAddr>().map_err(|_| {
                    Error::Config(format!("HTTP_ADDR must be a host:port address, got '{raw}'"))
                })
            })
            .transpose()?;

        Ok(Self {
            telegram_bot_token,
            owner_id,
            finance_service_url,
            finance_timeout,
            http_addr,
        })
    }
}

fn check_missing(value: &impl Fn(&str) -> Option<String>) -> Result<()> {
    for key in REQUIRED_KEYS {
        if value(key).is_none() {
            return Err(Error::Config(format!("{key} is missing in the config")));
        }
    }
    Ok(())
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, unquote(v.trim()));
    }
}

fn unquote(val: &str) -> &str {
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        &val[1..val.len() - 1]
    } else {
        val
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
