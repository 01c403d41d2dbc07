use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use placard_export::pdf::ChromeOptions;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub chrome: ChromeOptions,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Unset or empty variables take their defaults; anything unparsable is
    /// an error naming the variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ChromeOptions::default();

        let bind_addr = parse_or(get("PLACARD_BIND_ADDR"), "PLACARD_BIND_ADDR", || {
            SocketAddr::from(([0, 0, 0, 0], 8080))
        })?;

        let no_sandbox = match get("PLACARD_NO_SANDBOX") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| eyre::eyre!("PLACARD_NO_SANDBOX: expected a boolean, got {raw:?}"))?,
            None => defaults.no_sandbox,
        };

        let timeout_secs: u64 = parse_or(
            get("PLACARD_EXPORT_TIMEOUT_SECS"),
            "PLACARD_EXPORT_TIMEOUT_SECS",
            || defaults.timeout.as_secs(),
        )?;
        if timeout_secs == 0 {
            return Err(eyre::eyre!("PLACARD_EXPORT_TIMEOUT_SECS must be greater than zero"));
        }

        let settle_ms: u64 = parse_or(get("PLACARD_SETTLE_MS"), "PLACARD_SETTLE_MS", || {
            defaults.settle.as_millis() as u64
        })?;

        let ready_poll_ms: u64 = parse_or(get("PLACARD_READY_POLL_MS"), "PLACARD_READY_POLL_MS", || {
            defaults.ready_poll.as_millis() as u64
        })?;
        if ready_poll_ms == 0 {
            return Err(eyre::eyre!("PLACARD_READY_POLL_MS must be greater than zero"));
        }

        Ok(Self {
            bind_addr,
            chrome: ChromeOptions {
                executable: get("CHROME_PATH").map(PathBuf::from),
                no_sandbox,
                timeout: Duration::from_secs(timeout_secs),
                settle: Duration::from_millis(settle_ms),
                ready_poll: Duration::from_millis(ready_poll_ms),
            },
        })
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: impl FnOnce() -> T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("{key}: invalid value {raw:?}: {e}")),
        None => Ok(default()),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
