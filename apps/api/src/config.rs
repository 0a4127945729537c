use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; startup fails only on values that do not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Quiet window for live-preview sessions. Keystrokes inside the window coalesce.
    pub preview_debounce_ms: u64,
    /// Upper bound for uploaded logos, in bytes.
    pub max_logo_bytes: usize,
    pub max_preview_sessions: usize,
    /// Preview sessions untouched for this long are evicted.
    pub preview_idle_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            preview_debounce_ms: 100,
            max_logo_bytes: 2 * 1024 * 1024,
            max_preview_sessions: 256,
            preview_idle_ttl_secs: 30 * 60,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            preview_debounce_ms: parse_env("PREVIEW_DEBOUNCE_MS", defaults.preview_debounce_ms)?,
            max_logo_bytes: parse_env("MAX_LOGO_BYTES", defaults.max_logo_bytes)?,
            max_preview_sessions: parse_env(
                "MAX_PREVIEW_SESSIONS",
                defaults.max_preview_sessions,
            )?,
            preview_idle_ttl_secs: parse_env(
                "PREVIEW_IDLE_TTL_SECS",
                defaults.preview_idle_ttl_secs,
            )?,
        })
    }

    pub fn preview_debounce(&self) -> Duration {
        Duration::from_millis(self.preview_debounce_ms)
    }

    pub fn preview_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.preview_idle_ttl_secs)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
