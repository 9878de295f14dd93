use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MAX_UPLOAD_MB: usize = 20;
const DEFAULT_SESSION_TTL_MINUTES: u64 = 120;

/// Application configuration loaded from environment variables.
///
/// The API credential is optional at startup: without it the service runs,
/// reports the gap on `/health`, and every analysis fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Sessions untouched for longer than this are dropped.
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = match optional_env("MAX_UPLOAD_MB") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
            None => DEFAULT_MAX_UPLOAD_MB,
        };

        let session_ttl_minutes = match optional_env("SESSION_TTL_MINUTES") {
            Some(v) => v
                .parse::<u64>()
                .context("SESSION_TTL_MINUTES must be a whole number of minutes")?,
            None => DEFAULT_SESSION_TTL_MINUTES,
        };

        Ok(Config {
            api_key: optional_env("API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            session_ttl: Duration::from_secs(session_ttl_minutes * 60),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_MINUTES * 60),
        }
    }
}

/// Unset and blank variables both count as missing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
