use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::upstream::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 55;
const DEFAULT_USER_ID: &str = "user_12345";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub upstream_user_id: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upstream_base_url: env_or("UPSTREAM_BASE_URL", DEFAULT_BASE_URL),
            upstream_timeout: Duration::from_secs(
                env_or("UPSTREAM_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
                    .parse::<u64>()
                    .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            upstream_user_id: env_or("UPSTREAM_USER_ID", DEFAULT_USER_ID),
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
