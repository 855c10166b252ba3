use anyhow::{Context, Result};

pub const DEFAULT_JOOBLE_BASE_URL: &str = "https://jooble.org/api";

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Without a key the job-board endpoint answers 503.
    pub jooble_api_key: Option<String>,
    pub jooble_base_url: String,
    pub job_board_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            jooble_api_key: std::env::var("JOOBLE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            jooble_base_url: std::env::var("JOOBLE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_JOOBLE_BASE_URL.to_string()),
            job_board_timeout_secs: std::env::var("JOB_BOARD_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("JOB_BOARD_TIMEOUT_SECS must be a whole number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jooble_api_key: None,
            jooble_base_url: DEFAULT_JOOBLE_BASE_URL.to_string(),
            job_board_timeout_secs: 30,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}
