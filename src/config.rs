//! Environment-sourced configuration

use crate::error::HeraldError;

/// Runtime configuration for the service
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Telegram chat to deliver notifications to
    pub telegram_chat_id: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// All three variables are required and must be non-empty; the first
    /// missing one aborts startup.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_values(
            std::env::var("PRACTICUM_TOKEN").ok(),
            std::env::var("TELEGRAM_TOKEN").ok(),
            std::env::var("TELEGRAM_CHAT_ID").ok(),
        )
    }

    fn from_values(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
    ) -> crate::Result<Self> {
        Ok(Self {
            practicum_token: require("PRACTICUM_TOKEN", practicum_token)?,
            telegram_token: require("TELEGRAM_TOKEN", telegram_token)?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID", telegram_chat_id)?,
        })
    }
}

fn require(name: &str, value: Option<String>) -> crate::Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(HeraldError::Config(format!(
            "Missing required environment variable: {}",
            name
        ))),
    }
}
