//! Telegram Bot API notification client

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::error::HeraldError;
use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API response envelope
#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Telegram message sender
pub struct TelegramNotifier {
    url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let url = format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_BASE, config.telegram_token
        );

        tracing::debug!("Created TelegramNotifier for chat {}", config.telegram_chat_id);

        Self {
            url,
            chat_id: config.telegram_chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> crate::Result<()> {
        let params = vec![("chat_id", self.chat_id.as_str()), ("text", text)];

        let response = self.http.post_form(&self.url, &params).await?;

        if response.status != 200 {
            return Err(HeraldError::Notifier(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        let parsed: SendMessageResponse = serde_json::from_str(&response.body)
            .map_err(|e| HeraldError::Notifier(format!("Unreadable Telegram response: {}", e)))?;
        if !parsed.ok {
            return Err(HeraldError::Notifier(
                parsed
                    .description
                    .unwrap_or_else(|| "sendMessage rejected".to_string()),
            ));
        }

        tracing::debug!("Telegram message sent");
        Ok(())
    }
}
