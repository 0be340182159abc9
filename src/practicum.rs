//! Practicum homework status API client

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::error::HeraldError;
use crate::io::HttpClient;
use crate::response::StatusReport;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Client for the homework status endpoint
pub struct PracticumClient {
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &ENDPOINT)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            token: config.practicum_token.clone(),
            http,
        }
    }

    /// Fetch homework statuses changed since `from_date` (seconds since epoch)
    pub async fn fetch(&self, from_date: u64) -> crate::Result<StatusReport> {
        let auth = format!("OAuth {}", self.token);
        let from_date = from_date.to_string();

        tracing::debug!("Fetching homework statuses from_date={}", from_date);

        let response = self
            .http
            .get(
                ENDPOINT,
                &[("Authorization", &auth)],
                &[("from_date", &from_date)],
            )
            .await?;

        if response.status != 200 {
            return Err(HeraldError::Status(response.status));
        }

        let value: Value = serde_json::from_str(&response.body)?;
        StatusReport::from_value(value)
    }
}
