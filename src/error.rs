//! Error types for the herald service

/// Errors that can occur in the herald service
#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Unexpected response status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed API response: {0}")]
    Shape(String),

    #[error("Required keys missing from API response: {0}")]
    MissingKeys(String),

    #[error("Homework record is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Unknown homework status '{0}'")]
    UnknownStatus(String),

    #[error("Notifier error: {0}")]
    Notifier(String),
}

/// Result type alias for herald operations
pub type Result<T> = std::result::Result<T, HeraldError>;
