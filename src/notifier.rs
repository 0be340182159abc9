//! Notifier trait for relaying messages

use async_trait::async_trait;

/// Trait for sending a text message to the configured recipient
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Send a text message
    async fn send(&self, text: &str) -> crate::Result<()>;
}
