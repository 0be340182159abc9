//! Herald - Homework review notification service
//!
//! Polls the Practicum homework status API and relays new verdicts to a
//! Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod homework;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod telegram;

pub use config::Config;
pub use error::{HeraldError, Result};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::{Engine, PollContext, RETRY_PERIOD};
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the herald service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let cancel = CancellationToken::new();

    let client = PracticumClient::new(&config, Arc::clone(&http));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&config, Arc::clone(&http)));

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let engine = Engine::new(client, notifier, RETRY_PERIOD, cancel);
    let mut ctx = PollContext::new();

    tracing::info!("Herald engine started");

    // Run the engine (blocks until cancelled)
    engine.run(&mut ctx).await;

    tracing::info!("Herald engine stopped");

    Ok(())
}
