//! Engine: the poll loop, failure reporting, and de-duplication

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::error::HeraldError;
use crate::homework::Homework;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;

/// Fixed interval between poll cycles
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Mutable loop state: the fetch watermark and the last notified failure.
///
/// Lives for the process lifetime; the last-error text is never cleared,
/// so a failure recurring after a recovery is still suppressed.
#[derive(Debug, Clone)]
pub struct PollContext {
    /// Lower bound (seconds since epoch) for the next fetch
    pub watermark: u64,
    /// Diagnostic text of the most recently notified failure
    pub last_error: Option<String>,
}

impl PollContext {
    /// Start polling from the current instant
    pub fn new() -> Self {
        Self {
            watermark: epoch_seconds(),
            last_error: None,
        }
    }
}

impl Default for PollContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The engine drives fetch, translate, notify cycles until cancelled
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            interval,
            cancel,
        }
    }

    /// Run poll cycles until the cancellation token fires.
    ///
    /// The sleep between cycles is unconditional; a failed cycle waits the
    /// same interval as a successful one.
    pub async fn run(&self, ctx: &mut PollContext) {
        loop {
            match self.run_cycle(ctx).await {
                Ok(notified) => {
                    tracing::debug!("Cycle complete, {} notification(s) sent", notified);
                }
                Err(e) => self.report_failure(ctx, &e).await,
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }

    /// One fetch -> validate -> translate -> notify pass.
    ///
    /// Every item in the report is processed in order. The watermark only
    /// advances once the whole pass has succeeded, so items lost to a
    /// failed cycle are re-fetched on the next one.
    async fn run_cycle(&self, ctx: &mut PollContext) -> crate::Result<usize> {
        let report = self.client.fetch(ctx.watermark).await?;

        if report.homeworks.is_empty() {
            tracing::debug!("No new homework statuses");
        }

        let mut notified = 0;
        for item in &report.homeworks {
            let homework = Homework::from_value(item)?;
            self.send(&homework.message()).await;
            notified += 1;
        }

        ctx.watermark = epoch_seconds();
        Ok(notified)
    }

    /// Log a cycle failure and notify once per distinct diagnostic text
    async fn report_failure(&self, ctx: &mut PollContext, error: &HeraldError) {
        let message = format!("Program failure: {}", error);
        tracing::error!("{}", message);

        if ctx.last_error.as_deref() == Some(message.as_str()) {
            return;
        }

        self.send(&message).await;
        ctx.last_error = Some(message);
    }

    /// Send a message, swallowing transport failures: a lost notification
    /// must never abort the poll loop.
    async fn send(&self, text: &str) {
        match self.notifier.send(text).await {
            Ok(()) => tracing::debug!("Notification sent"),
            Err(e) => tracing::error!("Failed to send notification: {}", e),
        }
    }
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
