//! Scoped background task for periodic advertisement eviction.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Shortest sweep period accepted; `tokio::time::interval` rejects zero.
const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Handle owning a running eviction sweep.
///
/// The sweep stops when [`EvictionTask::shutdown`] is awaited or when the
/// handle is dropped. After `shutdown` returns no sweep is running.
#[derive(Debug)]
pub struct EvictionTask {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl EvictionTask {
    /// Spawns `sweep` to run once per `period`, starting one period from now.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn spawn<F>(period: Duration, sweep: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sweep_period = period.max(MIN_SWEEP_PERIOD);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(sweep_period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;
            while cancelled.run_until_cancelled(ticker.tick()).await.is_some() {
                sweep();
            }
            debug!("advertisement eviction stopped");
        });

        debug!(
            period_ms = sweep_period.as_millis(),
            "advertisement eviction started"
        );
        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Requests cancellation without waiting for the task to stop.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the sweep and waits for the task to finish.
    pub async fn shutdown(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take()
            && let Err(err) = handle.await
        {
            warn!(error = %err, "advertisement eviction task ended abnormally");
        }
    }
}

impl Drop for EvictionTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
