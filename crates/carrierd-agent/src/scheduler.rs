//! Periodic refresh scheduling.
//!
//! Two states: idle and scheduled. `start` publishes immediately and then
//! re-arms on a fixed interval until `stop`, which also tears the reporter
//! down. One task, no overlap: each cycle finishes before the next tick is
//! awaited.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::service::StatusReporter;

pub struct RefreshScheduler {
    interval: Duration,
    running: Mutex<Option<Running>>,
}

struct Running {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> RefreshScheduler {
        RefreshScheduler {
            interval,
            running: Mutex::new(None),
        }
    }

    /// Idle → scheduled. No-op if already scheduled.
    pub async fn start(&self, reporter: Arc<dyn StatusReporter>) {
        let mut running = self.running.lock().await;
        if running.is_some() {
            tracing::warn!("refresh scheduler already running");
            return;
        }

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            if let Err(e) = reporter.on_start() {
                tracing::error!(error = %e, "status reporter start failed");
            }

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Consume the immediate first tick; on_start already published.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => reporter.refresh(),
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            reporter.on_stop();
                            return;
                        }
                    }
                }
            }
        });

        *running = Some(Running {
            shutdown: shutdown_tx,
            handle,
        });
        tracing::info!(interval_ms = interval.as_millis() as u64, "refresh scheduler started");
    }

    /// Scheduled → idle. Waits for any in-flight cycle to finish. Idempotent.
    pub async fn stop(&self) {
        let running = self.running.lock().await.take();
        let Some(running) = running else { return };

        let _ = running.shutdown.send(true);
        if let Err(e) = running.handle.await {
            tracing::error!(error = %e, "refresh task panicked");
        }
        tracing::info!("refresh scheduler stopped");
    }

    pub async fn is_scheduled(&self) -> bool {
        self.running.lock().await.is_some()
    }
}
