//! Live updates
//!
//! Refreshes once immediately, then once per interval until stopped. Each
//! tick spawns its own refresh, so a slow cycle never delays the next one
//! and two cycles may overlap.

use super::refresher::Refresher;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

pub struct Poller {
    refresher: Arc<Refresher>,
    interval: Duration,
}

impl Poller {
    pub fn new(refresher: Arc<Refresher>, interval: Duration) -> Self {
        // tokio intervals reject a zero period.
        let interval = interval.max(Duration::from_millis(1));
        Self {
            refresher,
            interval,
        }
    }

    pub fn start(self) -> PollerHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let interval = self.interval;
        let refresher = self.refresher;

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let refresher = refresher.clone();
                        tokio::spawn(async move {
                            refresher.refresh().await;
                        });
                    }
                }
            }
            log::debug!("Poller stopped");
        });

        PollerHandle {
            cancel,
            join,
            interval,
        }
    }
}

pub struct PollerHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
    interval: Duration,
}

impl PollerHandle {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        !self.join.is_finished()
    }

    /// Stops scheduling refreshes. A refresh already in flight still finishes.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.join.await;
    }
}
