//! Core worker utilities

use crate::consts::cli_consts::{display, polling, seeding};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::view::{RenderSink, ViewUpdate};
use std::sync::Arc;
use std::time::Duration;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sink: Arc<dyn RenderSink>,
}

impl EventSender {
    pub fn new(sink: Arc<dyn RenderSink>) -> Self {
        Self { sink }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        self.sink.render(ViewUpdate::Activity(event)).await;
    }

    pub async fn send_poll_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::poller_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_submit_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::submitter_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_seed_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::seeder_with_level(message, event_type, log_level))
            .await;
    }
}

/// Timing shared across all worker types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    pub poll_interval: Duration,
    pub result_display: Duration,
    pub seed_delay: Duration,
}

impl WorkerConfig {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            ..Self::default()
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: polling::default_interval(),
            result_display: display::result_display(),
            seed_delay: seeding::seed_delay(),
        }
    }
}
