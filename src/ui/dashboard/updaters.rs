//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from view updates

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, EventType, Worker};
use crate::view::ViewUpdate;

use std::time::{Duration, Instant};

impl DashboardState {
    /// Advance the animation tick and apply every queued update.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.process_update(update);
        }
    }

    /// Process a single update and change the relevant state
    fn process_update(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::Activity(event) => {
                self.handle_activity_event(&event);
                self.add_to_activity_log(event);
            }
            ViewUpdate::InputCleared => self.input.clear(),
            other => {
                self.view.apply(other);
            }
        }
    }

    fn handle_activity_event(&mut self, event: &WorkerEvent) {
        if event.worker == Worker::Poller && event.event_type == EventType::Refresh {
            self.set_last_refresh(Instant::now());
        }
    }

    /// Time left until the next scheduled refresh, if one has happened yet.
    pub fn next_refresh_in(&self) -> Option<Duration> {
        let last = self.last_refresh()?;
        Some(self.poll_interval.saturating_sub(last.elapsed()))
    }

    /// Fraction of the poll interval that has elapsed, in [0, 1].
    pub fn refresh_progress(&self) -> f64 {
        match self.next_refresh_in() {
            Some(remaining) if !self.poll_interval.is_zero() => {
                1.0 - remaining.as_secs_f64() / self.poll_interval.as_secs_f64()
            }
            _ => 0.0,
        }
    }
}
