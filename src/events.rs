//! Event System
//!
//! Activity events emitted by the dashboard workers and shown in the
//! activity log (TUI) or printed to the console (headless).

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Periodic refresh of stats, trends and posts.
    Poller,
    /// User-initiated text analysis.
    Submitter,
    /// Sample post submission.
    Seeder,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn submitter_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Submitter, msg, event_type, log_level)
    }

    pub fn seeder_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Seeder, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_info_events_always_display() {
        let success = Event::poller_with_level(
            "Dashboard refreshed".to_string(),
            EventType::Success,
            LogLevel::Trace,
        );
        assert!(success.should_display());

        let warn = Event::submitter_with_level(
            "Service unavailable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(warn.should_display());
    }

    #[test]
    fn test_display_format() {
        let event = Event::seeder_with_level(
            "Seeded 5 sample posts".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("] Seeded 5 sample posts"));
        assert_eq!(event.worker, Worker::Seeder);
    }
}
