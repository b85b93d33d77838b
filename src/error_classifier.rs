use crate::api::error::ApiError;
use crate::workers::submitter::SubmitError;
use log::LevelFilter;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Level for a failed poll. Polling failures never reach the screen and
    /// are never more than a warning; the next tick simply tries again.
    pub fn classify_fetch_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Rate limited: expected under fast polling
            ApiError::Http { status, .. } if *status == 429 => LogLevel::Debug,

            // Server, auth, decode and network issues alike
            _ => LogLevel::Warn,
        }
    }

    pub fn classify_submit_error(&self, error: &SubmitError) -> LogLevel {
        match error {
            SubmitError::EmptyText => LogLevel::Warn,
            SubmitError::InFlight => LogLevel::Debug,
            SubmitError::Api(_) => LogLevel::Error,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
