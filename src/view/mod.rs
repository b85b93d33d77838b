//! Render sinks
//!
//! Everything the workers want shown goes through [`RenderSink`] as a
//! [`ViewUpdate`]. The TUI, the headless console and the HTML snapshot are
//! just different sinks, so the polling and submit logic never touches
//! presentation code.

pub mod channel;
pub mod console;
pub mod html;
pub mod model;
#[cfg(test)]
pub mod testing;

pub use channel::ChannelSink;
pub use console::ConsoleSink;
pub use html::HtmlSnapshot;
pub use model::DashboardView;

use crate::events::Event;
use crate::models::{AnalysisResult, Post, SentimentStats, TrendPoint};

/// Whether the analyze control accepts input.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

/// A blocking, user-visible message. Stays up until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Replaces the counters and distribution chart.
    Stats(SentimentStats),
    /// Replaces the trend chart. Order is not significant.
    Trends(Vec<TrendPoint>),
    /// Replaces the live feed with the service's posts, most recent first.
    Posts(Vec<Post>),
    SubmitState(SubmitState),
    /// Shows an analysis result. `seq` increases with every result.
    ResultShown { seq: u64, result: AnalysisResult },
    /// Hides the result with this `seq`, if it is still the one shown.
    ResultHidden { seq: u64 },
    /// The submitted text was accepted; the input box should be emptied.
    InputCleared,
    Notice(Notice),
    Activity(Event),
}

#[async_trait::async_trait]
pub trait RenderSink: Send + Sync {
    async fn render(&self, update: ViewUpdate);
}

/// Makes service-supplied text safe to put on a terminal. Control characters
/// (ESC, BEL, CR, newlines...) become spaces so escape sequences print as
/// inert text instead of moving the cursor or restyling the screen.
pub fn sanitize_terminal_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
