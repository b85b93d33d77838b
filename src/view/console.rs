//! Headless console renderer
//!
//! Prints dashboard changes as plain lines. Unchanged refreshes are silent so
//! a long-running headless session only logs what actually moved.

use super::{DashboardView, NoticeKind, RenderSink, ViewUpdate, sanitize_terminal_text};
use crate::consts::cli_consts::display::EMPTY_FEED_MESSAGE;
use crate::models::{AnalysisResult, Post, SentimentStats, TrendPoint, format_polarity};
use crate::{print_cmd_error, print_cmd_success, print_cmd_warn};
use std::sync::Mutex;

#[derive(Default)]
struct ConsoleState {
    view: DashboardView,
    stats_seen: bool,
}

#[derive(Default)]
pub struct ConsoleSink {
    state: Mutex<ConsoleState>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the update and returns the lines to print, if any.
    fn lines_for(&self, update: &ViewUpdate) -> Vec<String> {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = state.view.clone();
        let first_stats = matches!(update, ViewUpdate::Stats(_)) && !state.stats_seen;
        if first_stats {
            state.stats_seen = true;
        }
        let view = &mut state.view;
        view.apply(update.clone());

        match update {
            ViewUpdate::Stats(stats) if first_stats || before.stats != view.stats => {
                vec![format_stats_line(stats)]
            }
            ViewUpdate::Trends(_) if before.trends != view.trends => {
                view.trends.iter().map(format_trend_line).collect()
            }
            ViewUpdate::Posts(_) if before.feed != view.feed || !before.feed_loaded => {
                if view.feed.is_empty() {
                    vec![EMPTY_FEED_MESSAGE.to_string()]
                } else {
                    view.feed.iter().map(format_post_line).collect()
                }
            }
            _ => Vec::new(),
        }
    }
}

#[async_trait::async_trait]
impl RenderSink for ConsoleSink {
    async fn render(&self, update: ViewUpdate) {
        for line in self.lines_for(&update) {
            println!("{}", line);
        }
        match update {
            ViewUpdate::ResultShown { result, .. } => {
                print_cmd_success!("Analysis", "{}", format_result_line(&result));
            }
            ViewUpdate::Notice(notice) => match notice.kind {
                NoticeKind::Warning => {
                    print_cmd_warn!("Notice", "{}", sanitize_terminal_text(&notice.message))
                }
                NoticeKind::Error => print_cmd_error!(&sanitize_terminal_text(&notice.message)),
            },
            ViewUpdate::Activity(event) if event.should_display() => {
                println!("{}", sanitize_terminal_text(&event.to_string()))
            }
            _ => {}
        }
    }
}

pub fn format_stats_line(stats: &SentimentStats) -> String {
    format!(
        "Stats: {} positive, {} negative, {} neutral ({} total)",
        stats.positive,
        stats.negative,
        stats.neutral,
        stats.total()
    )
}

pub fn format_trend_line(point: &TrendPoint) -> String {
    format!(
        "Trend {}: +{} -{} ={}",
        sanitize_terminal_text(&point.date),
        point.stats.positive,
        point.stats.negative,
        point.stats.neutral
    )
}

pub fn format_post_line(post: &Post) -> String {
    format!(
        "[{}] {} | {}",
        post.local_timestamp(),
        post.badge(),
        sanitize_terminal_text(&post.text)
    )
}

pub fn format_result_line(result: &AnalysisResult) -> String {
    format!(
        "\"{}\" is {} (polarity {})",
        sanitize_terminal_text(&result.text),
        result.sentiment,
        format_polarity(result.polarity)
    )
}
