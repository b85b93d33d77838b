//! In-memory view state shared by every renderer.

use super::{Notice, SubmitState, ViewUpdate};
use crate::consts::cli_consts::display::MAX_FEED_POSTS;
use crate::models::{AnalysisResult, Post, SentimentStats, TrendPoint};

/// The analysis result currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleResult {
    pub seq: u64,
    pub result: AnalysisResult,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardView {
    pub stats: SentimentStats,
    /// Trend buckets sorted by date, ascending.
    pub trends: Vec<TrendPoint>,
    /// At most `MAX_FEED_POSTS` posts, in the order the service sent them.
    pub feed: Vec<Post>,
    /// False until the first posts response arrives.
    pub feed_loaded: bool,
    pub result: Option<VisibleResult>,
    pub submit_state: SubmitState,
    pub notice: Option<Notice>,
}

impl DashboardView {
    /// Applies an update. Returns whether anything visible changed.
    ///
    /// Activity and input updates belong to the individual renderers and are
    /// ignored here.
    pub fn apply(&mut self, update: ViewUpdate) -> bool {
        match update {
            ViewUpdate::Stats(stats) => self.stats = stats,
            ViewUpdate::Trends(trends) => self.trends = TrendPoint::sorted(trends),
            ViewUpdate::Posts(posts) => {
                self.feed = posts.into_iter().take(MAX_FEED_POSTS).collect();
                self.feed_loaded = true;
            }
            ViewUpdate::SubmitState(state) => self.submit_state = state,
            ViewUpdate::ResultShown { seq, result } => {
                self.result = Some(VisibleResult { seq, result });
            }
            ViewUpdate::ResultHidden { seq } => match &self.result {
                Some(visible) if visible.seq == seq => self.result = None,
                _ => return false,
            },
            ViewUpdate::Notice(notice) => self.notice = Some(notice),
            ViewUpdate::InputCleared | ViewUpdate::Activity(_) => return false,
        }
        true
    }

    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_state == SubmitState::Submitting
    }
}
