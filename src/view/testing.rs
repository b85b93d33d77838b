//! Test helpers: a sink that records updates, and fixture builders.

use super::{DashboardView, RenderSink, ViewUpdate};
use crate::models::{AnalysisResult, Post, Sentiment, parse_timestamp};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<ViewUpdate>>,
}

impl RecordingSink {
    pub fn updates(&self) -> Vec<ViewUpdate> {
        self.updates.lock().unwrap().clone()
    }

    /// Updates other than activity events, in arrival order.
    pub fn view_updates(&self) -> Vec<ViewUpdate> {
        self.updates()
            .into_iter()
            .filter(|update| !matches!(update, ViewUpdate::Activity(_)))
            .collect()
    }

    /// The view obtained by applying every recorded update.
    pub fn view(&self) -> DashboardView {
        let mut view = DashboardView::default();
        for update in self.updates() {
            view.apply(update);
        }
        view
    }
}

#[async_trait::async_trait]
impl RenderSink for RecordingSink {
    async fn render(&self, update: ViewUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}

pub fn post(text: &str) -> Post {
    Post {
        id: None,
        text: text.to_string(),
        sentiment: Sentiment::Neutral,
        polarity: 0.0,
        timestamp: parse_timestamp("2024-05-01 12:00:00").unwrap(),
    }
}

pub fn result(text: &str, sentiment: Sentiment) -> AnalysisResult {
    AnalysisResult {
        text: text.to_string(),
        sentiment,
        polarity: match sentiment {
            Sentiment::Positive => 0.5,
            Sentiment::Negative => -0.5,
            Sentiment::Neutral => 0.0,
        },
        timestamp: None,
    }
}
