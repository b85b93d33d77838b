//! One dashboard refresh cycle.
//!
//! Stats, trends and posts are fetched concurrently and rendered
//! independently. A failed part keeps whatever was on screen before and is
//! only reported to the activity log.

use super::core::EventSender;
use crate::api::SentimentApi;
use crate::api::error::ApiError;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::view::{RenderSink, ViewUpdate};
use std::future::Future;
use std::sync::Arc;

/// Outcome of one refresh, counted per dashboard part.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    pub updated: usize,
    pub failed: usize,
}

impl RefreshSummary {
    fn record(&mut self, updated: bool) {
        if updated {
            self.updated += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn all_failed(&self) -> bool {
        self.updated == 0
    }
}

pub struct Refresher {
    api: Arc<dyn SentimentApi>,
    sink: Arc<dyn RenderSink>,
    events: EventSender,
    classifier: ErrorClassifier,
}

impl Refresher {
    pub fn new(api: Arc<dyn SentimentApi>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            api,
            events: EventSender::new(sink.clone()),
            sink,
            classifier: ErrorClassifier::new(),
        }
    }

    pub async fn refresh(&self) -> RefreshSummary {
        let (stats, trends, posts) = futures::join!(
            self.render_part("stats", self.api.get_stats(), ViewUpdate::Stats),
            self.render_part("trends", self.api.get_trends(), ViewUpdate::Trends),
            self.render_part("posts", self.api.get_posts(), ViewUpdate::Posts),
        );

        let mut summary = RefreshSummary::default();
        for updated in [stats, trends, posts] {
            summary.record(updated);
        }

        self.events
            .send_poll_event(
                format!("Dashboard refreshed ({}/3 parts updated)", summary.updated),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;
        summary
    }

    async fn render_part<T>(
        &self,
        part: &str,
        request: impl Future<Output = Result<T, ApiError>>,
        to_update: fn(T) -> ViewUpdate,
    ) -> bool {
        match request.await {
            Ok(value) => {
                self.sink.render(to_update(value)).await;
                true
            }
            Err(e) => {
                log::debug!("Failed to fetch {}: {}", part, e);
                let log_level = self.classifier.classify_fetch_error(&e);
                self.events
                    .send_poll_event(
                        format!("Failed to fetch {}: {}", part, e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
                false
            }
        }
    }
}
