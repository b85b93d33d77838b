//! Sample post seeding for an empty service.

use super::core::EventSender;
use super::refresher::Refresher;
use crate::api::SentimentApi;
use crate::consts::cli_consts::seeding;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::view::RenderSink;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub seeded: usize,
    pub failed: usize,
}

pub struct Seeder {
    api: Arc<dyn SentimentApi>,
    refresher: Arc<Refresher>,
    events: EventSender,
    classifier: ErrorClassifier,
    delay: Duration,
}

impl Seeder {
    pub fn new(
        api: Arc<dyn SentimentApi>,
        sink: Arc<dyn RenderSink>,
        refresher: Arc<Refresher>,
    ) -> Self {
        Self {
            api,
            refresher,
            events: EventSender::new(sink),
            classifier: ErrorClassifier::new(),
            delay: seeding::seed_delay(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Submits the built-in sample texts.
    pub async fn seed_samples(&self) -> SeedSummary {
        self.seed(&seeding::SAMPLE_TEXTS).await
    }

    /// Analyzes each text in turn, pausing between submissions, then
    /// refreshes once. A failed text does not stop the rest.
    pub async fn seed(&self, texts: &[&str]) -> SeedSummary {
        let mut summary = SeedSummary::default();
        for (index, text) in texts.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.delay).await;
            }
            match self.api.analyze(text).await {
                Ok(result) => {
                    summary.seeded += 1;
                    self.events
                        .send_seed_event(
                            format!("Sample {} analyzed as {}", index + 1, result.sentiment),
                            EventType::Success,
                            LogLevel::Debug,
                        )
                        .await;
                }
                Err(e) => {
                    summary.failed += 1;
                    self.events
                        .send_seed_event(
                            format!("Sample {} failed: {}", index + 1, e),
                            EventType::Error,
                            self.classifier.classify_fetch_error(&e),
                        )
                        .await;
                }
            }
        }

        self.refresher.refresh().await;
        self.events
            .send_seed_event(
                format!("Seeded {} of {} sample posts", summary.seeded, texts.len()),
                EventType::Success,
                LogLevel::Info,
            )
            .await;
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSentimentApi;
    use crate::api::error::ApiError;
    use crate::models::{Sentiment, SentimentStats};
    use crate::view::ViewUpdate;
    use crate::view::testing::{RecordingSink, result};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    // One failing sample; the rest still go out a second apart.
    async fn test_seed_continues_after_failure() {
        let start = Instant::now();
        let mut api = MockSentimentApi::new();
        api.expect_analyze().times(5).returning(|text| {
            if text.starts_with("I'm really disappointed") {
                return Err(ApiError::Http {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(result(text, Sentiment::Positive))
        });
        api.expect_get_stats()
            .times(1)
            .returning(|| Ok(SentimentStats::new(4, 0, 0)));
        api.expect_get_trends().times(1).returning(|| Ok(Vec::new()));
        api.expect_get_posts().times(1).returning(|| Ok(Vec::new()));

        let api: Arc<dyn SentimentApi> = Arc::new(api);
        let sink = Arc::new(RecordingSink::default());
        let refresher = Arc::new(Refresher::new(api.clone(), sink.clone()));
        let seeder = Seeder::new(api, sink.clone(), refresher);

        let summary = seeder.seed_samples().await;

        assert_eq!(summary, SeedSummary { seeded: 4, failed: 1 });
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(4) && elapsed < Duration::from_millis(4_100));
        assert!(
            sink.updates()
                .contains(&ViewUpdate::Stats(SentimentStats::new(4, 0, 0)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let start = Instant::now();
        let mut api = MockSentimentApi::new();
        api.expect_analyze()
            .returning(|text| Ok(result(text, Sentiment::Neutral)));
        api.expect_get_stats()
            .returning(|| Ok(SentimentStats::default()));
        api.expect_get_trends().returning(|| Ok(Vec::new()));
        api.expect_get_posts().returning(|| Ok(Vec::new()));

        let api: Arc<dyn SentimentApi> = Arc::new(api);
        let sink = Arc::new(RecordingSink::default());
        let refresher = Arc::new(Refresher::new(api.clone(), sink.clone()));
        let seeder = Seeder::new(api, sink, refresher).with_delay(Duration::from_millis(250));

        let summary = seeder.seed(&["a", "b", "c"]).await;
        assert_eq!(summary.seeded, 3);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(600));
    }
}
