//! Text submission
//!
//! Validates and analyzes user text. Only one analysis may be in flight at a
//! time; the submit state toggles `Submitting` → `Idle` around the request.

use super::core::EventSender;
use super::refresher::Refresher;
use crate::api::SentimentApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::display;
use crate::error_classifier::ErrorClassifier;
use crate::events::EventType;
use crate::logging::LogLevel;
use crate::models::{AnalysisResult, format_polarity};
use crate::view::{Notice, RenderSink, SubmitState, ViewUpdate};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Nothing but whitespace was entered. No request is made.
    #[error("Please enter some text to analyze")]
    EmptyText,

    /// Another analysis has not finished yet.
    #[error("An analysis is already in progress")]
    InFlight,

    #[error("Error analyzing sentiment: {0}")]
    Api(#[from] ApiError),
}

pub struct Submitter {
    api: Arc<dyn SentimentApi>,
    sink: Arc<dyn RenderSink>,
    refresher: Arc<Refresher>,
    events: EventSender,
    classifier: ErrorClassifier,
    in_flight: AtomicBool,
    last_seq: AtomicU64,
    result_display: Duration,
}

impl Submitter {
    pub fn new(
        api: Arc<dyn SentimentApi>,
        sink: Arc<dyn RenderSink>,
        refresher: Arc<Refresher>,
    ) -> Self {
        Self {
            api,
            events: EventSender::new(sink.clone()),
            sink,
            refresher,
            classifier: ErrorClassifier::new(),
            in_flight: AtomicBool::new(false),
            last_seq: AtomicU64::new(0),
            result_display: display::result_display(),
        }
    }

    /// Overrides how long a result stays visible.
    pub fn with_result_display(mut self, result_display: Duration) -> Self {
        self.result_display = result_display;
        self
    }

    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Analyzes `text`, shows the result, clears the input and refreshes the
    /// dashboard. Failures are shown as a notice and returned; nothing is
    /// retried.
    pub async fn submit_text(&self, text: &str) -> Result<AnalysisResult, SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            let err = SubmitError::EmptyText;
            self.sink
                .render(ViewUpdate::Notice(Notice::warning(err.to_string())))
                .await;
            return Err(err);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            let err = SubmitError::InFlight;
            self.events
                .send_submit_event(
                    err.to_string(),
                    EventType::Waiting,
                    self.classifier.classify_submit_error(&err),
                )
                .await;
            return Err(err);
        }

        self.sink
            .render(ViewUpdate::SubmitState(SubmitState::Submitting))
            .await;
        let outcome = self.api.analyze(text).await;

        match outcome {
            Ok(result) => {
                self.show_result(result.clone()).await;
                self.sink.render(ViewUpdate::InputCleared).await;
                self.finish().await;
                self.events
                    .send_submit_event(
                        format!(
                            "Analyzed as {} ({})",
                            result.sentiment,
                            format_polarity(result.polarity)
                        ),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.refresher.refresh().await;
                Ok(result)
            }
            Err(e) => {
                let err = SubmitError::from(e);
                let log_level = self.classifier.classify_submit_error(&err);
                self.sink
                    .render(ViewUpdate::Notice(Notice::error(err.to_string())))
                    .await;
                self.finish().await;
                self.events
                    .send_submit_event(err.to_string(), EventType::Error, log_level)
                    .await;
                Err(err)
            }
        }
    }

    async fn finish(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
        self.sink
            .render(ViewUpdate::SubmitState(SubmitState::Idle))
            .await;
    }

    /// Renders the result and schedules its removal. The removal carries the
    /// result's sequence number, so it cannot hide a newer result.
    async fn show_result(&self, result: AnalysisResult) {
        let seq = self.last_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.sink
            .render(ViewUpdate::ResultShown { seq, result })
            .await;

        let sink = self.sink.clone();
        let delay = self.result_display;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sink.render(ViewUpdate::ResultHidden { seq }).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSentimentApi;
    use crate::models::{Post, Sentiment, SentimentStats, TrendPoint};
    use crate::view::testing::{RecordingSink, result};
    use std::sync::atomic::AtomicUsize;

    fn with_refresh(api: &mut MockSentimentApi) {
        api.expect_get_stats()
            .returning(|| Ok(SentimentStats::new(1, 0, 0)));
        api.expect_get_trends().returning(|| Ok(Vec::new()));
        api.expect_get_posts().returning(|| Ok(Vec::new()));
    }

    fn submitter_for(api: MockSentimentApi) -> (Arc<Submitter>, Arc<RecordingSink>) {
        let api: Arc<dyn SentimentApi> = Arc::new(api);
        let sink = Arc::new(RecordingSink::default());
        let refresher = Arc::new(Refresher::new(api.clone(), sink.clone()));
        (Arc::new(Submitter::new(api, sink.clone(), refresher)), sink)
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_without_request() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze().never();
        api.expect_get_stats().never();
        let (submitter, sink) = submitter_for(api);

        for text in ["", "   ", "\n\t "] {
            let err = submitter.submit_text(text).await.unwrap_err();
            assert!(matches!(err, SubmitError::EmptyText));
        }

        let updates = sink.view_updates();
        assert_eq!(updates.len(), 3);
        assert_eq!(
            updates[0],
            ViewUpdate::Notice(Notice::warning("Please enter some text to analyze"))
        );
        assert!(!submitter.is_submitting());
    }

    #[tokio::test]
    // Result first, then the cleared input, then the refreshed parts.
    async fn test_success_shows_result_clears_input_then_refreshes() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze()
            .withf(|text| text == "Great day")
            .times(1)
            .returning(|text| Ok(result(text, Sentiment::Positive)));
        with_refresh(&mut api);
        let (submitter, sink) = submitter_for(api);

        let analyzed = submitter.submit_text("  Great day  ").await.unwrap();
        assert_eq!(analyzed.sentiment, Sentiment::Positive);

        let updates = sink.view_updates();
        assert_eq!(
            updates[0],
            ViewUpdate::SubmitState(SubmitState::Submitting)
        );
        assert_eq!(
            updates[1],
            ViewUpdate::ResultShown {
                seq: 1,
                result: result("Great day", Sentiment::Positive)
            }
        );
        assert_eq!(updates[2], ViewUpdate::InputCleared);
        assert_eq!(updates[3], ViewUpdate::SubmitState(SubmitState::Idle));
        assert!(
            updates[4..]
                .iter()
                .any(|u| *u == ViewUpdate::Stats(SentimentStats::new(1, 0, 0)))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_hides_after_five_seconds() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze()
            .returning(|text| Ok(result(text, Sentiment::Neutral)));
        with_refresh(&mut api);
        let (submitter, sink) = submitter_for(api);

        submitter.submit_text("ok").await.unwrap();
        assert!(sink.view().result.is_some());

        tokio::time::sleep(Duration::from_millis(4_999)).await;
        tokio::task::yield_now().await;
        assert!(sink.view().result.is_some());

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(sink.view().result.is_none());
        assert!(
            sink.updates()
                .contains(&ViewUpdate::ResultHidden { seq: 1 })
        );
    }

    #[tokio::test(start_paused = true)]
    // The first result's timer fires while the second is showing.
    async fn test_older_timer_does_not_hide_newer_result() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze()
            .returning(|text| Ok(result(text, Sentiment::Positive)));
        with_refresh(&mut api);
        let (submitter, sink) = submitter_for(api);

        submitter.submit_text("first").await.unwrap();
        tokio::time::sleep(Duration::from_secs(3)).await;
        submitter.submit_text("second").await.unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        let shown = sink.view().result.expect("second result still visible");
        assert_eq!(shown.seq, 2);
        assert_eq!(shown.result.text, "second");

        tokio::time::sleep(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        assert!(sink.view().result.is_none());
    }

    #[tokio::test]
    async fn test_api_error_shows_notice_without_retry() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze().times(1).returning(|_| {
            Err(ApiError::Http {
                status: 500,
                message: "INTERNAL SERVER ERROR".to_string(),
            })
        });
        api.expect_get_stats().never();
        let (submitter, sink) = submitter_for(api);

        let err = submitter.submit_text("hello").await.unwrap_err();
        assert!(matches!(err, SubmitError::Api(_)));

        let view = sink.view();
        let notice = view.notice.clone().expect("error notice");
        assert!(
            notice
                .message
                .starts_with("Error analyzing sentiment: HTTP error with status 500")
        );
        assert!(view.result.is_none());
        assert!(!view.is_submitting());
        assert!(!sink.updates().contains(&ViewUpdate::InputCleared));
    }

    /// Analysis that only completes when released, to hold a submit in flight.
    struct GatedApi {
        gate: tokio::sync::Notify,
        analyze_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SentimentApi for GatedApi {
        async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
            self.analyze_calls.fetch_add(1, Ordering::SeqCst);
            self.gate.notified().await;
            Ok(result(text, Sentiment::Neutral))
        }

        async fn get_stats(&self) -> Result<SentimentStats, ApiError> {
            Ok(SentimentStats::default())
        }

        async fn get_trends(&self) -> Result<Vec<TrendPoint>, ApiError> {
            Ok(Vec::new())
        }

        async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let api = Arc::new(GatedApi {
            gate: tokio::sync::Notify::new(),
            analyze_calls: AtomicUsize::new(0),
        });
        let sink = Arc::new(RecordingSink::default());
        let refresher = Arc::new(Refresher::new(api.clone(), sink.clone()));
        let submitter = Arc::new(Submitter::new(api.clone(), sink.clone(), refresher));

        let first = {
            let submitter = submitter.clone();
            tokio::spawn(async move { submitter.submit_text("first").await })
        };
        while api.analyze_calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(submitter.is_submitting());
        assert!(sink.view().is_submitting());

        let err = submitter.submit_text("second").await.unwrap_err();
        assert!(matches!(err, SubmitError::InFlight));
        assert_eq!(api.analyze_calls.load(Ordering::SeqCst), 1);

        api.gate.notify_one();
        first.await.unwrap().unwrap();
        assert!(!submitter.is_submitting());
        assert!(!sink.view().is_submitting());
    }
}
