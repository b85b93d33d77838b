//! Session setup and initialization

use crate::api::{ApiClient, SentimentApi};
use crate::environment::Environment;
use crate::view::RenderSink;
use crate::workers::core::WorkerConfig;
use crate::workers::poller::{Poller, PollerHandle};
use crate::workers::refresher::Refresher;
use crate::workers::seeder::Seeder;
use crate::workers::submitter::Submitter;
use std::sync::Arc;
use std::time::Duration;

/// Everything needed to build a session, resolved from CLI, environment and
/// config file.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub environment: Environment,
    pub worker_config: WorkerConfig,
    pub request_timeout: Duration,
    pub with_background_color: bool,
}

/// Workers wired to one API client and one render sink.
pub struct Workers {
    pub api: Arc<dyn SentimentApi>,
    pub sink: Arc<dyn RenderSink>,
    pub refresher: Arc<Refresher>,
    pub submitter: Arc<Submitter>,
}

impl Workers {
    /// Builds workers around an existing API implementation.
    pub fn with_api(
        api: Arc<dyn SentimentApi>,
        sink: Arc<dyn RenderSink>,
        worker_config: &WorkerConfig,
    ) -> Self {
        let refresher = Arc::new(Refresher::new(api.clone(), sink.clone()));
        let submitter = Arc::new(
            Submitter::new(api.clone(), sink.clone(), refresher.clone())
                .with_result_display(worker_config.result_display),
        );
        Self {
            api,
            sink,
            refresher,
            submitter,
        }
    }

    /// Builds workers talking to the service over HTTP.
    pub fn connect(options: &SessionOptions, sink: Arc<dyn RenderSink>) -> Self {
        let api = Arc::new(ApiClient::with_timeout(
            options.environment.clone(),
            options.request_timeout,
        ));
        Self::with_api(api, sink, &options.worker_config)
    }

    pub fn seeder(&self, worker_config: &WorkerConfig) -> Seeder {
        Seeder::new(self.api.clone(), self.sink.clone(), self.refresher.clone())
            .with_delay(worker_config.seed_delay)
    }
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    pub environment: Environment,
    pub workers: Workers,
    /// Running poller; stopped on shutdown.
    pub poller: PollerHandle,
}

impl SessionData {
    /// Stops polling. In-flight refreshes are left to finish on their own.
    pub async fn shutdown(self) {
        if !self.poller.is_running() {
            log::warn!("Poller exited before shutdown");
        }
        self.poller.stop().await;
    }
}

/// Sets up a live session
///
/// 1. Creates the API client with the configured timeout
/// 2. Wires refresher and submitter to the sink
/// 3. Starts the poller, which refreshes immediately
pub fn setup_session(options: &SessionOptions, sink: Arc<dyn RenderSink>) -> SessionData {
    let workers = Workers::connect(options, sink);
    let poller = Poller::new(
        workers.refresher.clone(),
        options.worker_config.poll_interval,
    )
    .start();

    SessionData {
        environment: options.environment.clone(),
        workers,
        poller,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockSentimentApi;
    use crate::models::{Sentiment, SentimentStats};
    use crate::view::ViewUpdate;
    use crate::view::testing::{RecordingSink, result};

    #[tokio::test(start_paused = true)]
    // The configured display time reaches the submitter.
    async fn test_with_api_applies_result_display() {
        let mut api = MockSentimentApi::new();
        api.expect_analyze()
            .returning(|text| Ok(result(text, Sentiment::Positive)));
        api.expect_get_stats()
            .returning(|| Ok(SentimentStats::default()));
        api.expect_get_trends().returning(|| Ok(Vec::new()));
        api.expect_get_posts().returning(|| Ok(Vec::new()));

        let sink = Arc::new(RecordingSink::default());
        let config = WorkerConfig {
            result_display: Duration::from_secs(1),
            ..WorkerConfig::default()
        };
        let workers = Workers::with_api(Arc::new(api), sink.clone(), &config);

        workers.submitter.submit_text("nice").await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;

        assert!(sink.updates().contains(&ViewUpdate::ResultHidden { seq: 1 }));
    }
}
