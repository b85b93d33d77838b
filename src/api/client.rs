//! Sentiment API Client
//!
//! A JSON-over-HTTP client for the sentiment service: text analysis plus the
//! stats, trends and posts endpoints the dashboard polls.

use crate::api::SentimentApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::network::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::environment::Environment;
use crate::models::{AnalysisResult, AnalyzeRequest, Post, SentimentStats, TrendPoint};
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("sentiment-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self::with_timeout(
            environment,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn with_timeout(environment: Environment, timeout: Duration) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(timeout)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn with_headers(request: RequestBuilder) -> RequestBuilder {
        request
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .header("Accept", "application/json")
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::handle_response_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = Self::with_headers(self.client.get(&url)).send().await?;
        Self::decode_response(response).await
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("POST {}", url);
        let response = Self::with_headers(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        Self::decode_response(response).await
    }
}

#[async_trait::async_trait]
impl SentimentApi for ApiClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError> {
        self.post_request("api/analyze", &AnalyzeRequest { text })
            .await
    }

    async fn get_stats(&self) -> Result<SentimentStats, ApiError> {
        self.get_request("api/stats").await
    }

    async fn get_trends(&self) -> Result<Vec<TrendPoint>, ApiError> {
        let days: HashMap<String, SentimentStats> = self.get_request("api/trends").await?;
        Ok(days
            .into_iter()
            .map(|(date, stats)| TrendPoint { date, stats })
            .collect())
    }

    async fn get_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_request("api/posts").await
    }
}
