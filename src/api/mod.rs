use crate::api::error::ApiError;
use crate::models::{AnalysisResult, Post, SentimentStats, TrendPoint};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SentimentApi: Send + Sync {
    /// Submits text for analysis. The service stores it as a new post.
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, ApiError>;

    /// Current sentiment distribution across all posts.
    async fn get_stats(&self) -> Result<SentimentStats, ApiError>;

    /// Per-day sentiment counts, in no particular order.
    async fn get_trends(&self) -> Result<Vec<TrendPoint>, ApiError>;

    /// Recent posts, most recent first.
    async fn get_posts(&self) -> Result<Vec<Post>, ApiError>;
}
