use crate::core::types::{NewsItem, OnchainStatus};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OnchainClient: Send + Sync + 'static {
    async fn fetch_status(&self) -> Result<OnchainStatus>;
}

#[async_trait]
pub trait SentimentClient: Send + Sync + 'static {
    /// Current fear/greed index reading, 0..=100.
    async fn fetch_greed_index(&self) -> Result<u8>;
}

#[async_trait]
pub trait NewsClient: Send + Sync + 'static {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<NewsItem>>;
}
