use crate::collector::client::{NewsClient, OnchainClient, SentimentClient};
use crate::collector::news::assemble_snippets;
use crate::config::config::NewsCfg;
use crate::core::types::{DataBundle, RiskInputs};
use std::sync::Arc;
use tracing::{info, warn};

/// Substitute when the sentiment source is unavailable; sentiment is
/// advisory, not load-bearing.
pub const NEUTRAL_GREED_VALUE: u8 = 50;

pub struct DataCollector {
    onchain: Arc<dyn OnchainClient>,
    sentiment: Arc<dyn SentimentClient>,
    news: Arc<dyn NewsClient>,
    news_cfg: NewsCfg,
}

impl DataCollector {
    pub fn new(
        onchain: Arc<dyn OnchainClient>,
        sentiment: Arc<dyn SentimentClient>,
        news: Arc<dyn NewsClient>,
        news_cfg: NewsCfg,
    ) -> Self {
        Self {
            onchain,
            sentiment,
            news,
            news_cfg,
        }
    }

    /// Fail fast on the on-chain source; degrade gracefully on the rest.
    pub async fn collect(&self) -> DataBundle {
        let status = match self.onchain.fetch_status().await {
            Ok(status) => status,
            Err(e) => {
                warn!(?e, "failed to fetch on-chain data");
                return DataBundle::Invalid;
            }
        };

        if status.token_price == 0.0 || status.collateral_factor == 0.0 {
            warn!(
                token_price = status.token_price,
                collateral_factor = status.collateral_factor,
                "on-chain data invalid (zero token price or collateral factor)"
            );
            return DataBundle::Invalid;
        }

        let greed_value = match self.sentiment.fetch_greed_index().await {
            Ok(value) => value,
            Err(e) => {
                warn!(?e, "failed to fetch fear/greed index, using neutral value");
                NEUTRAL_GREED_VALUE
            }
        };

        let news_snippets = match self
            .news
            .search(&self.news_cfg.query, self.news_cfg.max_results)
            .await
        {
            Ok(items) => {
                for item in &items {
                    info!(
                        title = item.title.as_deref().unwrap_or(""),
                        url = item.url.as_deref().unwrap_or(""),
                        "news result"
                    );
                }
                assemble_snippets(&items)
            }
            Err(e) => {
                warn!(?e, "failed to fetch news, continuing without snippets");
                String::new()
            }
        };

        let inputs = RiskInputs {
            collateral_factor: status.collateral_factor,
            total_borrows: status.total_borrows,
            token_price: status.token_price,
            greed_value,
            news_snippets,
        };

        info!(
            collateral_factor = inputs.collateral_factor,
            total_borrows = inputs.total_borrows,
            token_price = inputs.token_price,
            greed_value = inputs.greed_value,
            news_len = inputs.news_snippets.len(),
            "data collected"
        );

        DataBundle::Valid(inputs)
    }
}
