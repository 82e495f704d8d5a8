use crate::collector::client::OnchainClient;
use crate::config::config::OnchainCfg;
use crate::core::types::OnchainStatus;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

pub struct BackendStatusClient {
    client: Client,
    cfg: OnchainCfg,
}

impl BackendStatusClient {
    pub fn new(cfg: OnchainCfg, client: Client) -> Self {
        Self { client, cfg }
    }

    fn status_url(&self) -> String {
        format!("{}/api/status", self.cfg.base_url)
    }
}

#[async_trait]
impl OnchainClient for BackendStatusClient {
    async fn fetch_status(&self) -> Result<OnchainStatus> {
        let url = self.status_url();

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("requesting on-chain status")?;

        if !resp.status().is_success() {
            anyhow::bail!("status endpoint error: {}", resp.status());
        }

        let status: OnchainStatus = resp.json().await.context("parsing on-chain status")?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_url_construction() {
        let cfg = OnchainCfg {
            base_url: "http://localhost:3001".to_string(),
        };
        let client = BackendStatusClient::new(cfg, Client::new());
        assert_eq!(client.status_url(), "http://localhost:3001/api/status");
    }

    #[test]
    fn test_status_missing_fields_default_to_zero() {
        let status: OnchainStatus = serde_json::from_str(r#"{"token_price": 100.0}"#).unwrap();
        assert_eq!(status.token_price, 100.0);
        assert_eq!(status.collateral_factor, 0.0);
        assert_eq!(status.total_borrows, 0.0);
    }
}
