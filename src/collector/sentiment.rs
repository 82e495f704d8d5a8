use crate::collector::client::SentimentClient;
use crate::config::config::SentimentCfg;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// alternative.me serves the index value as a decimal string.
#[derive(Debug, Deserialize)]
struct FngEnvelope {
    data: Vec<FngEntry>,
}

#[derive(Debug, Deserialize)]
struct FngEntry {
    value: String,
}

pub fn parse_greed_value(body: &str) -> Result<u8> {
    let envelope: FngEnvelope =
        serde_json::from_str(body).context("parsing fear/greed envelope")?;
    let entry = envelope
        .data
        .first()
        .context("fear/greed envelope has no data entries")?;
    let value: u8 = entry
        .value
        .parse()
        .context("fear/greed value is not an integer")?;
    anyhow::ensure!(value <= 100, "fear/greed value {} out of range", value);
    Ok(value)
}

pub struct FearGreedClient {
    client: Client,
    cfg: SentimentCfg,
}

impl FearGreedClient {
    pub fn new(cfg: SentimentCfg, client: Client) -> Self {
        Self { client, cfg }
    }
}

#[async_trait]
impl SentimentClient for FearGreedClient {
    async fn fetch_greed_index(&self) -> Result<u8> {
        let body = self
            .client
            .get(&self.cfg.url)
            .send()
            .await
            .context("requesting fear/greed index")?
            .error_for_status()?
            .text()
            .await?;

        parse_greed_value(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greed_value() {
        let body = r#"{"name":"Fear and Greed Index","data":[{"value":"80","value_classification":"Extreme Greed"}]}"#;
        assert_eq!(parse_greed_value(body).unwrap(), 80);
    }

    #[test]
    fn test_parse_greed_value_empty_data() {
        assert!(parse_greed_value(r#"{"data":[]}"#).is_err());
    }

    #[test]
    fn test_parse_greed_value_not_a_number() {
        let body = r#"{"data":[{"value":"greedy"}]}"#;
        assert!(parse_greed_value(body).is_err());
    }

    #[test]
    fn test_parse_greed_value_out_of_range() {
        let body = r#"{"data":[{"value":"250"}]}"#;
        assert!(parse_greed_value(body).is_err());
    }
}
