use crate::config::config::LocalCfg;
use crate::llm::client::CompletionProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

/// Locally-hosted Ollama completion backend. Inference latency dominates
/// here, so the request timeout is configured separately from the shared
/// client default.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    cfg: LocalCfg,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(cfg: LocalCfg, client: Client) -> Self {
        Self { client, cfg }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.cfg.base_url)
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.cfg.model,
            "prompt": prompt,
            "stream": false
        })
    }
}

#[async_trait]
impl CompletionProvider for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let req_body = self.request_body(prompt);

        let url = self.generate_url();
        info!("Calling local model at {} with model {}", url, self.cfg.model);

        let res = self
            .client
            .post(&url)
            .timeout(self.cfg.request_timeout)
            .json(&req_body)
            .send()
            .await
            .context("local model request failed")?;

        if !res.status().is_success() {
            let err_text = res.text().await?;
            anyhow::bail!("local model API error: {}", err_text);
        }

        let parsed: GenerateResponse = res
            .json()
            .await
            .context("parsing local model response")?;

        Ok(parsed.response)
    }

    fn model(&self) -> &str {
        &self.cfg.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_construction() {
        let cfg = LocalCfg::default();
        let client = OllamaClient::new(cfg, Client::new());
        assert_eq!(client.generate_url(), "http://ollama:11434/api/generate");
    }

    #[test]
    fn test_request_body_shape() {
        let cfg = LocalCfg::default();
        let client = OllamaClient::new(cfg, Client::new());
        let body = client.request_body("adjust the collateral factor");

        assert_eq!(body["model"], "gemma3:1b");
        assert_eq!(body["prompt"], "adjust the collateral factor");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_generate_response_parsing() {
        let body = r#"{"model":"gemma3:1b","response":"```json\n{}\n```","done":true}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "```json\n{}\n```");
    }
}
