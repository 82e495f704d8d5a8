use crate::config::config::HostedCfg;
use crate::llm::client::CompletionProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::info;

/// OpenAI-compatible hosted chat-completion backend (xAI by default).
#[derive(Clone)]
pub struct HostedChatClient {
    client: Client,
    cfg: HostedCfg,
}

impl HostedChatClient {
    pub fn new(cfg: HostedCfg, client: Client) -> Self {
        Self { client, cfg }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.cfg.base_url)
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.cfg.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": 0.0
        })
    }
}

#[async_trait]
impl CompletionProvider for HostedChatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let req_body = self.request_body(prompt);

        let url = self.completions_url();

        // Log for debugging (don't log the key)
        info!("Calling hosted model at {} with model {}", url, self.cfg.model);

        let res = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.cfg.api_key))
            .timeout(self.cfg.request_timeout)
            .json(&req_body)
            .send()
            .await
            .context("hosted model request failed")?;

        if !res.status().is_success() {
            let err_text = res.text().await?;
            anyhow::bail!("hosted model API error: {}", err_text);
        }

        let resp_json: serde_json::Value = res.json().await?;

        // Extract content from OpenAI-like response
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .context("no content in hosted model response")?;

        Ok(content.to_string())
    }

    fn model(&self) -> &str {
        &self.cfg.model
    }
}
