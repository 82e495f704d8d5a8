use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppCfg {
    pub http: HttpCfg,
    pub onchain: OnchainCfg,
    pub sentiment: SentimentCfg,
    pub news: NewsCfg,
    pub llm: LlmCfg,
    #[serde(default)]
    pub pipeline: PipelineCfg,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpCfg {
    #[serde(rename = "userAgent", default = "default_ua")]
    pub user_agent: String,
    #[serde(with = "humantime_serde", default = "default_timeout")]
    pub timeout: Duration,
    #[serde(rename = "poolIdleTimeout", with = "humantime_serde")]
    pub pool_idle_timeout: Duration,
    #[serde(rename = "tcpKeepAlive", with = "humantime_serde")]
    pub tcp_keep_alive: Duration,
    #[serde(rename = "poolMaxIdlePerHost", default = "default_pool")]
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpCfg {
    fn default() -> Self {
        Self {
            user_agent: default_ua(),
            timeout: default_timeout(),
            pool_idle_timeout: Duration::from_secs(90),
            tcp_keep_alive: Duration::from_secs(60),
            pool_max_idle_per_host: default_pool(),
        }
    }
}
fn default_ua() -> String {
    "riskmind/0.1".into()
}
fn default_timeout() -> Duration {
    Duration::from_secs(5)
}
fn default_pool() -> usize {
    16
}

#[derive(Debug, Deserialize, Clone)]
pub struct OnchainCfg {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
}

impl Default for OnchainCfg {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SentimentCfg {
    pub url: String,
}

impl Default for SentimentCfg {
    fn default() -> Self {
        Self {
            url: "https://api.alternative.me/fng/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsCfg {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(default = "default_news_query")]
    pub query: String,
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: u32,
}

impl Default for NewsCfg {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            query: default_news_query(),
            max_results: default_max_results(),
        }
    }
}
fn default_news_query() -> String {
    "crypto market sentiment".to_string()
}
fn default_max_results() -> u32 {
    10
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Hosted,
    #[default]
    Local,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LlmCfg {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub hosted: HostedCfg,
    #[serde(default)]
    pub local: LocalCfg,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HostedCfg {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(
        rename = "requestTimeout",
        with = "humantime_serde",
        default = "default_model_timeout"
    )]
    pub request_timeout: Duration,
}

impl Default for HostedCfg {
    fn default() -> Self {
        Self {
            base_url: "https://api.x.ai/v1".to_string(),
            model: "grok-4".to_string(),
            api_key: "".to_string(),
            request_timeout: default_model_timeout(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocalCfg {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    pub model: String,
    #[serde(
        rename = "requestTimeout",
        with = "humantime_serde",
        default = "default_model_timeout"
    )]
    pub request_timeout: Duration,
}

impl Default for LocalCfg {
    fn default() -> Self {
        Self {
            base_url: "http://ollama:11434".to_string(),
            model: "gemma3:1b".to_string(),
            request_timeout: default_model_timeout(),
        }
    }
}
fn default_model_timeout() -> Duration {
    Duration::from_secs(120)
}

#[derive(Debug, Deserialize, Clone)]
pub struct PipelineCfg {
    #[serde(
        rename = "runBudget",
        with = "humantime_serde",
        default = "default_run_budget"
    )]
    pub run_budget: Duration,
}

impl Default for PipelineCfg {
    fn default() -> Self {
        Self {
            run_budget: default_run_budget(),
        }
    }
}
fn default_run_budget() -> Duration {
    Duration::from_secs(300)
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.onchain.base_url.is_empty(), "onchain.baseUrl missing");
        anyhow::ensure!(!self.sentiment.url.is_empty(), "sentiment.url missing");
        anyhow::ensure!(!self.news.base_url.is_empty(), "news.baseUrl missing");
        anyhow::ensure!(self.news.max_results > 0, "news.maxResults must be > 0");
        anyhow::ensure!(
            !self.llm.local.base_url.is_empty(),
            "llm.local.baseUrl missing"
        );
        if self.llm.provider == Provider::Hosted {
            anyhow::ensure!(
                !self.llm.hosted.api_key.is_empty(),
                "llm.hosted.api_key required for the hosted provider"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_env_var_override() {
        // Set environment variable
        env::set_var("LLM__HOSTED__API_KEY", "env-key-123");

        // Test that config::Environment picks it up
        let cfg = Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()
            .unwrap();

        let val = cfg.get_string("llm.hosted.api_key").unwrap();
        assert_eq!(val, "env-key-123");

        env::remove_var("LLM__HOSTED__API_KEY");
    }

    #[test]
    fn test_env_var_provider_override() {
        env::set_var("LLM__PROVIDER", "hosted");

        let cfg = Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()
            .unwrap();

        let val = cfg.get_string("llm.provider").unwrap();
        assert_eq!(val, "hosted");

        env::remove_var("LLM__PROVIDER");
    }

    #[test]
    fn test_defaults_validate() {
        let mut cfg = AppCfg::default();
        assert!(cfg.validate().is_ok());

        // Hosted provider without a key must be rejected
        cfg.llm.provider = Provider::Hosted;
        assert!(cfg.validate().is_err());

        cfg.llm.hosted.api_key = "k".to_string();
        assert!(cfg.validate().is_ok());
    }
}
