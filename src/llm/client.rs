use anyhow::Result;
use async_trait::async_trait;

/// A single-turn text completion backend. Implementations must return the
/// model's text verbatim; cleanup and parsing happen downstream.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    async fn complete(&self, prompt: &str) -> Result<String>;

    fn model(&self) -> &str;
}
