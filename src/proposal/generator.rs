use crate::core::types::{DataBundle, Proposal};
use crate::llm::client::CompletionProvider;
use crate::llm::prompt::{build_prompt, truncate_chars};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ProposalGenerator {
    provider: Arc<dyn CompletionProvider>,
}

impl ProposalGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Invalid bundles skip the model entirely; the finalizer turns the
    /// skip into the fixed no-adjustment message.
    pub async fn propose(&self, bundle: &DataBundle) -> Result<Proposal> {
        let inputs = match bundle {
            DataBundle::Invalid => {
                warn!("no reliable data available, proposing no adjustments");
                return Ok(Proposal::Skipped);
            }
            DataBundle::Valid(inputs) => inputs,
        };

        let prompt = build_prompt(inputs);
        info!(
            model = self.provider.model(),
            preview = truncate_chars(&prompt, 1000),
            "submitting prompt"
        );

        let raw = self
            .provider
            .complete(&prompt)
            .await
            .context("completion request failed")?;

        info!(%raw, "raw model response");
        Ok(Proposal::Model(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RiskInputs;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct MockProvider {
        reply: String,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CompletionProvider for MockProvider {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            self.called.store(true, Ordering::SeqCst);
            Ok(self.reply.clone())
        }

        fn model(&self) -> &str {
            "mock"
        }
    }

    fn generator(reply: &str) -> (ProposalGenerator, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let provider = Arc::new(MockProvider {
            reply: reply.to_string(),
            called: called.clone(),
        });
        (ProposalGenerator::new(provider), called)
    }

    #[tokio::test]
    async fn test_invalid_bundle_skips_model_call() {
        let (generator, called) = generator("{}");
        let proposal = generator.propose(&DataBundle::Invalid).await.unwrap();
        assert!(matches!(proposal, Proposal::Skipped));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_valid_bundle_returns_raw_response_verbatim() {
        let reply = "```json\n{\"collateral_factor\": 0.45}\n```";
        let (generator, called) = generator(reply);
        let bundle = DataBundle::Valid(RiskInputs {
            collateral_factor: 0.5,
            total_borrows: 1000.0,
            token_price: 100.0,
            greed_value: 80,
            news_snippets: "positive news".to_string(),
        });

        let proposal = generator.propose(&bundle).await.unwrap();
        assert!(called.load(Ordering::SeqCst));
        match proposal {
            Proposal::Model(raw) => assert_eq!(raw, reply),
            Proposal::Skipped => panic!("expected a model proposal"),
        }
    }
}
