use crate::collector::collector::DataCollector;
use crate::proposal::finalizer;
use crate::proposal::generator::ProposalGenerator;
use anyhow::Result;
use tracing::info;

/// The three stages run strictly in sequence; each consumes the previous
/// stage's output and nothing loops back.
pub async fn run(collector: &DataCollector, generator: &ProposalGenerator) -> Result<String> {
    let bundle = collector.collect().await;
    let proposal = generator.propose(&bundle).await?;
    let summary = finalizer::finalize(&proposal);
    info!(%summary, "pipeline finished");
    Ok(summary)
}
