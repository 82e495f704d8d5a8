mod collector;
mod config;
mod core;
mod llm;
mod pipeline;
mod proposal;

use anyhow::{Context, Result};
use collector::collector::DataCollector;
use collector::news::SearchNewsClient;
use collector::onchain::BackendStatusClient;
use collector::sentiment::FearGreedClient;
use config::config::{AppCfg, Provider};
use llm::client::CompletionProvider;
use llm::hosted::HostedChatClient;
use llm::local::OllamaClient;
use proposal::generator::ProposalGenerator;
use reqwest::Client;
use std::sync::Arc;
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let cfg = AppCfg::load("config.yml")?;

    // Root span for the whole run
    let span = info_span!(
        "Pipeline",
        pid = %std::process::id(),
        version = env!("CARGO_PKG_VERSION"),
    );
    let _enter = span.enter();

    info!("Starting up");

    info!("Initializing Client");
    let client = Client::builder()
        .user_agent(cfg.http.user_agent.clone())
        .pool_idle_timeout(cfg.http.pool_idle_timeout)
        .pool_max_idle_per_host(cfg.http.pool_max_idle_per_host)
        .tcp_keepalive(cfg.http.tcp_keep_alive)
        .timeout(cfg.http.timeout)
        .build()
        .expect("client");

    info!("Building stages");
    let data_collector = DataCollector::new(
        Arc::new(BackendStatusClient::new(cfg.onchain.clone(), client.clone())),
        Arc::new(FearGreedClient::new(cfg.sentiment.clone(), client.clone())),
        Arc::new(SearchNewsClient::new(cfg.news.clone(), client.clone())),
        cfg.news.clone(),
    );

    let provider: Arc<dyn CompletionProvider> = match cfg.llm.provider {
        Provider::Hosted => Arc::new(HostedChatClient::new(cfg.llm.hosted.clone(), client.clone())),
        Provider::Local => Arc::new(OllamaClient::new(cfg.llm.local.clone(), client)),
    };
    info!(model = provider.model(), "Using completion provider");

    let generator = ProposalGenerator::new(provider);

    let result = tokio::time::timeout(
        cfg.pipeline.run_budget,
        pipeline::run(&data_collector, &generator),
    )
    .await
    .context("pipeline exceeded its run budget")??;

    println!("{result}");
    Ok(())
}
