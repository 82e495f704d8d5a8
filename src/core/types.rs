use serde::Deserialize;

// ----------- Domain messages -----------------

/// On-chain protocol state as served by the backend status endpoint.
/// Missing fields deserialize as zero, which downstream treats as "no data".
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OnchainStatus {
    #[serde(default)]
    pub token_price: f64,
    #[serde(default)]
    pub collateral_factor: f64,
    #[serde(default)]
    pub total_borrows: f64,
}

#[derive(Clone, Debug)]
pub struct NewsItem {
    pub title: Option<String>,
    pub body: Option<String>,
    pub url: Option<String>,
}

/// Everything the model needs to reason about a collateral-factor change.
#[derive(Clone, Debug)]
pub struct RiskInputs {
    pub collateral_factor: f64,
    pub total_borrows: f64,
    pub token_price: f64,
    pub greed_value: u8, // 0 = extreme fear, 100 = extreme greed
    pub news_snippets: String,
}

/// Output of the collection stage. Invalid means the on-chain source failed
/// or reported zero price / zero collateral factor; no other fields survive.
#[derive(Clone, Debug)]
pub enum DataBundle {
    Invalid,
    Valid(RiskInputs),
}

impl DataBundle {
    pub fn is_valid(&self) -> bool {
        matches!(self, DataBundle::Valid(_))
    }
}

/// Output of the generation stage. Skipped carries no payload: the finalizer
/// renders the fixed no-adjustment message without attempting to parse it.
#[derive(Clone, Debug)]
pub enum Proposal {
    Skipped,
    Model(String),
}
