use crate::core::types::Proposal;
use serde::Deserialize;
use tracing::warn;

pub const NO_ADJUSTMENT_MSG: &str = "No valid data available. No adjustments proposed.";
pub const PARSE_FAILURE_MSG: &str = "Could not parse model proposal.";

/// Either key may be absent; a partial proposal still renders.
#[derive(Debug, Deserialize)]
struct ProposalFields {
    #[serde(default)]
    collateral_factor: Option<f64>,
    #[serde(default)]
    reasoning: Option<String>,
}

/// Models sometimes wrap the JSON payload in markdown code fences despite
/// being told not to. Remove every fence marker before parsing.
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

fn render(fields: &ProposalFields) -> String {
    let collateral_factor = fields
        .collateral_factor
        .map(|v| v.to_string())
        .unwrap_or_default();
    let reasoning = fields.reasoning.as_deref().unwrap_or("");
    format!(
        "Final proposal:\n- collateral_factor: {}\n- reasoning: {}",
        collateral_factor, reasoning
    )
}

/// Convert the raw proposal into the displayable run result. Parse failures
/// surface as a fixed message rather than an error; this is the only
/// recovery path in the whole pipeline.
pub fn finalize(proposal: &Proposal) -> String {
    let raw = match proposal {
        Proposal::Skipped => return NO_ADJUSTMENT_MSG.to_string(),
        Proposal::Model(raw) => raw,
    };

    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<ProposalFields>(&cleaned) {
        Ok(fields) => render(&fields),
        Err(e) => {
            warn!(?e, %cleaned, "failed to parse model proposal");
            PARSE_FAILURE_MSG.to_string()
        }
    }
}
