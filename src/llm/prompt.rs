use crate::core::types::RiskInputs;

/// News snippets are truncated to keep the prompt bounded; the model does
/// not need the full feed to classify sentiment.
const NEWS_PREVIEW_CHARS: usize = 500;

/// Truncate on a char boundary; slicing by byte index can split a
/// multi-byte character and panic.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn build_prompt(inputs: &RiskInputs) -> String {
    format!(
        "You are a DeFi risk strategy advisor for a lending protocol.

Data:
- On-chain collateral factor: {collateral_factor}
- Total borrows: {total_borrows}
- Token price: {token_price}
- Greed index (0 = extreme fear, 100 = extreme greed): {greed_value}
- News snippets: {news}...

Instructions:
1. Analyze the sentiment of the news snippets (positive, neutral, or negative).
2. Combine this with the greed index to determine overall risk level.
3. Apply these constraints:
- If overall risk is HIGH (greed >= 70 + positive news): decrease collateral factor by at least 0.05.
- If overall risk is LOW (greed <= 40 + negative news): increase collateral factor by up to 0.05.
- If moderate risk: change at most 0.02 or keep it the same.
4. Allowed range for collateral_factor: 0.1 to 0.95.

Return strictly a JSON object with exactly these keys:
\"collateral_factor\" (float),
\"reasoning\" (short string in English).

Do not include any extra text or markdown. Only output the JSON.",
        collateral_factor = inputs.collateral_factor,
        total_borrows = inputs.total_borrows,
        token_price = inputs.token_price,
        greed_value = inputs.greed_value,
        news = truncate_chars(&inputs.news_snippets, NEWS_PREVIEW_CHARS),
    )
}
