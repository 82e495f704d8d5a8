use crate::collector::client::NewsClient;
use crate::config::config::NewsCfg;
use crate::core::types::NewsItem;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// SearXNG-style JSON search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<SearchResult> for NewsItem {
    fn from(r: SearchResult) -> Self {
        NewsItem {
            title: r.title,
            body: r.content,
            url: r.url,
        }
    }
}

/// Join each item's body (title when the body is empty) with single spaces,
/// in source order. Items with neither field are skipped.
pub fn assemble_snippets(items: &[NewsItem]) -> String {
    items
        .iter()
        .filter_map(|item| {
            item.body
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| item.title.as_deref().filter(|s| !s.is_empty()))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct SearchNewsClient {
    client: Client,
    cfg: NewsCfg,
}

impl SearchNewsClient {
    pub fn new(cfg: NewsCfg, client: Client) -> Self {
        Self { client, cfg }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.cfg.base_url)
    }
}

#[async_trait]
impl NewsClient for SearchNewsClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<NewsItem>> {
        let resp = self
            .client
            .get(self.search_url())
            .query(&[
                ("q", query),
                ("categories", "news"),
                ("format", "json"),
            ])
            .send()
            .await
            .context("requesting news search")?;

        if !resp.status().is_success() {
            anyhow::bail!("news search error: {}", resp.status());
        }

        let parsed: SearchResponse = resp.json().await.context("parsing news search response")?;

        Ok(parsed
            .results
            .into_iter()
            .take(max_results as usize)
            .map(NewsItem::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: Option<&str>, body: Option<&str>) -> NewsItem {
        NewsItem {
            title: title.map(|s| s.to_string()),
            body: body.map(|s| s.to_string()),
            url: None,
        }
    }

    #[test]
    fn test_assemble_snippets_prefers_body() {
        let items = vec![
            item(Some("title one"), Some("body one")),
            item(Some("title two"), None),
            item(Some("title three"), Some("body three")),
        ];
        assert_eq!(
            assemble_snippets(&items),
            "body one title two body three"
        );
    }

    #[test]
    fn test_assemble_snippets_skips_empty_items() {
        let items = vec![
            item(None, None),
            item(Some(""), Some("")),
            item(Some("only title"), Some("")),
        ];
        assert_eq!(assemble_snippets(&items), "only title");
    }

    #[test]
    fn test_assemble_snippets_empty_list() {
        assert_eq!(assemble_snippets(&[]), "");
    }

    #[test]
    fn test_search_response_maps_content_to_body() {
        let body = r#"{"results":[{"title":"BTC rallies","content":"Bitcoin climbed today","url":"https://example.com/a"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        let items: Vec<NewsItem> = parsed.results.into_iter().map(NewsItem::from).collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].body.as_deref(), Some("Bitcoin climbed today"));
        assert_eq!(items[0].title.as_deref(), Some("BTC rallies"));
    }

    #[test]
    fn test_search_url_construction() {
        let cfg = NewsCfg::default();
        let client = SearchNewsClient::new(cfg, Client::new());
        assert_eq!(client.search_url(), "http://localhost:8888/search");
    }
}
