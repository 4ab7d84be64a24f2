use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::WikiConfig;

use super::WikiError;

/// A search result title/id pair not yet confirmed to have a usable extract.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub title: String,
    pub page_id: u64,
}

/// The plain-text body of an article, with its canonical URL.
#[derive(Debug, Clone)]
pub struct PageExtract {
    pub url: String,
    pub extract: String,
}

/// Client for the MediaWiki action API.
///
/// Each research run builds its own client, so the per-request timeout
/// and User-Agent travel with the run and nothing is shared across runs.
pub struct WikiClient {
    http: Client,
    api_url: String,
    language: String,
}

impl WikiClient {
    /// Creates a client from the Wikipedia section of the config.
    pub fn new(config: &WikiConfig) -> Result<Self, WikiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url_or_default(),
            language: config.language.clone(),
        })
    }

    /// Searches for articles matching `query`.
    ///
    /// Returns up to `limit` hits in the upstream relevance order; no
    /// re-ranking is applied.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, WikiError> {
        let limit = limit.to_string();
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Api {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| WikiError::Parse(e.to_string()))?;

        let hits: Vec<SearchHit> = body
            .query
            .map(|q| q.search)
            .unwrap_or_default()
            .into_iter()
            .map(|hit| SearchHit {
                title: hit.title,
                page_id: hit.pageid,
            })
            .collect();

        debug!(query, hits = hits.len(), "search completed");
        Ok(hits)
    }

    /// Fetches the plain-text extract for an article by title.
    pub async fn fetch_extract(&self, title: &str) -> Result<PageExtract, WikiError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("exlimit", "1"),
                ("titles", title),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Api {
                status: status.as_u16(),
            });
        }

        let body: ExtractResponse = response
            .json()
            .await
            .map_err(|e| WikiError::Parse(e.to_string()))?;

        let extract = body
            .query
            .map(|q| q.pages)
            .unwrap_or_default()
            .into_values()
            .find_map(|page| page.extract.filter(|text| !text.is_empty()))
            .ok_or_else(|| WikiError::MissingExtract(title.to_string()))?;

        Ok(PageExtract {
            url: self.article_url(title),
            extract,
        })
    }

    /// Canonical article URL for a title.
    fn article_url(&self, title: &str) -> String {
        format!(
            "https://{}.wikipedia.org/wiki/{}",
            self.language,
            title.replace(' ', "_")
        )
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<RawSearchHit>,
}

#[derive(Debug, Deserialize)]
struct RawSearchHit {
    title: String,
    pageid: u64,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, RawPage>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    extract: Option<String>,
}
