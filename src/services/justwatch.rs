// src/services/justwatch.rs

//! Availability lookup client.

use async_trait::async_trait;
use serde::Serialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{LookupConfig, SearchResponse};
use crate::utils::Fetcher;

/// A streaming-availability lookup service.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync {
    fn name(&self) -> &'static str;

    /// Search titles by free text.
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    /// Raw body of the full provider catalog.
    async fn providers(&self) -> Result<String>;
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
}

/// Client for the JustWatch content API.
pub struct JustWatchClient {
    fetcher: Fetcher,
    titles_url: Url,
    providers_url: Url,
}

impl JustWatchClient {
    pub fn new(config: &LookupConfig, fetcher: Fetcher) -> Result<Self> {
        Ok(Self {
            fetcher,
            titles_url: Self::endpoint(config, "titles", Some("popular"))?,
            providers_url: Self::endpoint(config, "providers", None)?,
        })
    }

    /// `{api_url}/content/{resource}/locale/{locale}[/{suffix}]`
    fn endpoint(config: &LookupConfig, resource: &str, suffix: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&config.api_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::config(format!("lookup.api_url cannot be a base: {}", config.api_url)))?;
            segments
                .pop_if_empty()
                .extend(["content", resource, "locale", config.locale.as_str()]);
            if let Some(suffix) = suffix {
                segments.push(suffix);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl AvailabilityLookup for JustWatchClient {
    fn name(&self) -> &'static str {
        "JustWatch"
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let body = self
            .fetcher
            .post_json(self.titles_url.as_str(), &SearchQuery { query })
            .await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::lookup(format!("unexpected search response for '{query}': {e}")))
    }

    async fn providers(&self) -> Result<String> {
        self.fetcher.get_text(self.providers_url.as_str()).await
    }
}
