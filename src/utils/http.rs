// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Something that can return the body of a page by URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher that pauses after every request.
///
/// Every network call in the pipeline goes through one of these so the
/// remote sites see at most one request per `request_delay_ms`.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::with_client(
            create_async_client(config)?,
            Duration::from_millis(config.request_delay_ms),
        ))
    }

    pub fn with_client(client: Client, delay: Duration) -> Self {
        Self { client, delay }
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// GET a URL and return its body.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let result = self.send_get(url).await;
        self.pause().await;
        result
    }

    /// POST a JSON body and return the response body.
    pub async fn post_json<B: Serialize + Sync + ?Sized>(&self, url: &str, body: &B) -> Result<String> {
        log::debug!("POST {}", url);
        let result = self.send_post(url, body).await;
        self.pause().await;
        result
    }

    async fn send_get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn send_post<B: Serialize + Sync + ?Sized>(&self, url: &str, body: &B) -> Result<String> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl PageSource for Fetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.get_text(url).await
    }
}
