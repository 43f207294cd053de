//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// The top-level keys keep the names of the original settings document so an
/// existing file only needs its syntax converted to TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Owner of the watchlist to harvest
    pub letterboxd_username: String,

    /// Listing pages `1..max_page` are fetched (the ceiling itself is not)
    #[serde(default = "defaults::max_page")]
    pub max_page: u32,

    /// Path of the final grouped report, relative to `paths.data_dir`
    #[serde(default = "defaults::output_filename")]
    pub output_filename: String,

    /// Services of interest: short code -> display name
    #[serde(default)]
    pub services: BTreeMap<String, String>,

    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Watchlist site settings
    #[serde(default)]
    pub watchlist: WatchlistConfig,

    /// Availability lookup service settings
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Intermediate stage files
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.letterboxd_username.trim().is_empty() {
            return Err(AppError::validation("letterboxd_username is empty"));
        }
        if self.max_page == 0 {
            return Err(AppError::validation("max_page must be > 0"));
        }
        if self.output_filename.trim().is_empty() {
            return Err(AppError::validation("output_filename is empty"));
        }
        if self.services.is_empty() {
            return Err(AppError::validation("No services defined"));
        }
        if let Some((code, _)) = self.services.iter().find(|(_, name)| name.trim().is_empty()) {
            return Err(AppError::validation(format!(
                "service '{code}' has an empty display name"
            )));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.lookup.locale.trim().is_empty() {
            return Err(AppError::validation("lookup.locale is empty"));
        }
        Ok(())
    }

    /// Whether a short code is one of the configured services of interest.
    pub fn is_service_of_interest(&self, short_name: &str) -> bool {
        self.services.contains_key(short_name)
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Pause after every network call, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Watchlist site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistConfig {
    /// Scheme and host every film link is prefixed with
    #[serde(default = "defaults::host")]
    pub host: String,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
        }
    }
}

/// Availability lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the content API
    #[serde(default = "defaults::api_url")]
    pub api_url: String,

    /// Catalog locale (e.g. `en_US`)
    #[serde(default = "defaults::locale")]
    pub locale: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: defaults::api_url(),
            locale: defaults::locale(),
        }
    }
}

/// Locations of the intermediate stage files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding every stage file
    #[serde(default = "defaults::data_dir")]
    pub data_dir: String,

    #[serde(default = "defaults::links_file")]
    pub links_file: String,

    #[serde(default = "defaults::films_file")]
    pub films_file: String,

    #[serde(default = "defaults::subs_file")]
    pub subs_file: String,

    #[serde(default = "defaults::providers_file")]
    pub providers_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
            links_file: defaults::links_file(),
            films_file: defaults::films_file(),
            subs_file: defaults::subs_file(),
            providers_file: defaults::providers_file(),
        }
    }
}

mod defaults {
    // Run defaults
    pub fn max_page() -> u32 {
        2
    }
    pub fn output_filename() -> String {
        "streaming.txt".into()
    }

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; watchlist-streams/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        1000
    }

    // Site defaults
    pub fn host() -> String {
        "https://letterboxd.com".into()
    }
    pub fn api_url() -> String {
        "https://apis.justwatch.com".into()
    }
    pub fn locale() -> String {
        "en_US".into()
    }

    // Stage file defaults
    pub fn data_dir() -> String {
        ".".into()
    }
    pub fn links_file() -> String {
        "links.txt".into()
    }
    pub fn films_file() -> String {
        "films.json".into()
    }
    pub fn subs_file() -> String {
        "films_with_subs.json".into()
    }
    pub fn providers_file() -> String {
        "providers.json".into()
    }
}
