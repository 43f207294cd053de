//! Pipeline entry points.
//!
//! - `run_harvester`: watchlist pages -> `links.txt`
//! - `run_detail_fetcher`: `links.txt` -> `films.json`
//! - `run_resolver`: `films.json` -> `films_with_subs.json`
//! - `run_report`: `films_with_subs.json` -> grouped report
//! - `run_pipeline`: the four stages in order
//! - `run_provider_catalog`: standalone provider catalog dump

pub mod availability;
pub mod details;
pub mod harvest;
pub mod info;
pub mod pipeline;
pub mod providers;
pub mod report;

pub use availability::run_resolver;
pub use details::run_detail_fetcher;
pub use harvest::run_harvester;
pub use info::run_info;
pub use pipeline::run_pipeline;
pub use providers::run_provider_catalog;
pub use report::{render_report, run_report};

/// A stage of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Stage {
    Links,
    Films,
    Availability,
    Report,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Links, Stage::Films, Stage::Availability, Stage::Report];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Links => "links",
            Stage::Films => "films",
            Stage::Availability => "availability",
            Stage::Report => "report",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::Links => "Links - Harvesting watchlist pages",
            Stage::Films => "Films - Fetching film detail pages",
            Stage::Availability => "Availability - Looking up streaming services",
            Stage::Report => "Report - Grouping films by service",
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory stand-ins for the network.

    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{AppError, Result};
    use crate::models::{Config, SearchResponse};
    use crate::services::AvailabilityLookup;
    use crate::utils::PageSource;

    pub fn config(max_page: u32) -> Config {
        Config::parse(&format!(
            r#"
letterboxd_username = "someone"
max_page = {max_page}
output_filename = "streaming.txt"

[services]
nx = "Netflix"
hlu = "Hulu"

[crawler]
request_delay_ms = 0
"#
        ))
        .unwrap()
    }

    /// Serves canned pages and records every requested URL.
    #[derive(Default)]
    pub struct FakePages {
        pages: HashMap<String, String>,
        pub requested: Mutex<Vec<String>>,
    }

    impl FakePages {
        pub fn with(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource for FakePages {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::scrape(url, "404 Not Found"))
        }
    }

    /// Answers searches from a title -> response table.
    #[derive(Default)]
    pub struct FakeLookup {
        responses: HashMap<String, SearchResponse>,
        pub catalog: String,
        pub queries: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        pub fn with(mut self, query: &str, json: &str) -> Self {
            self.responses
                .insert(query.to_string(), serde_json::from_str(json).unwrap());
            self
        }
    }

    #[async_trait]
    impl AvailabilityLookup for FakeLookup {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn search(&self, query: &str) -> Result<SearchResponse> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.responses.get(query).cloned().unwrap_or_default())
        }

        async fn providers(&self) -> Result<String> {
            Ok(self.catalog.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_are_ordered() {
        let mut sorted = Stage::ALL;
        sorted.sort();
        assert_eq!(sorted, Stage::ALL);
        assert!(Stage::Films < Stage::Report);
    }

    #[test]
    fn test_stage_names() {
        let names: Vec<&str> = Stage::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["links", "films", "availability", "report"]);
    }
}
