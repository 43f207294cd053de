//! Film record shared by every pipeline stage.

use serde::{Deserialize, Deserializer, Serialize};

/// A film from the watchlist.
///
/// Created by the detail stage, augmented by the availability stage and
/// read-only afterwards. Both stage files hold this same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Film {
    /// Director as printed in the page header
    pub director: String,

    /// Available on at least one configured service of interest
    #[serde(default)]
    pub have_svc: bool,

    /// Full URL of the film's detail page
    #[serde(default)]
    pub link: String,

    /// Average rating, empty when the page has none
    #[serde(default)]
    pub rating: String,

    /// Short codes of the subscription services carrying the film
    #[serde(default)]
    pub services: Vec<String>,

    /// Film title
    pub title: String,

    /// Release year (written as a string, read from a string or a number)
    #[serde(deserialize_with = "year_from_string_or_number")]
    pub year: String,
}

impl Film {
    /// Create a record scraped from the detail page at `host` + `slug`.
    ///
    /// An empty slug yields an empty link.
    pub fn from_slug(
        host: &str,
        slug: &str,
        title: impl Into<String>,
        year: impl Into<String>,
        director: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        let slug = slug.trim();
        let link = if slug.is_empty() {
            String::new()
        } else {
            format!("{}{}", host.trim_end_matches('/'), slug)
        };

        Self {
            director: director.into(),
            have_svc: false,
            link,
            rating: rating.into(),
            services: Vec::new(),
            title: title.into(),
            year: year.into(),
        }
    }

    /// Case-insensitive title comparison, the only identity films have.
    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }

    /// Report line: `Title (Year) - Director`.
    pub fn report_line(&self) -> String {
        format!("{} ({}) - {}", self.title, self.year, self.director)
    }
}

fn year_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(text) => text,
        Year::Number(number) => number.to_string(),
    })
}
