//! Service layer for the watchlist pipeline.
//!
//! This module contains the business logic for:
//! - Watchlist listing extraction (`parse_watchlist_page`)
//! - Film detail extraction (`parse_film_details`)
//! - Availability matching (`resolve`)
//! - The availability lookup client (`JustWatchClient`)

mod availability;
mod films;
mod justwatch;
mod watchlist;

use scraper::Selector;

use crate::error::{AppError, Result};

pub use availability::{Resolution, resolve, select_candidate, subscription_services};
pub use films::{parse_film_details, parse_rating};
pub use justwatch::{AvailabilityLookup, JustWatchClient};
pub use watchlist::parse_watchlist_page;

/// Parse a CSS selector, mapping failures into `AppError::Selector`.
pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("#featured-film-header").is_ok());
        assert!(parse_selector(r#"meta[name="twitter:data2"]"#).is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }
}
