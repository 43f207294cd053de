// src/services/watchlist.rs

//! Watchlist listing page extraction.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::services::parse_selector;
use crate::utils::url::{film_path, film_path_from_link};

const POSTER_SELECTOR: &str = ".linked-film-poster";
const SLUG_ATTR: &str = "data-film-slug";
const LINK_ATTRS: [&str; 2] = ["data-target-link", "data-film-link"];

/// Extract the detail-page path of every film poster on a listing page,
/// in page order.
///
/// A poster with no usable slug is a parse miss and fails the whole page.
pub fn parse_watchlist_page(html: &str, page_url: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let poster_sel = parse_selector(POSTER_SELECTOR)?;

    document
        .select(&poster_sel)
        .enumerate()
        .map(|(idx, poster)| {
            poster_path(&poster).ok_or_else(|| {
                AppError::scrape(
                    page_url,
                    format!("film poster #{} has no {} attribute", idx + 1, SLUG_ATTR),
                )
            })
        })
        .collect()
}

fn poster_path(poster: &ElementRef) -> Option<String> {
    let element = poster.value();

    if let Some(slug) = element.attr(SLUG_ATTR).filter(|s| !s.trim().is_empty()) {
        return Some(film_path(slug));
    }

    LINK_ATTRS
        .iter()
        .filter_map(|attr| element.attr(attr))
        .find_map(film_path_from_link)
}
