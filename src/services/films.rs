// src/services/films.rs

//! Film detail page extraction.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::Film;
use crate::services::parse_selector;

const HEADER_SELECTOR: &str = "#featured-film-header";
const RATING_SELECTOR: &str = r#"meta[name="twitter:data2"]"#;
const RATING_SEPARATOR: &str = " out of ";

/// Build a film record from a detail page.
///
/// Title, year and director come from the featured header; a missing header
/// or field fails the page. A missing rating only yields an empty rating.
pub fn parse_film_details(html: &str, host: &str, path: &str) -> Result<Film> {
    let document = Html::parse_document(html);

    let header_sel = parse_selector(HEADER_SELECTOR)?;
    let header = document
        .select(&header_sel)
        .next()
        .ok_or_else(|| AppError::scrape(path, "missing #featured-film-header"))?;

    let title = first_text(&header, "h1")
        .ok_or_else(|| AppError::scrape(path, "header has no title"))?;
    let year = first_text(&header, "small")
        .ok_or_else(|| AppError::scrape(path, "header has no year"))?;
    let director = director_text(&header)?
        .ok_or_else(|| AppError::scrape(path, "header has no director"))?;

    let rating = match page_rating(&document)? {
        Some(rating) => rating,
        None => {
            log::warn!("! No rating found");
            String::new()
        }
    };

    Ok(Film::from_slug(host, path, title, year, director, rating))
}

/// Left operand of an `X out of Y` rating.
pub fn parse_rating(content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    content
        .split(RATING_SEPARATOR)
        .next()
        .map(|rating| rating.trim().to_string())
}

fn page_rating(document: &Html) -> Result<Option<String>> {
    let rating_sel = parse_selector(RATING_SELECTOR)?;
    Ok(document
        .select(&rating_sel)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .and_then(parse_rating))
}

fn first_text(scope: &ElementRef, selector: &str) -> Option<String> {
    let sel = parse_selector(selector).ok()?;
    scope.select(&sel).next().map(|el| element_text(&el))
}

/// First span in the header that is not part of the title.
fn director_text(header: &ElementRef) -> Result<Option<String>> {
    let span_sel = parse_selector("span")?;
    Ok(header
        .select(&span_sel)
        .find(|span| !inside_heading(span))
        .map(|span| element_text(&span)))
}

fn inside_heading(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(|node| node.value().as_element())
        .any(|ancestor| ancestor.name() == "h1")
}

fn element_text(element: &ElementRef) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
