// src/pipeline/details.rs

//! Stage 2: link file -> film records.

use crate::error::Result;
use crate::models::{Config, Film, StageStats};
use crate::services::parse_film_details;
use crate::storage::LocalStorage;
use crate::utils::PageSource;
use crate::utils::logging;
use crate::utils::url::{film_path, join};

/// Fetch the detail page of every stored link and write the records, in link
/// order, as a JSON array.
pub async fn run_detail_fetcher(
    config: &Config,
    source: &dyn PageSource,
    storage: &LocalStorage,
) -> Result<StageStats> {
    logging::header("Getting film detail pages from Letterboxd");

    let links = storage
        .require_lines(&config.paths.links_file, "links")
        .await?;

    let mut stats = StageStats::new("films");
    stats.input = links.len();

    let mut films: Vec<Film> = Vec::with_capacity(links.len());
    for (idx, link) in links.iter().enumerate() {
        let path = film_path(link);
        log::info!("{} {}", idx, path);

        let html = source
            .fetch_text(&join(&config.watchlist.host, &path))
            .await?;
        films.push(parse_film_details(&html, &config.watchlist.host, &path)?);
    }

    storage.write_json(&config.paths.films_file, &films).await?;
    stats.output = films.len();

    logging::sub_item(&format!(
        "{} films written to {}",
        stats.output,
        storage.path(&config.paths.films_file).display()
    ));

    Ok(stats)
}
