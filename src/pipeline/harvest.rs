// src/pipeline/harvest.rs

//! Stage 1: watchlist pages -> link file.

use crate::error::Result;
use crate::models::{Config, StageStats};
use crate::services::parse_watchlist_page;
use crate::storage::LocalStorage;
use crate::utils::PageSource;
use crate::utils::logging;
use crate::utils::url::{join, watchlist_page_path};

/// Fetch watchlist pages `1..max_page` and write every film path, one per
/// line, replacing the previous link file.
///
/// Any failed page aborts the stage before the file is touched.
pub async fn run_harvester(
    config: &Config,
    source: &dyn PageSource,
    storage: &LocalStorage,
) -> Result<StageStats> {
    logging::header(&format!(
        "Getting links from {}'s Letterboxd Watchlist",
        config.letterboxd_username
    ));

    let mut stats = StageStats::new("links");
    let mut links = Vec::new();

    for page in 1..config.max_page {
        let url = join(
            &config.watchlist.host,
            &watchlist_page_path(&config.letterboxd_username, page),
        );
        let html = source.fetch_text(&url).await?;
        let paths = parse_watchlist_page(&html, &url)?;

        for path in paths {
            log::info!("Page {}: {}", page, path);
            links.push(path);
        }
        stats.input += 1;
    }

    storage.write_lines(&config.paths.links_file, &links).await?;
    stats.output = links.len();

    logging::sub_item(&format!(
        "{} links from {} pages written to {}",
        stats.output,
        stats.input,
        storage.path(&config.paths.links_file).display()
    ));

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::pipeline::testing::{FakePages, config};
    use tempfile::TempDir;

    fn page(slugs: &[&str]) -> String {
        let posters: String = slugs
            .iter()
            .map(|slug| format!(r#"<li><div class="linked-film-poster" data-film-slug="{slug}"></div></li>"#))
            .collect();
        format!("<html><body><ul>{posters}</ul></body></html>")
    }

    fn url(page: u32) -> String {
        format!("https://letterboxd.com/someone/watchlist/page/{page}")
    }

    #[tokio::test]
    async fn test_fetches_ceiling_minus_one_pages() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let source = FakePages::default()
            .with(&url(1), &page(&["/film/alien/", "/film/heat-1995/"]))
            .with(&url(2), &page(&["/film/zodiac/"]))
            .with(&url(3), &page(&["/film/never-fetched/"]));

        let stats = run_harvester(&config(3), &source, &storage).await.unwrap();

        assert_eq!(source.requested(), vec![url(1), url(2)]);
        assert_eq!(stats.input, 2);
        assert_eq!(stats.output, 3);

        let links = storage.read_lines("links.txt").await.unwrap().unwrap();
        assert_eq!(links, vec!["/film/alien/", "/film/heat-1995/", "/film/zodiac/"]);
    }

    #[tokio::test]
    async fn test_ceiling_of_one_fetches_nothing() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let source = FakePages::default();

        let stats = run_harvester(&config(1), &source, &storage).await.unwrap();

        assert!(source.requested().is_empty());
        assert_eq!(stats.output, 0);
        let links = storage.read_lines("links.txt").await.unwrap().unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_aborts_and_keeps_previous_file() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        storage
            .write_lines("links.txt", &["/film/old/".to_string()])
            .await
            .unwrap();
        let source = FakePages::default().with(&url(1), &page(&["/film/alien/"]));

        let err = run_harvester(&config(4), &source, &storage).await.unwrap_err();

        assert!(matches!(err, AppError::Scrape { .. }));
        let links = storage.read_lines("links.txt").await.unwrap().unwrap();
        assert_eq!(links, vec!["/film/old/"]);
    }

    #[tokio::test]
    async fn test_duplicates_across_pages_are_kept() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let source = FakePages::default()
            .with(&url(1), &page(&["/film/alien/"]))
            .with(&url(2), &page(&["/film/alien/"]));

        run_harvester(&config(3), &source, &storage).await.unwrap();

        let links = storage.read_lines("links.txt").await.unwrap().unwrap();
        assert_eq!(links, vec!["/film/alien/", "/film/alien/"]);
    }
}
