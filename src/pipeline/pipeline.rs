// src/pipeline/pipeline.rs

use crate::error::Result;
use crate::models::{Config, RunStats};
use crate::services::AvailabilityLookup;
use crate::storage::LocalStorage;
use crate::utils::PageSource;
use crate::utils::logging;

use super::Stage;
use super::availability::run_resolver;
use super::details::run_detail_fetcher;
use super::harvest::run_harvester;
use super::report::run_report;

/// Run the stages in order, starting at `from`.
///
/// Starting past `Stage::Links` reuses the files earlier runs left on disk.
pub async fn run_pipeline(
    config: &Config,
    source: &dyn PageSource,
    lookup: &dyn AvailabilityLookup,
    storage: &LocalStorage,
    from: Stage,
) -> Result<RunStats> {
    let mut run = RunStats::start();

    let stages: Vec<Stage> = Stage::ALL.into_iter().filter(|s| *s >= from).collect();
    let total_steps = stages.len();

    for (idx, stage) in stages.into_iter().enumerate() {
        logging::step(idx + 1, total_steps, stage.description());

        let stats = match stage {
            Stage::Links => run_harvester(config, source, storage).await?,
            Stage::Films => run_detail_fetcher(config, source, storage).await?,
            Stage::Availability => run_resolver(config, lookup, storage).await?,
            Stage::Report => run_report(config, storage).await?,
        };
        run.record(stats);
    }

    run.finish();
    logging::separator();
    logging::summary("Pipeline complete", &logging::run_summary_items(&run));

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Film;
    use crate::pipeline::testing::{FakeLookup, FakePages, config};
    use tempfile::TempDir;

    const LISTING: &str = r#"<html><body>
        <div class="linked-film-poster" data-film-slug="/film/alien/"></div>
        <div class="linked-film-poster" data-film-slug="/film/heat-1995/"></div>
        </body></html>"#;

    const ALIEN: &str = r#"<html><head><meta name="twitter:data2" content="4.28 out of 5"></head>
        <body><section id="featured-film-header"><h1>Alien</h1>
        <p><small>1979</small> Directed by <a><span>Ridley Scott</span></a></p></section></body></html>"#;

    const HEAT: &str = r#"<html><body><section id="featured-film-header"><h1>Heat</h1>
        <p><small>1995</small> Directed by <a><span>Michael Mann</span></a></p></section></body></html>"#;

    fn pages() -> FakePages {
        FakePages::default()
            .with("https://letterboxd.com/someone/watchlist/page/1", LISTING)
            .with("https://letterboxd.com/film/alien/", ALIEN)
            .with("https://letterboxd.com/film/heat-1995/", HEAT)
    }

    fn lookup() -> FakeLookup {
        FakeLookup::default()
            .with(
                "Alien",
                r#"{"items": [{"title": "Alien", "original_release_year": 1979, "full_path": "/us/movie/alien",
                    "offers": [{"monetization_type": "flatrate", "package_short_name": "nx"},
                               {"monetization_type": "rent", "package_short_name": "itu"}]}]}"#,
            )
            .with(
                "Heat",
                r#"{"items": [{"title": "Heat", "original_release_year": 1995,
                    "offers": [{"monetization_type": "flatrate", "package_short_name": "other"}]}]}"#,
            )
    }

    #[tokio::test]
    async fn test_full_pipeline() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let config = config(2);

        let run = run_pipeline(&config, &pages(), &lookup(), &storage, Stage::Links)
            .await
            .unwrap();

        let outputs: Vec<usize> = run.stages.iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![2, 2, 2, 1]);

        let subs: Vec<Film> = storage
            .read_json("films_with_subs.json")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(subs[0].rating, "4.28");
        assert!(subs[0].have_svc);
        assert!(!subs[1].have_svc);

        let report = std::fs::read_to_string(storage.path("streaming.txt")).unwrap();
        assert_eq!(report, "\nHULU\n\nNETFLIX\nAlien (1979) - Ridley Scott\n");
    }

    #[tokio::test]
    async fn test_resume_from_report_uses_files_on_disk() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let mut alien = Film::from_slug(
            "https://letterboxd.com",
            "/film/alien/",
            "Alien",
            "1979",
            "Ridley Scott",
            "",
        );
        alien.services = vec!["hlu".to_string()];
        alien.have_svc = true;
        storage
            .write_json("films_with_subs.json", &vec![alien])
            .await
            .unwrap();

        let source = FakePages::default();
        let run = run_pipeline(&config(2), &source, &FakeLookup::default(), &storage, Stage::Report)
            .await
            .unwrap();

        assert_eq!(run.stages.len(), 1);
        assert!(source.requested().is_empty());
        let report = std::fs::read_to_string(storage.path("streaming.txt")).unwrap();
        assert_eq!(report, "\nHULU\nAlien (1979) - Ridley Scott\n\nNETFLIX\n");
    }

    #[tokio::test]
    async fn test_resume_without_previous_stage_fails() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let result = run_pipeline(
            &config(2),
            &FakePages::default(),
            &FakeLookup::default(),
            &storage,
            Stage::Availability,
        )
        .await;
        assert!(result.is_err());
    }
}
