// src/pipeline/availability.rs

//! Stage 3: film records -> records with subscription services.

use crate::error::Result;
use crate::models::{Config, Film, StageStats};
use crate::services::{AvailabilityLookup, Resolution, resolve};
use crate::storage::LocalStorage;
use crate::utils::logging;

/// Look every film up by title and keep the ones carried by at least one
/// subscription service.
///
/// Films the lookup cannot place are logged and skipped; lookup failures
/// abort the stage.
pub async fn run_resolver(
    config: &Config,
    lookup: &dyn AvailabilityLookup,
    storage: &LocalStorage,
) -> Result<StageStats> {
    logging::header(&format!(
        "Getting streaming information from {}",
        lookup.name()
    ));

    let films: Vec<Film> = storage
        .require_json(&config.paths.films_file, "films")
        .await?;

    let mut stats = StageStats::new("availability");
    stats.input = films.len();

    let mut updated = Vec::new();
    for (idx, film) in films.into_iter().enumerate() {
        let response = lookup.search(&film.title).await?;
        let title = film.title.clone();

        match resolve(film, &response, config) {
            Resolution::Available(film) => {
                log::info!("{} {} [{}]", idx, film.title, film.services.join(", "));
                updated.push(film);
            }
            Resolution::NotFound => {
                log::warn!("! Couldn't find film {}", title);
                stats.dropped += 1;
            }
            Resolution::NoOffers => {
                log::info!("{} {} has no offers", idx, title);
                stats.dropped += 1;
            }
            Resolution::NoSubscription => {
                log::info!("{} {} has no subscription offers", idx, title);
                stats.dropped += 1;
            }
        }
    }

    storage.write_json(&config.paths.subs_file, &updated).await?;
    stats.output = updated.len();

    logging::sub_item(&format!(
        "{} of {} films streaming, written to {}",
        stats.output,
        stats.input,
        storage.path(&config.paths.subs_file).display()
    ));

    Ok(stats)
}
