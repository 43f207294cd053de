// src/pipeline/report.rs

//! Stage 4: records with subscription services -> grouped report.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Config, Film, Service, StageStats};
use crate::storage::LocalStorage;
use crate::utils::logging;

/// Render the report text.
///
/// Only films flagged `have_svc` are considered. Each configured service gets
/// a section, ordered by short code: a blank line, the upper-cased display
/// name, then `Title (Year) - Director` lines sorted by title.
pub fn render_report(services: &BTreeMap<String, String>, films: &[Film]) -> String {
    let mut buckets = Service::from_config(services);

    for film in films.iter().filter(|film| film.have_svc) {
        for short_name in &film.services {
            if let Some(service) = buckets.get_mut(short_name) {
                service.add(film);
            }
        }
    }

    let mut out = String::new();
    for service in buckets.values() {
        out.push('\n');
        out.push_str(&service.heading());
        out.push('\n');
        for film in service.sorted_films() {
            out.push_str(&film.report_line());
            out.push('\n');
        }
    }
    out
}

/// Number of records that appear in at least one section.
fn listed_count(services: &BTreeMap<String, String>, films: &[Film]) -> usize {
    films
        .iter()
        .filter(|film| film.have_svc && film.services.iter().any(|s| services.contains_key(s)))
        .count()
}

/// Write the grouped report to `output_filename`.
pub async fn run_report(config: &Config, storage: &LocalStorage) -> Result<StageStats> {
    logging::header(&format!("Writing results to {}", config.output_filename));

    let films: Vec<Film> = storage
        .require_json(&config.paths.subs_file, "availability")
        .await?;

    let report = render_report(&config.services, &films);
    storage
        .write_bytes(&config.output_filename, report.as_bytes())
        .await?;

    let mut stats = StageStats::new("report");
    stats.input = films.len();
    stats.output = listed_count(&config.services, &films);
    stats.dropped = stats.input - stats.output;

    logging::sub_item(&format!(
        "{} films listed under {} services",
        stats.output,
        config.services.len()
    ));

    Ok(stats)
}
