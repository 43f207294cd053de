// src/pipeline/info.rs

//! Stage file inspection.

use crate::error::Result;
use crate::models::{Config, Film};
use crate::storage::LocalStorage;

/// State of one stage file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFileInfo {
    pub label: &'static str,
    pub key: String,
    /// Entry count, `None` when the file does not exist
    pub entries: Option<usize>,
}

/// Describe every stage file under the data directory.
pub async fn run_info(config: &Config, storage: &LocalStorage) -> Result<Vec<StageFileInfo>> {
    let paths = &config.paths;

    let links = storage
        .read_lines(&paths.links_file)
        .await?
        .map(|lines| lines.len());
    let films = storage
        .read_json::<Vec<Film>>(&paths.films_file)
        .await?
        .map(|films| films.len());
    let subs = storage
        .read_json::<Vec<Film>>(&paths.subs_file)
        .await?
        .map(|films| films.len());
    let report = storage
        .read_bytes(&config.output_filename)
        .await?
        .map(|bytes| String::from_utf8_lossy(&bytes).lines().count());

    let files = vec![
        StageFileInfo {
            label: "Links",
            key: paths.links_file.clone(),
            entries: links,
        },
        StageFileInfo {
            label: "Films",
            key: paths.films_file.clone(),
            entries: films,
        },
        StageFileInfo {
            label: "Streaming films",
            key: paths.subs_file.clone(),
            entries: subs,
        },
        StageFileInfo {
            label: "Report lines",
            key: config.output_filename.clone(),
            entries: report,
        },
    ];

    log::info!("Data directory: {}", storage.root().display());
    for file in &files {
        match file.entries {
            Some(count) => log::info!("{}: {} ({} entries)", file.label, file.key, count),
            None => log::info!("{}: {} (not found)", file.label, file.key),
        }
    }

    Ok(files)
}
