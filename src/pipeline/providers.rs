// src/pipeline/providers.rs

//! Standalone dump of the lookup service's provider catalog.

use crate::error::Result;
use crate::models::Config;
use crate::services::AvailabilityLookup;
use crate::storage::LocalStorage;
use crate::utils::logging;

/// Fetch the provider catalog and write the body verbatim.
///
/// Not part of `run_pipeline`; useful for finding the short codes to put in
/// the `[services]` table.
pub async fn run_provider_catalog(
    config: &Config,
    lookup: &dyn AvailabilityLookup,
    storage: &LocalStorage,
) -> Result<()> {
    logging::header(&format!("Fetching {} provider catalog", lookup.name()));

    let catalog = lookup.providers().await?;
    storage
        .write_bytes(&config.paths.providers_file, catalog.as_bytes())
        .await?;

    logging::sub_item(&format!(
        "{} bytes written to {}",
        catalog.len(),
        storage.path(&config.paths.providers_file).display()
    ));
    Ok(())
}
