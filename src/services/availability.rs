// src/services/availability.rs

//! Matching lookup results to films and extracting subscription services.

use std::collections::BTreeSet;

use crate::models::{Config, Film, SearchItem, SearchResponse};

/// Outcome of resolving one film against a search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Film carried by at least one subscription service
    Available(Film),
    /// No candidate had the same title and a release year
    NotFound,
    /// The chosen candidate has no offers field
    NoOffers,
    /// Offers exist but none is subscription-included
    NoSubscription,
}

/// Pick the candidate for `title`.
///
/// Every candidate is inspected and the last one whose title matches
/// case-insensitively and which has a release year wins, so a later exact
/// match overrides an earlier one.
pub fn select_candidate<'a>(title: &str, items: &'a [SearchItem]) -> Option<&'a SearchItem> {
    let wanted = title.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase() == wanted && item.has_release_year())
        .last()
}

/// Distinct short codes of the subscription-included offers, sorted.
pub fn subscription_services(item: &SearchItem) -> Option<Vec<String>> {
    let offers = item.offers.as_ref()?;
    let services: BTreeSet<&str> = offers
        .iter()
        .filter(|offer| offer.monetization_type.is_subscription())
        .map(|offer| offer.package_short_name.as_str())
        .collect();
    Some(services.into_iter().map(str::to_string).collect())
}

/// Augment `film` with its subscription services.
///
/// `have_svc` is set when any service is one of the configured services of
/// interest. Films with no subscription service are not kept.
pub fn resolve(mut film: Film, response: &SearchResponse, config: &Config) -> Resolution {
    let Some(item) = select_candidate(&film.title, &response.items) else {
        return Resolution::NotFound;
    };

    log::debug!(
        "Matched {} {}",
        item.title,
        item.full_path.as_deref().unwrap_or_default()
    );

    let Some(services) = subscription_services(item) else {
        return Resolution::NoOffers;
    };
    if services.is_empty() {
        return Resolution::NoSubscription;
    }

    film.have_svc = services
        .iter()
        .any(|service| config.is_service_of_interest(service));
    film.services = services;
    Resolution::Available(film)
}
