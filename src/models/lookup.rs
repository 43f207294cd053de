//! Wire types returned by the availability lookup service.

use serde::{Deserialize, Serialize};

/// Response of a title search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One candidate title in a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,

    #[serde(default)]
    pub original_release_year: Option<u32>,

    #[serde(default)]
    pub full_path: Option<String>,

    /// Absent when the service knows no offers at all
    #[serde(default)]
    pub offers: Option<Vec<Offer>>,
}

impl SearchItem {
    /// Candidates without a release year are never selected.
    pub fn has_release_year(&self) -> bool {
        matches!(self.original_release_year, Some(year) if year > 0)
    }
}

/// A (service, monetization model) pairing for a title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub monetization_type: MonetizationType,
    pub package_short_name: String,
}

/// Commercial category of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonetizationType {
    /// Included in a subscription
    Flatrate,
    Rent,
    Buy,
    Ads,
    Free,
    #[serde(other)]
    Other,
}

impl MonetizationType {
    pub fn is_subscription(self) -> bool {
        self == MonetizationType::Flatrate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "total_results": 1,
            "items": [{
                "id": 1,
                "title": "Alien",
                "full_path": "/us/movie/alien",
                "original_release_year": 1979,
                "offers": [
                    {"monetization_type": "flatrate", "package_short_name": "hlu", "retail_price": null},
                    {"monetization_type": "rent", "package_short_name": "itu"},
                    {"monetization_type": "cinema", "package_short_name": "xyz"}
                ]
            }]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let item = &response.items[0];
        assert!(item.has_release_year());
        let offers = item.offers.as_ref().unwrap();
        assert!(offers[0].monetization_type.is_subscription());
        assert_eq!(offers[1].monetization_type, MonetizationType::Rent);
        assert_eq!(offers[2].monetization_type, MonetizationType::Other);
    }

    #[test]
    fn test_missing_items_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_missing_year_and_offers() {
        let item: SearchItem = serde_json::from_str(r#"{"title": "Heat"}"#).unwrap();
        assert!(!item.has_release_year());
        assert!(item.offers.is_none());
    }
}
