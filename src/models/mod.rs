// src/models/mod.rs

//! Domain models for the watchlist pipeline.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod film;
mod lookup;
mod service;
mod stats;

// Re-export all public types
pub use config::{Config, CrawlerConfig, LookupConfig, PathsConfig, WatchlistConfig};
pub use film::Film;
pub use lookup::{MonetizationType, Offer, SearchItem, SearchResponse};
pub use service::Service;
pub use stats::{RunStats, StageStats};
