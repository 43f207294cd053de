//! Streaming service buckets used while building the report.

use std::collections::BTreeMap;

use crate::models::Film;

/// A configured service of interest and the films it carries.
///
/// Built fresh for each report and never persisted.
#[derive(Debug, Clone)]
pub struct Service<'a> {
    /// Short code used by the lookup service (e.g. `nfx`)
    pub short_name: String,

    /// Display name from configuration
    pub name: String,

    films: Vec<&'a Film>,
}

impl<'a> Service<'a> {
    pub fn new(short_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            name: name.into(),
            films: Vec::new(),
        }
    }

    /// Build one empty bucket per configured short code.
    pub fn from_config(services: &BTreeMap<String, String>) -> BTreeMap<String, Service<'a>> {
        services
            .iter()
            .map(|(short_name, name)| (short_name.clone(), Service::new(short_name, name)))
            .collect()
    }

    /// Add a film; adding the same record twice has no effect.
    pub fn add(&mut self, film: &'a Film) {
        if !self.films.iter().any(|known| std::ptr::eq(*known, film)) {
            self.films.push(film);
        }
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Member films ordered by title.
    pub fn sorted_films(&self) -> Vec<&'a Film> {
        let mut films = self.films.clone();
        films.sort_by(|a, b| a.title.cmp(&b.title));
        films
    }

    /// Section header line.
    pub fn heading(&self) -> String {
        self.name.to_uppercase()
    }
}
