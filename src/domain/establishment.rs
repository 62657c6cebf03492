use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogItem;
use crate::domain::names_match;
use crate::domain::rating::Rating;
use crate::error::ValidationError;

/// One business in the registry: its status, ratings and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    name: String,
    category: String,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    ratings: Vec<Rating>,
    #[serde(default)]
    catalog: Vec<CatalogItem>,
}

/// Compact listing view of an [`Establishment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstablishmentSummary {
    pub name: String,
    pub category: String,
    pub active: bool,
    /// `None` until the first rating arrives.
    pub average_rating: Option<f64>,
}

impl Establishment {
    /// New establishments start inactive, unrated and with an empty catalog.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            active: false,
            ratings: Vec::new(),
            catalog: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Flips the active flag and describes the new state.
    pub fn toggle_active(&mut self) -> String {
        self.active = !self.active;
        let state = if self.active { "activated" } else { "deactivated" };
        format!("Establishment '{}' was {}", self.name, state)
    }

    /// Appends a rating; nothing is recorded when the score or author is invalid.
    pub fn add_rating(
        &mut self,
        author: impl Into<String>,
        score: f64,
    ) -> Result<(), ValidationError> {
        let rating = Rating::new(author, score)?;
        self.ratings.push(rating);
        Ok(())
    }

    /// Mean score rounded to one decimal place, exact ties going to the even digit (4.25 -> 4.2).
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: f64 = self.ratings.iter().map(Rating::score).sum();
        let mean = total / self.ratings.len() as f64;
        Some((mean * 10.0).round_ties_even() / 10.0)
    }

    /// Items with an already used name are accepted; lookups return the first match.
    pub fn add_catalog_item(&mut self, item: CatalogItem) {
        self.catalog.push(item);
    }

    pub fn find_catalog_item(&self, name: &str) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| names_match(item.name(), name))
    }

    pub fn find_catalog_item_mut(&mut self, name: &str) -> Option<&mut CatalogItem> {
        self.catalog
            .iter_mut()
            .find(|item| names_match(item.name(), name))
    }

    pub fn summary(&self) -> EstablishmentSummary {
        EstablishmentSummary {
            name: self.name.clone(),
            category: self.category.clone(),
            active: self.active,
            average_rating: self.average_rating(),
        }
    }
}
