//! The Catalog Service.
//!
//! This module sits between the front ends (HTTP API, console menu) and the registry.
//! It is responsible for:
//! 1.  Resolving establishments and catalog items by name.
//! 2.  Enforcing name uniqueness when establishments are created.
//! 3.  Saving the whole registry after every mutation, before returning to the caller.

use std::sync::Arc;

use crate::domain::{CatalogItem, Establishment, EstablishmentSummary, Registry};
use crate::error::{CatalogError, Result, ValidationError};
use crate::storage::EstablishmentStore;

/// The operations exposed to front ends.
pub struct CatalogService {
    registry: Registry,
}

impl CatalogService {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Builds a registry on `store` and performs the start-up load.
    pub async fn open(store: Arc<dyn EstablishmentStore>) -> Self {
        let mut registry = Registry::new(store);
        registry.load().await;
        Self::new(registry)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Writes the current state. Front ends call this on shutdown; mutations save on their own.
    pub async fn save(&self) -> Result<()> {
        self.registry.save().await.map_err(|e| {
            tracing::warn!(error = %e, "registry save failed, memory is ahead of disk");
            CatalogError::from(e)
        })
    }

    pub fn find(&self, name: &str) -> Result<&Establishment> {
        self.registry
            .find_by_name(name)
            .ok_or_else(|| CatalogError::EstablishmentNotFound(name.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Establishment> {
        self.registry
            .find_by_name_mut(name)
            .ok_or_else(|| CatalogError::EstablishmentNotFound(name.to_string()))
    }

    /// Registers a new establishment. Names are trimmed and must be unique ignoring case.
    pub async fn create_establishment(
        &mut self,
        name: &str,
        category: &str,
    ) -> Result<EstablishmentSummary> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.registry.contains_name(name) {
            return Err(CatalogError::Duplicate(name.to_string()));
        }

        let establishment = Establishment::new(name, category.trim());
        let summary = establishment.summary();
        self.registry.insert(establishment);
        tracing::info!(establishment = %name, "registered establishment");

        self.save().await?;
        Ok(summary)
    }

    /// Flips the active flag and returns the status message.
    pub async fn toggle_active(&mut self, name: &str) -> Result<String> {
        let message = self.find_mut(name)?.toggle_active();
        tracing::debug!(establishment = %name, %message, "toggled establishment");
        self.save().await?;
        Ok(message)
    }

    pub async fn add_rating(&mut self, name: &str, author: &str, score: f64) -> Result<()> {
        self.find_mut(name)?.add_rating(author.trim(), score)?;
        tracing::debug!(establishment = %name, score, "recorded rating");
        self.save().await
    }

    pub async fn add_catalog_item(&mut self, name: &str, item: CatalogItem) -> Result<()> {
        tracing::debug!(
            establishment = %name,
            item = %item.name(),
            variant = %item.variant(),
            "adding catalog item"
        );
        self.find_mut(name)?.add_catalog_item(item);
        self.save().await
    }

    pub fn catalog(&self, name: &str) -> Result<&[CatalogItem]> {
        Ok(self.find(name)?.catalog())
    }

    /// Applies the item's discount and returns the item as it now stands.
    pub async fn apply_discount(&mut self, name: &str, item_name: &str) -> Result<CatalogItem> {
        let establishment = self.find_mut(name)?;
        let item = establishment
            .find_catalog_item_mut(item_name)
            .ok_or_else(|| CatalogError::ItemNotFound {
                establishment: name.to_string(),
                item: item_name.to_string(),
            })?;
        item.apply_discount();
        let item = item.clone();
        tracing::debug!(
            establishment = %name,
            item = %item.name(),
            price = %item.price(),
            "applied discount"
        );

        self.save().await?;
        Ok(item)
    }

    pub fn establishments(&self) -> &[Establishment] {
        self.registry.establishments()
    }

    pub fn summaries(&self) -> Vec<EstablishmentSummary> {
        self.registry
            .establishments()
            .iter()
            .map(Establishment::summary)
            .collect()
    }
}
