//! Registry owning every [`Establishment`] and its persistence.

use std::sync::Arc;

use crate::domain::Establishment;
use crate::error::StoreError;
use crate::storage::EstablishmentStore;

/// The ordered collection of all establishments, backed by an [`EstablishmentStore`].
pub struct Registry {
    establishments: Vec<Establishment>,
    store: Arc<dyn EstablishmentStore>,
}

impl Registry {
    /// Creates an empty registry. Nothing is read until [`Registry::load`] is called.
    pub fn new(store: Arc<dyn EstablishmentStore>) -> Self {
        Self {
            establishments: Vec::new(),
            store,
        }
    }

    /// Replaces the in-memory collection with the persisted one.
    ///
    /// A missing document leaves the registry empty. So does a malformed one: the failure is
    /// logged and the process keeps running with no data. Returns the number of
    /// establishments loaded.
    pub async fn load(&mut self) -> usize {
        self.establishments.clear();
        match self.store.load().await {
            Ok(establishments) => {
                self.establishments = establishments;
                tracing::info!(
                    count = self.establishments.len(),
                    location = %self.store.location(),
                    "loaded establishments"
                );
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.store.location(),
                    error = %e,
                    "could not read persisted establishments, starting empty"
                );
            }
        }
        self.establishments.len()
    }

    /// Writes the whole collection, overwriting the persisted document.
    pub async fn save(&self) -> Result<(), StoreError> {
        self.store.save(&self.establishments).await?;
        tracing::debug!(
            count = self.establishments.len(),
            location = %self.store.location(),
            "saved establishments"
        );
        Ok(())
    }

    /// Case-insensitive exact match on the establishment name.
    pub fn find_by_name(&self, name: &str) -> Option<&Establishment> {
        self.establishments.iter().find(|e| e.matches_name(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Establishment> {
        self.establishments.iter_mut().find(|e| e.matches_name(name))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Appends without checking for duplicates; callers check [`Registry::contains_name`] first.
    pub fn insert(&mut self, establishment: Establishment) {
        self.establishments.push(establishment);
    }

    pub fn establishments(&self) -> &[Establishment] {
        &self.establishments
    }

    pub fn len(&self) -> usize {
        self.establishments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.establishments.is_empty()
    }
}
