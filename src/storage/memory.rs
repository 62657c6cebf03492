//! In-memory store keeping the last saved document as a JSON string.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::Establishment;
use crate::error::StoreError;
use crate::storage::EstablishmentStore;

/// Useful for tests and throwaway runs. Goes through the same serialization as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Mutex<Option<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a raw document (which may be malformed).
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    /// The last saved document, if any.
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EstablishmentStore for InMemoryStore {
    async fn load(&self) -> Result<Vec<Establishment>, StoreError> {
        match self.document() {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, establishments: &[Establishment]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(establishments)?;
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
