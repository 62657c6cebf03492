//! Persistence backends for the establishment registry.
//!
//! A store always reads and writes the whole collection as one document.

use async_trait::async_trait;

use crate::domain::Establishment;
use crate::error::StoreError;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

#[async_trait]
pub trait EstablishmentStore: Send + Sync {
    /// Reads the persisted collection. A document that does not exist yet is an empty collection.
    async fn load(&self) -> Result<Vec<Establishment>, StoreError>;

    /// Overwrites the persisted collection with `establishments`.
    async fn save(&self, establishments: &[Establishment]) -> Result<(), StoreError>;

    /// Where the data lives, for log lines.
    fn location(&self) -> String;
}
