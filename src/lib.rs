pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::CatalogService;
pub use domain::{
    CatalogItem, Dessert, Dish, Drink, Establishment, EstablishmentSummary, Price, Rating,
    Registry, SizeLabel, VariantTag,
};
pub use error::{CatalogError, StoreError, ValidationError};
pub use storage::{EstablishmentStore, InMemoryStore, JsonFileStore};
