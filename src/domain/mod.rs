//! Domain model: establishments, their ratings and catalog items, and the registry that owns them.

pub mod catalog;
pub mod establishment;
pub mod rating;
pub mod registry;

pub use catalog::{CatalogItem, Dessert, Dish, Drink, Price, SizeLabel, VariantTag};
pub use establishment::{Establishment, EstablishmentSummary};
pub use rating::Rating;
pub use registry::Registry;

/// Names are keys compared case-insensitively ("Praça" matches "PRAÇA").
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
