//! Error types for the catalog service.

use std::path::PathBuf;

use rust_decimal::Decimal;

/// Input that violates a domain invariant. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("score must be a number between 1 and 5, got {0}")]
    OutOfRange(f64),

    #[error("rating author must not be empty")]
    EmptyAuthor,

    #[error("establishment name must not be empty")]
    EmptyName,

    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("unknown catalog item variant '{0}' (expected dish, drink or dessert)")]
    UnknownVariant(String),

    #[error("invalid catalog item record: {0}")]
    InvalidRecord(String),
}

/// Failures of a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything a front end can get back from a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("establishment '{0}' not found")]
    EstablishmentNotFound(String),

    #[error("item '{item}' not found in '{establishment}'")]
    ItemNotFound { establishment: String, item: String },

    #[error("establishment '{0}' already exists")]
    Duplicate(String),

    /// The in-memory change was applied but could not be written; memory is ahead of disk
    /// until the next successful save.
    #[error("failed to persist registry: {0}")]
    Persistence(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_converts_into_catalog_error() {
        let err = CatalogError::from(ValidationError::OutOfRange(6.0));
        assert!(matches!(err, CatalogError::Validation(ValidationError::OutOfRange(_))));
        assert!(err.to_string().contains("between 1 and 5"));
    }

    #[test]
    fn store_io_error_names_the_path() {
        let err = StoreError::Io {
            path: PathBuf::from("dados/restaurantes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = CatalogError::from(err).to_string();
        assert!(msg.contains("failed to persist registry"));
        assert!(msg.contains("dados/restaurantes.json"));
    }
}
