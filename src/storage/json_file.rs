//! Whole-document JSON file store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::Establishment;
use crate::error::StoreError;
use crate::storage::EstablishmentStore;

/// Stores the registry as a single pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Four-space indentation, non-ASCII written as-is.
fn to_document(establishments: &[Establishment]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    establishments.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

#[async_trait]
impl EstablishmentStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Establishment>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save(&self, establishments: &[Establishment]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        let document = to_document(establishments)?;
        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| self.io_error(e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
