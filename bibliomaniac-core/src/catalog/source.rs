//! Catalog sources - where book metadata comes from

use crate::error::{CatalogError, Result};
use crate::types::Catalog;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

/// Abstract catalog provider
///
/// A source produces the full catalog in one fetch; incremental loading is
/// not part of the contract since catalogs are small metadata files.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and validate the full catalog
    async fn fetch(&self) -> Result<Catalog>;

    /// Human-readable origin for log lines
    fn origin(&self) -> String;
}

/// Catalog backed by a JSON asset on disk
///
/// Expects the provider shape `{ "books": [...] }` with camelCase record
/// fields, the same file the web front end ships under `assets/data/`.
pub struct JsonAssetSource {
    path: PathBuf,
}

impl JsonAssetSource {
    /// Create a source reading from the given asset path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonAssetSource {
    async fn fetch(&self) -> Result<Catalog> {
        debug!(path = %self.path.display(), "reading catalog asset");
        let bytes = tokio::fs::read(&self.path).await?;
        let catalog: Catalog = serde_json::from_slice(&bytes)?;
        validate(&catalog)?;
        Ok(catalog)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory catalog, used by tests and by embedders that already hold data
pub struct MemorySource {
    catalog: Catalog,
}

impl MemorySource {
    /// Create a source serving the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for MemorySource {
    async fn fetch(&self) -> Result<Catalog> {
        validate(&self.catalog)?;
        Ok(self.catalog.clone())
    }

    fn origin(&self) -> String {
        "memory".to_string()
    }
}

/// Reject catalogs that would break id-based lookups
fn validate(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::new();
    for book in &catalog.books {
        if book.id.as_str().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "book '{}' has an empty id",
                book.title
            )));
        }
        if !seen.insert(&book.id) {
            return Err(CatalogError::Invalid(format!(
                "duplicate book id: {}",
                book.id
            )));
        }
    }
    Ok(())
}
