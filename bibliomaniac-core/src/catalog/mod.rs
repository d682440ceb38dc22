//! Catalog access - loading, lookups and shelf views
//!
//! A [`CatalogStore`] is the session-scoped copy of the provider data: it is
//! fetched once from a [`CatalogSource`] and then only read. Every view in
//! the front end (home shelf, details, author page, category tabs, reader)
//! works off the same store instance.

mod filter;
mod source;

pub use filter::{books_in_category, category_search_term, KNOWN_CATEGORIES};
pub use source::{CatalogSource, JsonAssetSource, MemorySource};

use crate::error::{CatalogError, Result};
use crate::types::{BookId, BookRecord, Catalog};
use chrono::{DateTime, Utc};
use tracing::info;

/// Loaded catalog plus the moment it was fetched
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalog: Catalog,
    fetched_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Wrap an already-loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            fetched_at: Utc::now(),
        }
    }

    /// Fetch the catalog from a source and wrap it
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = source.fetch().await?;
        info!(books = catalog.len(), origin = %source.origin(), "catalog loaded");
        Ok(Self::new(catalog))
    }

    /// All records in provider order
    pub fn books(&self) -> &[BookRecord] {
        &self.catalog.books
    }

    /// Look up a record, `None` when the id is unknown
    pub fn get(&self, id: &BookId) -> Option<&BookRecord> {
        self.catalog.book(id)
    }

    /// Look up a record, failing with [`CatalogError::BookNotFound`]
    pub fn book(&self, id: &BookId) -> Result<&BookRecord> {
        self.get(id)
            .ok_or_else(|| CatalogError::BookNotFound(id.clone()))
    }

    /// All records sharing the given author name, matched case-insensitively
    pub fn books_by_author(&self, author: &str) -> Vec<&BookRecord> {
        let author = author.to_lowercase();
        self.catalog
            .books
            .iter()
            .filter(|book| book.author.to_lowercase() == author)
            .collect()
    }

    /// Records matching a category tab
    pub fn in_category(&self, category: &str) -> Vec<&BookRecord> {
        books_in_category(&self.catalog.books, category)
    }

    /// When this store's data was fetched
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
