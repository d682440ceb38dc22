//! Error types for the Bibliomaniac core

use crate::types::BookId;
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while loading or querying the catalog
///
/// The reader engine has no error type of its own: synthesis, pagination and
/// page navigation are total over any record that carries the required
/// fields, so only the catalog side can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}
