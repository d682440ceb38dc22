//! CLI command implementations

mod author;
mod categories;
mod list;
mod preview;
mod show;

pub use author::author;
pub use categories::categories;
pub use list::list;
pub use preview::preview;
pub use show::show;

use anyhow::{Context, Result};
use bibliomaniac_core::{BookId, BookRecord, CatalogStore, JsonAssetSource};
use std::path::Path;

/// Load the catalog asset every command works from
pub async fn load_store(data: &Path) -> Result<CatalogStore> {
    CatalogStore::load(&JsonAssetSource::new(data))
        .await
        .with_context(|| format!("Failed to load catalog from {}", data.display()))
}

/// Resolve a user-supplied id, listing the known ids when it does not match
pub(crate) fn resolve<'a>(store: &'a CatalogStore, id: &str) -> Result<&'a BookRecord> {
    store.book(&BookId::new(id)).with_context(|| {
        let known: Vec<&str> = store.books().iter().map(|b| b.id.as_str()).collect();
        format!("Known book ids: {}", known.join(", "))
    })
}
