//! Categories command implementation

use anyhow::Result;
use bibliomaniac_core::catalog::KNOWN_CATEGORIES;
use bibliomaniac_core::CatalogStore;

/// Category view: one category's shelf, or match counts for every known tab
pub fn categories(store: &CatalogStore, category: Option<&str>) -> Result<()> {
    if let Some(category) = category {
        return super::list(store, Some(category), false);
    }

    for category in KNOWN_CATEGORIES {
        let count = store.in_category(category).len();
        let noun = if count == 1 { "book" } else { "books" };
        println!("{:<18} {:>3} {}", category, count, noun);
    }
    Ok(())
}
