//! List command implementation

use anyhow::Result;
use bibliomaniac_core::{BookRecord, CatalogStore};
use serde::Serialize;

/// One shelf row in `--json` output
#[derive(Serialize)]
struct ShelfEntry<'a> {
    id: &'a str,
    title: &'a str,
    author: &'a str,
    rating: f32,
    stars: String,
    price: Option<&'a str>,
    category: Option<&'a str>,
}

impl<'a> From<&'a BookRecord> for ShelfEntry<'a> {
    fn from(book: &'a BookRecord) -> Self {
        Self {
            id: book.id.as_str(),
            title: &book.title,
            author: &book.author,
            rating: book.rating,
            stars: book.stars(),
            price: book.price.as_deref(),
            category: book.category.as_deref(),
        }
    }
}

/// List the shelf, optionally narrowed to one category tab
pub fn list(store: &CatalogStore, category: Option<&str>, json: bool) -> Result<()> {
    let books: Vec<&BookRecord> = match category {
        Some(category) => store.in_category(category),
        None => store.books().iter().collect(),
    };

    if json {
        let entries: Vec<ShelfEntry> = books.iter().copied().map(ShelfEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books found in this category.");
        return Ok(());
    }

    for book in books {
        println!(
            "{:>4}  {:<32} {:<20} {}  {}",
            book.id.as_str(),
            book.title,
            book.author,
            book.stars(),
            book.price.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
