//! Show command implementation

use super::resolve;
use anyhow::Result;
use bibliomaniac_core::CatalogStore;

/// Display one book's details page
pub fn show(store: &CatalogStore, id: &str, json: bool) -> Result<()> {
    let book = resolve(store, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }

    println!("Title:      {}", book.title);
    println!("Author:     {}", book.author);
    if let Some(date) = &book.publication_date {
        println!("Published:  {}", date);
    }
    println!("Rating:     {} ({:.1})", book.stars(), book.rating);
    if let Some(price) = &book.price {
        println!("Price:      {}", price);
    }
    if let Some(category) = &book.category {
        println!("Category:   {}", category);
    }
    if let Some(description) = &book.description {
        println!();
        println!("About this e-book");
        println!("{}", description);
    }

    Ok(())
}
