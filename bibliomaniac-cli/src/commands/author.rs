//! Author command implementation

use super::resolve;
use anyhow::Result;
use bibliomaniac_core::CatalogStore;

/// Display the author page reached from a book
pub fn author(store: &CatalogStore, id: &str) -> Result<()> {
    let book = resolve(store, id)?;

    println!("{}", book.author);
    if let Some(count) = book.number_of_books {
        println!("{} books", count);
    }

    println!();
    println!("About this author");
    match &book.about_author {
        Some(bio) if !bio.trim().is_empty() => println!("{}", bio),
        _ => println!("No author information available."),
    }

    let shelf = store.books_by_author(&book.author);
    if shelf.len() > 1 {
        println!();
        println!("In the catalog:");
        for other in shelf {
            println!("  {:>4}  {}", other.id.as_str(), other.title);
        }
    }

    Ok(())
}
