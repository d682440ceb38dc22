//! Preview command implementation

use super::resolve;
use anyhow::Result;
use bibliomaniac_core::{paginate, synthesize_sections, CatalogStore, Section};

/// Print the synthesized preview as the reader would page through it
pub fn preview(store: &CatalogStore, id: &str, json: bool) -> Result<()> {
    let book = resolve(store, id)?;
    let pairs = paginate(synthesize_sections(book));

    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
        return Ok(());
    }

    let total = 2 * pairs.len();
    for (index, pair) in pairs.iter().enumerate() {
        let start = 2 * index + 1;
        println!("=== {}-{} / {} ===", start, start + 1, total);
        print_page(&pair.left);
        print_page(&pair.right);
    }

    Ok(())
}

fn print_page(section: &Section) {
    if section.is_empty() {
        println!("(blank page)");
        println!();
        return;
    }
    if !section.title.is_empty() {
        println!("# {}", section.title);
    }
    println!("{}", section.content);
    println!();
}
