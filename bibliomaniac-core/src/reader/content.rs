//! Section synthesis - derives a reading preview from catalog metadata
//!
//! Real book text is never fetched; the preview is built entirely from the
//! record's own fields. The same record always yields byte-identical
//! sections, so the pagination downstream is reproducible.

use crate::types::{BookRecord, Section};

/// Build the ordered preview sections for one book
///
/// Always emits a cover section first and a sample chapter plus closing
/// section last; synopsis and author sections appear only when the record
/// carries the corresponding text. Missing optional fields fall back to
/// placeholder wording, never to an error.
pub fn synthesize_sections(book: &BookRecord) -> Vec<Section> {
    let mut sections = Vec::with_capacity(5);

    sections.push(cover(book));
    if let Some(description) = non_empty(&book.description) {
        sections.push(Section::new("Synopsis", description));
    }
    if let Some(bio) = non_empty(&book.about_author) {
        sections.push(Section::new("About the author", bio));
    }
    sections.push(sample_chapter(book));
    sections.push(closing(book));

    sections
}

fn cover(book: &BookRecord) -> Section {
    let mut content = format!("by {}", book.author);
    if let Some(date) = non_empty(&book.publication_date) {
        content.push_str("\n\nFirst published ");
        content.push_str(date);
        content.push('.');
    }
    Section::new(book.title.clone(), content)
}

fn sample_chapter(book: &BookRecord) -> Section {
    let synopsis = non_empty(&book.description)
        .unwrap_or("No synopsis has been provided for this title.");
    let content = format!(
        "This book, written by {}, explores fascinating themes. {}",
        book.author, synopsis
    );
    Section::new("Chapter One", content)
}

fn closing(book: &BookRecord) -> Section {
    let content = match non_empty(&book.preview_link) {
        Some(link) => format!("This sample ends here. The full preview is available at {link}."),
        None => "This sample ends here. No external preview is available for this title.".to_string(),
    };
    Section::new("Where to read on", content)
}

/// Treat absent and whitespace-only fields the same way
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
