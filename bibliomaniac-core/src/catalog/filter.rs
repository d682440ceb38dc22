//! Category filtering for the browse view

use crate::types::BookRecord;

/// Category tabs offered by the browse view, in display order
pub const KNOWN_CATEGORIES: [&str; 5] =
    ["fiction", "classics", "science-fiction", "fantasy", "mystery"];

/// Map a category tab to the substring actually searched for
///
/// Provider data labels books loosely ("Classic Literature",
/// "Science Fiction & Fantasy"), so a couple of tabs search a broader stem
/// than their own name. Unknown categories search for themselves.
pub fn category_search_term(category: &str) -> &str {
    match category {
        "classics" => "classic",
        "science-fiction" => "science",
        other => other,
    }
}

/// Books whose category label contains the tab's search term
///
/// Matching is case-insensitive; records without a category never match.
pub fn books_in_category<'a>(books: &'a [BookRecord], category: &str) -> Vec<&'a BookRecord> {
    let term = category_search_term(category).to_lowercase();
    books
        .iter()
        .filter(|book| {
            book.category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&term))
        })
        .collect()
}
