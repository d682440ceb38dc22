//! Catalog record types - what the metadata provider ships per book

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of glyphs in a star rating
const MAX_STARS: usize = 5;

/// Stable book identifier
///
/// The catalog asset may carry ids as JSON numbers or strings depending on
/// the provider; both normalize to the same string form so lookups stay
/// stable across reloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Create an id from any displayable value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The normalized string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => BookId(n.to_string()),
            Raw::Text(s) => BookId(s),
        })
    }
}

/// One catalog entry as shipped in the JSON asset
///
/// Only `id`, `title` and `author` are required; every optional field
/// degrades to placeholder text in the derived views, never to an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Stable identifier, unique within the catalog
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Synopsis shown on the details page and woven into the reading preview
    #[serde(default)]
    pub description: Option<String>,

    /// Author biography shown on the author page
    #[serde(default)]
    pub about_author: Option<String>,

    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,

    /// External preview link, when the metadata provider had one
    #[serde(default)]
    pub preview_link: Option<String>,

    /// Star rating in 0..=5, possibly fractional
    #[serde(default)]
    pub rating: f32,

    /// Display price, already formatted by the provider
    #[serde(default)]
    pub price: Option<String>,

    /// Category label used by the categories view
    #[serde(default)]
    pub category: Option<String>,

    /// Publication date in display form
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Number of books by this author known to the provider
    #[serde(default)]
    pub number_of_books: Option<u32>,
}

impl BookRecord {
    /// Create a record with the required fields
    pub fn new(id: impl Into<BookId>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            description: None,
            about_author: None,
            image: None,
            preview_link: None,
            rating: 0.0,
            price: None,
            category: None,
            publication_date: None,
            number_of_books: None,
        }
    }

    /// Set the synopsis
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the author biography
    pub fn with_about_author(mut self, about_author: impl Into<String>) -> Self {
        self.about_author = Some(about_author.into());
        self
    }

    /// Set the external preview link
    pub fn with_preview_link(mut self, preview_link: impl Into<String>) -> Self {
        self.preview_link = Some(preview_link.into());
        self
    }

    /// Set the star rating
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Set the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The record's rating as star glyphs
    pub fn stars(&self) -> String {
        stars(self.rating)
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Top-level shape of the catalog asset: `{ "books": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Books in provider order; the home view shows them as-is
    pub books: Vec<BookRecord>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the catalog
    pub fn add_book(&mut self, book: BookRecord) {
        self.books.push(book);
    }

    /// Look up a record by id
    pub fn book(&self, id: &BookId) -> Option<&BookRecord> {
        self.books.iter().find(|b| &b.id == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Render a rating as five star glyphs, e.g. `★★★☆☆`
///
/// Fractional ratings round down; out-of-range values clamp to 0..=5.
pub fn stars(rating: f32) -> String {
    let full = (rating.max(0.0).floor() as usize).min(MAX_STARS);
    format!("{}{}", "★".repeat(full), "☆".repeat(MAX_STARS - full))
}
