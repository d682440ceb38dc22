//! Page-level types produced by the reader pipeline

use serde::{Deserialize, Serialize};

/// One titled block of reading content
///
/// A section with an empty title and empty content acts as the blank filler
/// page the paginator appends when a book yields an odd number of sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Heading shown above the body; may be empty for the blank page
    pub title: String,

    /// Body text; may be empty for the blank page
    pub content: String,
}

impl Section {
    /// Create a section with a title and body
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// The blank filler page
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the blank filler page
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Two facing pages shown together in the reader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagePair {
    /// Left-hand page
    pub left: Section,

    /// Right-hand page; the blank filler when the book ran out of sections
    pub right: Section,
}

impl PagePair {
    /// Pair up a left and right page
    pub fn new(left: Section, right: Section) -> Self {
        Self { left, right }
    }
}
