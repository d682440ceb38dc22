//! Core types for the Bibliomaniac catalog and reader

mod book;
mod page;

pub use book::{stars, BookId, BookRecord, Catalog};
pub use page::{PagePair, Section};
