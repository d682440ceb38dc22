//! Bibliomaniac Core Library
//!
//! This crate provides the catalog model and reading engine for the
//! Bibliomaniac book front end. Book metadata is loaded once per session
//! from a [`catalog::CatalogSource`]; the reading preview is synthesized
//! from that metadata, laid out as facing page pairs, and driven by a
//! [`reader::ReaderSession`] that animates page turns with a deferred
//! commit. No real book text is ever fetched.

pub mod catalog;
pub mod error;
pub mod reader;
pub mod types;

pub use catalog::{CatalogSource, CatalogStore, JsonAssetSource, MemorySource};
pub use error::{CatalogError, Result};
pub use reader::{paginate, synthesize_sections, PageView, ReaderSession, TickResult, DEFAULT_TURN_MS};
pub use types::{stars, BookId, BookRecord, Catalog, PagePair, Section};
