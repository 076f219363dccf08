//! The verse-text collaborator seam.
//!
//! The engine never touches a database. When the chapter path needs scripture
//! text it asks a [`VerseTextSource`] for every required verse in **one**
//! batched call; issuing one lookup per verse group is exactly the N+1 fan-out
//! this boundary exists to prevent.
//!
//! Implementations are expected to be deterministic: identical arguments must
//! yield rows in a stable order, because the resolver's default-version pick
//! is "first row returned" (see `engine::resolve`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One scripture row: a verse's text in one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRow {
    pub verse_number: u32,
    pub content: String,
    /// Full version name, e.g. `"King James Version"`.
    pub version_name: String,
    /// Short label, e.g. `"KJV"`. Preferred over `version_name` for display.
    pub version_abbreviation: Option<String>,
}

/// Failure surfaced by a [`VerseTextSource`] implementation.
///
/// This is the engine's sole propagated error: every data-shape anomaly inside
/// the pipeline degrades to `None`/empty instead.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store rejected or failed the batched lookup.
    #[error("verse text lookup failed: {0}")]
    Lookup(String),
}

/// Batched scripture lookup for a (book, chapter, verse-set) triple.
pub trait VerseTextSource {
    /// Return every available version row for the requested verses.
    ///
    /// `verses` is deduplicated and ascending. Verses with no rows are simply
    /// omitted from the result; that is not an error.
    fn verses_for(&self, book: &str, chapter: u32, verses: &[u32]) -> Result<Vec<VerseRow>, SourceError>;
}
