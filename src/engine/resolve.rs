//! Scripture text resolution.
//!
//! Grouping derives *which* verses a response needs; resolution turns that
//! verse set into display text by:
//!
//! - fetching every version row for the whole set in one batched
//!   [`VerseTextSource`] call,
//! - picking one version per verse,
//! - formatting a display label for the chosen version.
//!
//! ## Version selection
//!
//! Per verse, the default pick is the **first row in collaborator-returned
//! order**. That order is arbitrary as far as this module is concerned — it
//! is not guaranteed to be semantically meaningful, only stable for identical
//! inputs. A preferred version abbreviation, when supplied, overrides the
//! default with the first case-insensitive match among that verse's rows.
//!
//! Verses with no rows are absent from the returned map; callers default the
//! display fields to `None`.

use crate::source::{SourceError, VerseRow, VerseTextSource};
use std::collections::HashMap;

/// One verse's chosen text and version label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VerseText {
    pub content: String,
    pub version_label: String,
}

/// Batch-resolve text for `verses` of `book` chapter `chapter`.
pub(crate) fn resolve_verse_text(
    source: &impl VerseTextSource,
    book: &str,
    chapter: u32,
    verses: &[u32],
    preferred_version: Option<&str>,
) -> Result<HashMap<u32, VerseText>, SourceError> {
    if verses.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = source.verses_for(book, chapter, verses)?;

    if std::env::var_os("CATENA_DEBUG").is_some() {
        eprintln!(
            "[resolve] book={book} chapter={chapter} requested={} rows={} preferred={:?}",
            verses.len(),
            rows.len(),
            preferred_version
        );
    }

    // Group rows per verse, preserving collaborator row order within a verse.
    let mut by_verse: HashMap<u32, Vec<&VerseRow>> = HashMap::new();
    for row in &rows {
        by_verse.entry(row.verse_number).or_default().push(row);
    }

    let mut resolved = HashMap::with_capacity(by_verse.len());
    for (verse, candidates) in by_verse {
        let chosen = match preferred_version {
            Some(preferred) => candidates
                .iter()
                .find(|row| {
                    row.version_abbreviation.as_deref().is_some_and(|abbr| abbr.eq_ignore_ascii_case(preferred))
                })
                .or_else(|| candidates.first()),
            None => candidates.first(),
        };

        if let Some(row) = chosen {
            resolved.insert(verse, VerseText { content: row.content.clone(), version_label: label(row) });
        }
    }

    Ok(resolved)
}

/// Display label for a version row: abbreviation when present, else full name.
fn label(row: &VerseRow) -> String {
    row.version_abbreviation.clone().unwrap_or_else(|| row.version_name.clone())
}
