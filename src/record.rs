//! Input data model.
//!
//! These records mirror the shape produced by the upstream fetch collaborator:
//! one `CommentaryRecord` per commentator excerpt-set, with nested author,
//! verse reference, and excerpt arrays. The engine never queries for them
//! itself; callers hand it a fully materialized `Vec<CommentaryRecord>`.
//!
//! ## The pre-sort contract
//!
//! `CommentaryRecord::excerpts` **must** arrive sorted ascending by
//! [`ExcerptRecord::order`]. Combined-mode reconciliation emits excerpts in
//! first-seen key order rather than re-sorting, so a violated pre-sort
//! surfaces directly as a display-order defect. This is a deliberate, load
//! bearing contract with the fetch layer.

use serde::{Deserialize, Serialize};

/// Which rendering of the commentary text an excerpt carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExcerptKind {
    /// The commentator's period text, as written.
    Original,
    /// A rephrased, contemporary-language rendering of the same slot.
    Modern,
}

/// The verse interval a commentary addresses, when known.
///
/// `end` of `None` means the commentary targets the single verse `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseReference {
    pub start: u32,
    pub end: Option<u32>,
}

/// A paragraph-level unit of commentary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptRecord {
    pub id: u64,
    pub commentary_id: u64,
    /// Sort and merge key. Two excerpts sharing an `order` are renderings of
    /// the same slot (see `engine::reconcile`).
    pub order: u32,
    /// Raw text; may carry CRLF noise and fenced-code artifacts. Normalized
    /// by `engine::normalize` before it reaches any output.
    pub content: String,
    pub kind: ExcerptKind,
}

/// A commentator projection carried alongside each commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub name: String,
    pub slug: String,
    /// Raw display-styling JSON. Only ever parsed through a
    /// [`SchemeCache`](crate::SchemeCache); malformed content degrades to absent.
    pub color_scheme: Option<String>,
}

/// One commentator's excerpt set for a chapter or verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryRecord {
    pub id: u64,
    pub author: AuthorRecord,
    pub slug: String,
    /// Human-readable citation for the work this commentary is taken from.
    pub source: String,
    pub source_url: Option<String>,
    /// Upstream key linking sibling commentaries meant to render as one unit.
    pub group_id: Option<String>,
    /// Range token (e.g. `"3-5"` or `"3,5-7"`) supplied by the fetch layer.
    ///
    /// Historically this was re-derived from a fixed slug path position; it is
    /// a named field here so a slug-depth change upstream cannot silently
    /// shift which segment gets parsed.
    pub explicit_verse_range: Option<String>,
    pub reference: Option<VerseReference>,
    /// Pre-sorted ascending by `order` (see module docs).
    pub excerpts: Vec<ExcerptRecord>,
}

/// A normalized excerpt after mode reconciliation.
///
/// `kind` is retained so callers can trace which rendering won a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledExcerpt {
    pub order: u32,
    pub content: String,
    pub kind: ExcerptKind,
}
