//! # catena
//!
//! A deterministic reconciliation and grouping engine for multi-rendering
//! commentary text. For a requested chapter or single verse, many independent
//! historical commentators may have written one or more excerpts, each in an
//! "Original" (period) and/or "Modern" (rephrased) rendering; this crate
//! reconciles them into a clean, display-ready structure:
//!
//! - excerpt merging under a precedence rule (Modern wins a shared slot),
//! - a small verse-range mini-language (`"3"`, `"3-5"`, `"3,5-7,9"`),
//! - stable grouping and ordering of commentaries into verse-range buckets,
//! - character-budgeted preview truncation,
//! - per-verse scripture resolution with preferred-version fallback, batched
//!   across all groups in one collaborator call.
//!
//! The crate fetches nothing itself: callers hand it materialized
//! [`CommentaryRecord`]s and a [`VerseTextSource`] implementation. Data-shape
//! anomalies degrade silently to `None`/empty; the collaborator's
//! [`SourceError`] is the only propagated failure.
//!
//! ```no_run
//! use catena::{chapter_groups, ChapterRequest};
//! # fn demo(records: &[catena::CommentaryRecord], source: &impl catena::VerseTextSource) {
//! let groups = chapter_groups(records, &ChapterRequest::new("genesis", 1), source);
//! # let _ = groups;
//! # }
//! ```

extern crate self as catena;

#[macro_use]
mod macros;
mod api;
mod engine;
mod record;
mod scheme;
mod source;

pub use api::{
    chapter_groups, chapter_groups_verbose, verse_commentaries, verse_commentaries_verbose, AuthorView,
    ChapterRequest, CommentaryView, Mode, VerseGroup, VerseRequest, VerseTextEntry,
};
pub use engine::{parse_verse_range, RunMetrics};
pub use record::{
    AuthorRecord, CommentaryRecord, ExcerptKind, ExcerptRecord, ReconciledExcerpt, VerseReference,
};
pub use scheme::{ColorScheme, SchemeCache};
pub use source::{SourceError, VerseRow, VerseTextSource};
