//! The reconciliation and grouping pipeline.
//!
//! This module is the internal core shared by the two request paths in
//! `crate::api`. It started as a single monolithic `engine.rs` and is now
//! split into focused submodules under `src/engine/` with stable paths.
//!
//! ## How the parts work together
//!
//! ```text
//! CommentaryRecord[] (pre-sorted excerpts, fetch collaborator)
//!         │
//!         ├── single-verse path ──▶ filter (filter.rs)
//!         │                            │
//!         ▼                            ▼
//!     reconcile (reconcile.rs) ◀──── mode
//!       - Original / Modern filter
//!       - Combined: first-seen slot, Modern wins
//!       - normalize content (normalize.rs)
//!         │
//!         ├── chapter path ──▶ group_members (group.rs)
//!         │                      - bucket by (group_id, verse_range)
//!         │                      - two-key deterministic sort
//!         │                      - union verse numbers (range.rs)
//!         │                        │
//!         │                        ▼
//!         │                   resolve_verse_text (resolve.rs)
//!         │                      - ONE batched collaborator call
//!         │                      - preferred-version fallback
//!         │
//!         └── single-verse path ──▶ preview (preview.rs)
//!                                      - char budget + ellipsis
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: scrubs markup/whitespace noise from raw excerpt text.
//! - `range.rs`: parses the verse-range mini-language (`"3,5-7,9"`).
//! - `reconcile.rs`: merges Original/Modern excerpt variants per mode.
//! - `filter.rs`: keeps commentaries whose interval contains a target verse.
//! - `group.rs`: buckets commentaries into ordered verse-range groups.
//! - `preview.rs`: accumulates a bounded-length text preview.
//! - `resolve.rs`: batch-resolves scripture text with version fallback.
//! - `metrics.rs`: opt-in timing data for the verbose entry points.
//!
//! Everything here is a pure transformation except `resolve.rs`, which calls
//! the [`VerseTextSource`](crate::VerseTextSource) collaborator. No step can fail on
//! well-typed input; upstream lookup failure is the only propagated error.
//!
//! ## Debugging
//!
//! Set `CATENA_DEBUG=1` to print grouping and resolution traces.

#[path = "engine/filter.rs"]
pub(crate) mod filter;
#[path = "engine/group.rs"]
pub(crate) mod group;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
pub(crate) mod normalize;
#[path = "engine/preview.rs"]
pub(crate) mod preview;
#[path = "engine/range.rs"]
mod range;
#[path = "engine/reconcile.rs"]
pub(crate) mod reconcile;
#[path = "engine/resolve.rs"]
pub(crate) mod resolve;

pub use metrics::RunMetrics;
pub use range::parse_verse_range;
