//! Engine run metrics.
//!
//! Opt-in timing data for the two request paths. The normal entry points skip
//! collection entirely; the `*_verbose` variants in `crate::api` fill these in
//! so regressions in reconciliation or the batched text resolution can be
//! localized without a profiler.

use std::time::Duration;

/// Phase timings for one request.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the request path.
    pub total: Duration,
    /// Time spent reconciling and normalizing excerpts.
    pub reconcile: Duration,
    /// Time spent grouping and ordering (chapter path only).
    pub group: Duration,
    /// Time spent in the batched verse-text resolution, including the
    /// collaborator call (chapter path only).
    pub resolve: Duration,
    /// Number of commentaries that survived filtering/reconciliation.
    pub commentaries: usize,
    /// Number of verses requested from the text collaborator.
    pub verses_requested: usize,
}
