//! Excerpt reconciliation.
//!
//! A commentator may have written each slot of a commentary in an "Original"
//! (period) rendering, a "Modern" (rephrased) rendering, or both. Slots are
//! identified by the excerpt `order` key; reconciliation collapses the
//! renderings into the single sequence a reader should see for the requested
//! [`Mode`].
//!
//! ## Combined mode
//!
//! Combined is "Modern where available, Original elsewhere", implemented as a
//! first-seen-key, last-Modern-wins walk:
//!
//! - the first excerpt for an `order` claims that slot and fixes its display
//!   position;
//! - a later excerpt for the same `order` replaces the stored one only when
//!   it is Modern — Original never overwrites a stored Modern.
//!
//! Display order is first-seen *key* order, which is why this module pairs a
//! `Vec` with a `HashMap` index instead of re-sorting: the output order must
//! be exactly the upstream pre-sorted `order` sequence, and a numeric re-sort
//! here would mask upstream ordering bugs instead of surfacing them.
//!
//! A commentary with no Modern excerpts at all reconciles in Combined mode
//! exactly as it would in Original mode.

use crate::engine::normalize::normalize;
use crate::record::{ExcerptKind, ExcerptRecord, ReconciledExcerpt};
use crate::Mode;
use std::collections::HashMap;

/// Reconcile one commentary's excerpts for `mode`.
///
/// `excerpts` is assumed pre-sorted ascending by `order` (the fetch layer's
/// contract). Content is normalized on emission; at most one excerpt per
/// distinct `order` survives.
pub(crate) fn reconcile(excerpts: &[ExcerptRecord], mode: Mode) -> Vec<ReconciledExcerpt> {
    match mode {
        Mode::Original => keep_kind(excerpts, ExcerptKind::Original),
        Mode::Modern => keep_kind(excerpts, ExcerptKind::Modern),
        Mode::Combined => {
            if excerpts.iter().any(|e| e.kind == ExcerptKind::Modern) {
                combine(excerpts)
            } else {
                keep_kind(excerpts, ExcerptKind::Original)
            }
        }
    }
}

fn keep_kind(excerpts: &[ExcerptRecord], kind: ExcerptKind) -> Vec<ReconciledExcerpt> {
    excerpts.iter().filter(|e| e.kind == kind).map(emit).collect()
}

fn combine(excerpts: &[ExcerptRecord]) -> Vec<ReconciledExcerpt> {
    let mut slots: Vec<ReconciledExcerpt> = Vec::with_capacity(excerpts.len());
    let mut index: HashMap<u32, usize> = HashMap::with_capacity(excerpts.len());

    for excerpt in excerpts {
        match index.get(&excerpt.order).copied() {
            None => {
                index.insert(excerpt.order, slots.len());
                slots.push(emit(excerpt));
            }
            Some(at) => {
                // Modern always wins a contested slot; position stays fixed.
                if excerpt.kind == ExcerptKind::Modern {
                    slots[at] = emit(excerpt);
                }
            }
        }
    }

    slots
}

fn emit(excerpt: &ExcerptRecord) -> ReconciledExcerpt {
    ReconciledExcerpt { order: excerpt.order, content: normalize(&excerpt.content), kind: excerpt.kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excerpt(order: u32, kind: ExcerptKind, content: &str) -> ExcerptRecord {
        ExcerptRecord { id: u64::from(order) * 10, commentary_id: 1, order, content: content.to_string(), kind }
    }

    #[test]
    fn combined_prefers_modern_for_a_shared_slot() {
        let excerpts = vec![
            excerpt(1, ExcerptKind::Original, "period text"),
            excerpt(1, ExcerptKind::Modern, "rephrased text"),
            excerpt(2, ExcerptKind::Original, "only original"),
        ];

        let out = reconcile(&excerpts, Mode::Combined);
        assert_eq!(out.len(), 2);
        assert_eq!((out[0].order, out[0].kind), (1, ExcerptKind::Modern));
        assert_eq!(out[0].content, "rephrased text");
        assert_eq!((out[1].order, out[1].kind), (2, ExcerptKind::Original));
    }

    #[test]
    fn original_never_overwrites_a_stored_modern() {
        let excerpts = vec![
            excerpt(3, ExcerptKind::Modern, "modern first"),
            excerpt(3, ExcerptKind::Original, "original later"),
        ];

        let out = reconcile(&excerpts, Mode::Combined);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, ExcerptKind::Modern);
        assert_eq!(out[0].content, "modern first");
    }

    #[test]
    fn combined_without_any_modern_equals_original_filter() {
        let excerpts = vec![
            excerpt(1, ExcerptKind::Original, "first"),
            excerpt(2, ExcerptKind::Original, "second"),
        ];

        assert_eq!(reconcile(&excerpts, Mode::Combined), reconcile(&excerpts, Mode::Original));
    }

    #[test]
    fn single_kind_modes_filter_strictly() {
        let excerpts = vec![
            excerpt(1, ExcerptKind::Original, "o1"),
            excerpt(1, ExcerptKind::Modern, "m1"),
            excerpt(2, ExcerptKind::Original, "o2"),
        ];

        let originals = reconcile(&excerpts, Mode::Original);
        assert_eq!(originals.iter().map(|e| e.order).collect::<Vec<_>>(), vec![1, 2]);
        assert!(originals.iter().all(|e| e.kind == ExcerptKind::Original));

        let moderns = reconcile(&excerpts, Mode::Modern);
        assert_eq!(moderns.len(), 1);
        assert_eq!(moderns[0].content, "m1");
    }

    #[test]
    fn content_is_normalized_on_emission() {
        let excerpts = vec![excerpt(1, ExcerptKind::Original, "A\r\nB   ```html C")];
        let out = reconcile(&excerpts, Mode::Original);
        assert_eq!(out[0].content, "A B C");
    }

    #[test]
    fn output_keeps_first_seen_key_order() {
        // Slot 5 is seen before slot 2; display order must honor that, not
        // re-sort numerically.
        let excerpts = vec![
            excerpt(5, ExcerptKind::Original, "five"),
            excerpt(2, ExcerptKind::Modern, "two"),
            excerpt(5, ExcerptKind::Modern, "five modern"),
        ];

        let out = reconcile(&excerpts, Mode::Combined);
        assert_eq!(out.iter().map(|e| e.order).collect::<Vec<_>>(), vec![5, 2]);
        assert_eq!(out[0].content, "five modern");
    }
}
