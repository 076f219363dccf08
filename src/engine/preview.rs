//! Bounded-length preview accumulation.
//!
//! The single-verse path shows a truncated snippet per commentary next to the
//! full excerpt list. The preview is built from the *reconciled* set only:
//! excerpts filtered out by the requested mode never contribute text and never
//! count toward the "was anything cut off" check.

use crate::record::ReconciledExcerpt;

/// Default preview budget, in characters.
pub(crate) const DEFAULT_PREVIEW_BUDGET: usize = 150;

/// Accumulate up to `budget` characters across `excerpts`, in order.
///
/// Budgeting is `char`-wise so multibyte scripture text can never be split
/// mid code point. When the excerpts hold more text than was emitted, a
/// single `…` is appended, so the result is at most `budget + 1` chars.
pub(crate) fn preview(excerpts: &[ReconciledExcerpt], budget: usize) -> String {
    let mut out = String::new();
    let mut taken = 0usize;
    let mut available = 0usize;

    for excerpt in excerpts {
        available += excerpt.content.chars().count();
        if taken < budget {
            let slice = excerpt.content.chars().take(budget - taken);
            for ch in slice {
                out.push(ch);
                taken += 1;
            }
        }
    }

    if available > taken {
        out.push('…');
    }

    out
}
