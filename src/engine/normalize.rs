//! Excerpt content normalization.
//!
//! Raw excerpt text arrives with markup noise from the ingestion pipeline:
//! CRLF pairs, stray bare newlines, triple-backtick fences, and the literal
//! language tag `html` left behind when a fenced block was stripped of its
//! delimiters but not its header.
//!
//! The chapter and single-verse request paths historically ran slightly
//! different pass orderings. That divergence was a latent inconsistency, not a
//! feature; both paths now share this single pipeline:
//!
//! ```text
//! raw ──▶ CRLF → " " ──▶ drop bare \n ──▶ strip ``` ──▶ strip "html"
//!                                                          │
//!                    trimmed ◀── collapse runs of 2+ whitespace ◀──┘
//! ```
//!
//! Pure function; never panics, never errors.

/// Normalize one excerpt's raw content for display.
pub(crate) fn normalize(raw: &str) -> String {
    let pass = raw.replace("\r\n", " ");
    let pass = pass.replace('\n', "");
    let pass = pass.replace("```", "");
    let pass = pass.replace("html", "");
    let collapsed = regex!(r"\s{2,}").replace_all(&pass, " ");
    collapsed.trim().to_string()
}
