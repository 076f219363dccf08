//! Author color-scheme parsing.
//!
//! Commentator records carry an optional raw JSON blob describing display
//! styling. Parsing it is the only guarded operation anywhere near the engine:
//! malformed JSON is caught and treated as absent, never propagated.
//!
//! The parse cache is an explicit, per-request value passed down from the API
//! layer — deliberately *not* a module-level singleton — so the engine stays
//! reentrant and each request's author list is forgotten once its response is
//! built.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display styling for a commentator, as declared upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
}

/// Request-scoped memo of raw JSON → parsed scheme.
///
/// Authors repeat across the commentaries of one chapter, so the same blob
/// would otherwise be parsed once per commentary.
#[derive(Debug, Default)]
pub struct SchemeCache {
    parsed: HashMap<String, Option<ColorScheme>>,
}

impl SchemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw`, returning `None` for malformed JSON. Results (including
    /// failures) are memoized for the life of the cache.
    pub fn resolve(&mut self, raw: &str) -> Option<ColorScheme> {
        if let Some(hit) = self.parsed.get(raw) {
            return hit.clone();
        }
        let parsed = serde_json::from_str::<ColorScheme>(raw).ok();
        self.parsed.insert(raw.to_string(), parsed.clone());
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_scheme() {
        let mut cache = SchemeCache::new();
        let scheme = cache.resolve(r##"{"background":"#fdf6e3","foreground":"#586e75","accent":null}"##).unwrap();
        assert_eq!(scheme.background.as_deref(), Some("#fdf6e3"));
        assert_eq!(scheme.accent, None);
    }

    #[test]
    fn malformed_json_degrades_to_absent() {
        let mut cache = SchemeCache::new();
        assert_eq!(cache.resolve("{not json"), None);
        // Second hit comes from the memo, still absent.
        assert_eq!(cache.resolve("{not json"), None);
    }

    #[test]
    fn unknown_fields_do_not_fail_the_parse() {
        let mut cache = SchemeCache::new();
        let scheme = cache.resolve(r##"{"background":"#fff","border":"#000"}"##);
        assert!(scheme.is_some());
    }
}
