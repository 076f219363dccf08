//! The verse-range mini-language.
//!
//! Range tokens name which verses a commentary addresses: `"7"`, `"3-5"`, or
//! comma-joined mixtures like `"3,5-7,9"`. The grammar is deliberately
//! forgiving — tokens come from upstream slugs and editorial metadata, and a
//! malformed segment must cost only itself, never the request.

use std::collections::BTreeSet;

/// Parse a range token into an ascending, deduplicated verse list.
///
/// Segments are comma-separated. A segment containing `-` enumerates the
/// inclusive interval (bounds swapped if reversed); anything else parses as a
/// single verse number. Unparseable segments are silently skipped. When
/// nothing parses, `fallback` seeds the result iff it is positive.
///
/// ```
/// use catena::parse_verse_range;
///
/// assert_eq!(parse_verse_range(Some("3,5-7,9"), 0), vec![3, 5, 6, 7, 9]);
/// assert_eq!(parse_verse_range(Some("7-5"), 0), vec![5, 6, 7]);
/// assert_eq!(parse_verse_range(Some(""), 4), vec![4]);
/// assert_eq!(parse_verse_range(None, 0), Vec::<u32>::new());
/// ```
pub fn parse_verse_range(token: Option<&str>, fallback: u32) -> Vec<u32> {
    let mut verses = BTreeSet::new();

    if let Some(token) = token {
        for segment in token.split(',') {
            let segment = segment.trim();
            match segment.split_once('-') {
                Some((lo, hi)) => {
                    let (Ok(a), Ok(b)) = (lo.trim().parse::<u32>(), hi.trim().parse::<u32>()) else {
                        continue;
                    };
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    verses.extend(lo..=hi);
                }
                None => {
                    if let Ok(v) = segment.parse::<u32>() {
                        verses.insert(v);
                    }
                }
            }
        }
    }

    if verses.is_empty() && fallback > 0 {
        verses.insert(fallback);
    }

    verses.into_iter().collect()
}
