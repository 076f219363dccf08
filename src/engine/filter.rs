//! Single-verse commentary filtering.
//!
//! A cheap pre-filter ahead of reconciliation on the single-verse path:
//! survivors are exactly the commentaries whose verse interval contains the
//! target verse. Relative order is preserved — the fetch layer's ordering is
//! the display ordering.

use crate::record::CommentaryRecord;

/// True when `record` addresses `target`.
///
/// No reference at all excludes the record. A reference without an end verse
/// addresses only its start verse; otherwise the interval is closed on both
/// ends. Reversed intervals (`end < start`) are not guarded — upstream data is
/// assumed well-formed, and a reversed interval simply matches nothing.
pub(crate) fn addresses_verse(record: &CommentaryRecord, target: u32) -> bool {
    match &record.reference {
        None => false,
        Some(reference) => match reference.end {
            None => reference.start == target,
            Some(end) => reference.start <= target && target <= end,
        },
    }
}

/// Filter `records` to those addressing `target`, preserving order.
pub(crate) fn for_verse<'a>(records: &'a [CommentaryRecord], target: u32) -> Vec<&'a CommentaryRecord> {
    records.iter().filter(|r| addresses_verse(r, target)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AuthorRecord, VerseReference};

    fn record(id: u64, reference: Option<VerseReference>) -> CommentaryRecord {
        CommentaryRecord {
            id,
            author: AuthorRecord { name: "Matthew Henry".into(), slug: "matthew-henry".into(), color_scheme: None },
            slug: format!("commentary-{id}"),
            source: "Commentary on the Whole Bible".into(),
            source_url: None,
            group_id: None,
            explicit_verse_range: None,
            reference,
            excerpts: Vec::new(),
        }
    }

    #[test]
    fn point_reference_matches_only_its_verse() {
        let r = record(1, Some(VerseReference { start: 3, end: None }));
        assert!(addresses_verse(&r, 3));
        assert!(!addresses_verse(&r, 2));
        assert!(!addresses_verse(&r, 4));
    }

    #[test]
    fn interval_is_closed_on_both_ends() {
        let r = record(1, Some(VerseReference { start: 3, end: Some(5) }));
        for verse in [3, 4, 5] {
            assert!(addresses_verse(&r, verse), "verse {verse} should match");
        }
        assert!(!addresses_verse(&r, 2));
        assert!(!addresses_verse(&r, 6));
    }

    #[test]
    fn missing_reference_excludes_the_record() {
        assert!(!addresses_verse(&record(1, None), 1));
    }

    #[test]
    fn surviving_order_is_input_order() {
        let records = vec![
            record(9, Some(VerseReference { start: 1, end: Some(10) })),
            record(4, Some(VerseReference { start: 7, end: None })),
            record(2, Some(VerseReference { start: 5, end: Some(8) })),
        ];

        let kept: Vec<u64> = for_verse(&records, 7).iter().map(|r| r.id).collect();
        assert_eq!(kept, vec![9, 4, 2]);
    }
}
