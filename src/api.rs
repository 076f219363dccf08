use crate::engine::group::{self, GroupFacts};
use crate::engine::preview::{preview, DEFAULT_PREVIEW_BUDGET};
use crate::engine::{filter, reconcile, resolve, RunMetrics};
use crate::record::{CommentaryRecord, ReconciledExcerpt, VerseReference};
use crate::scheme::{ColorScheme, SchemeCache};
use crate::source::{SourceError, VerseTextSource};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Which excerpt rendering a request wants.
///
/// `Combined` prefers Modern text over Original for a shared slot and is the
/// default for both request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    Original,
    Modern,
    #[default]
    Combined,
}

/// Parameters for the chapter path.
///
/// `book` and `chapter` are required identifiers; requests missing them are
/// expected to be rejected by the boundary layer before this engine runs.
#[derive(Debug, Clone)]
pub struct ChapterRequest {
    pub book: String,
    pub chapter: u32,
    pub mode: Mode,
    /// Version abbreviation to prefer when resolving scripture text, matched
    /// case-insensitively. Absent or unmatched falls back per-verse to the
    /// first available version.
    pub preferred_version: Option<String>,
}

impl ChapterRequest {
    pub fn new(book: impl Into<String>, chapter: u32) -> Self {
        Self { book: book.into(), chapter, mode: Mode::default(), preferred_version: None }
    }
}

/// Parameters for the single-verse path.
#[derive(Debug, Clone)]
pub struct VerseRequest {
    pub verse: u32,
    pub mode: Mode,
    /// Maximum preview length in characters (excluding the trailing ellipsis).
    pub preview_budget: usize,
}

impl VerseRequest {
    pub fn new(verse: u32) -> Self {
        Self { verse, mode: Mode::default(), preview_budget: DEFAULT_PREVIEW_BUDGET }
    }
}

/// Commentator projection carried on each view-model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub name: String,
    pub slug: String,
    /// Parsed display styling; `None` when absent or malformed upstream.
    pub scheme: Option<ColorScheme>,
}

/// One commentary, reconciled and ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentaryView {
    pub id: u64,
    pub slug: String,
    pub source: String,
    pub source_url: Option<String>,
    pub group_id: Option<String>,
    pub reference: Option<VerseReference>,
    pub author: AuthorView,
    /// Full reconciled excerpt sequence, untruncated.
    pub excerpts: Vec<ReconciledExcerpt>,
    /// Truncated snippet; populated on the single-verse path only.
    pub preview: Option<String>,
}

/// Resolved scripture text for one verse of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseTextEntry {
    pub verse_number: u32,
    pub verse: Option<String>,
    pub version: Option<String>,
}

/// One ordered verse-range bucket of the chapter response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseGroup {
    /// Representative verse number (first of the range; sort tiebreak key).
    pub verse_number: u32,
    pub verse_range: String,
    pub group_id: Option<String>,
    pub commentaries: Vec<CommentaryView>,
    pub verses: Vec<VerseTextEntry>,
}

/// Build the chapter response: reconciled commentaries bucketed into ordered
/// verse-range groups, each hydrated with scripture text.
///
/// The only external interaction is one batched [`VerseTextSource`] call for
/// the union of every group's verses; its failure is the only error this
/// function returns.
pub fn chapter_groups(
    records: &[CommentaryRecord],
    request: &ChapterRequest,
    source: &impl VerseTextSource,
) -> Result<Vec<VerseGroup>, SourceError> {
    chapter_groups_verbose(records, request, source).map(|(groups, _)| groups)
}

/// [`chapter_groups`] plus phase timings, for profiling and debugging.
pub fn chapter_groups_verbose(
    records: &[CommentaryRecord],
    request: &ChapterRequest,
    source: &impl VerseTextSource,
) -> Result<(Vec<VerseGroup>, RunMetrics), SourceError> {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();
    let mut schemes = SchemeCache::new();

    let phase = Instant::now();
    let items: Vec<(GroupFacts, CommentaryView)> = records
        .iter()
        .map(|record| (GroupFacts::of(record), commentary_view(record, request.mode, &mut schemes, None)))
        .collect();
    metrics.reconcile = phase.elapsed();
    metrics.commentaries = items.len();

    let phase = Instant::now();
    let buckets = group::group_members(items);
    let wanted = group::union_verse_numbers(&buckets);
    metrics.group = phase.elapsed();
    metrics.verses_requested = wanted.len();

    let phase = Instant::now();
    let resolved = resolve::resolve_verse_text(
        source,
        &request.book,
        request.chapter,
        &wanted,
        request.preferred_version.as_deref(),
    )?;
    metrics.resolve = phase.elapsed();

    let groups = buckets
        .into_iter()
        .map(|bucket| {
            let verses = group::bucket_verse_numbers(&bucket)
                .into_iter()
                .map(|verse_number| match resolved.get(&verse_number) {
                    Some(text) => VerseTextEntry {
                        verse_number,
                        verse: Some(text.content.clone()),
                        version: Some(text.version_label.clone()),
                    },
                    None => VerseTextEntry { verse_number, verse: None, version: None },
                })
                .collect();

            VerseGroup {
                verse_number: bucket.verse_number,
                verse_range: bucket.verse_range,
                group_id: bucket.group_id,
                commentaries: bucket.members,
                verses,
            }
        })
        .collect();

    metrics.total = started.elapsed();
    Ok((groups, metrics))
}

/// Build the single-verse response: commentaries whose interval contains the
/// target verse, each carrying a bounded preview and its full excerpt list.
pub fn verse_commentaries(records: &[CommentaryRecord], request: &VerseRequest) -> Vec<CommentaryView> {
    verse_commentaries_verbose(records, request).0
}

/// [`verse_commentaries`] plus phase timings.
pub fn verse_commentaries_verbose(
    records: &[CommentaryRecord],
    request: &VerseRequest,
) -> (Vec<CommentaryView>, RunMetrics) {
    let started = Instant::now();
    let mut metrics = RunMetrics::default();
    let mut schemes = SchemeCache::new();

    let phase = Instant::now();
    let views: Vec<CommentaryView> = filter::for_verse(records, request.verse)
        .into_iter()
        .map(|record| commentary_view(record, request.mode, &mut schemes, Some(request.preview_budget)))
        .collect();
    metrics.reconcile = phase.elapsed();
    metrics.commentaries = views.len();
    metrics.total = started.elapsed();

    (views, metrics)
}

fn commentary_view(
    record: &CommentaryRecord,
    mode: Mode,
    schemes: &mut SchemeCache,
    preview_budget: Option<usize>,
) -> CommentaryView {
    let excerpts = reconcile::reconcile(&record.excerpts, mode);
    let preview = preview_budget.map(|budget| preview(&excerpts, budget));
    let scheme = record.author.color_scheme.as_deref().and_then(|raw| schemes.resolve(raw));

    CommentaryView {
        id: record.id,
        slug: record.slug.clone(),
        source: record.source.clone(),
        source_url: record.source_url.clone(),
        group_id: record.group_id.clone(),
        reference: record.reference,
        author: AuthorView { name: record.author.name.clone(), slug: record.author.slug.clone(), scheme },
        excerpts,
        preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AuthorRecord, ExcerptKind, ExcerptRecord};
    use crate::source::VerseRow;

    struct InMemorySource(Vec<VerseRow>);

    impl VerseTextSource for InMemorySource {
        fn verses_for(&self, _book: &str, _chapter: u32, verses: &[u32]) -> Result<Vec<VerseRow>, SourceError> {
            Ok(self.0.iter().filter(|r| verses.contains(&r.verse_number)).cloned().collect())
        }
    }

    struct FailingSource;

    impl VerseTextSource for FailingSource {
        fn verses_for(&self, _book: &str, _chapter: u32, _verses: &[u32]) -> Result<Vec<VerseRow>, SourceError> {
            Err(SourceError::Lookup("backend down".into()))
        }
    }

    fn excerpt(commentary_id: u64, order: u32, kind: ExcerptKind, content: &str) -> ExcerptRecord {
        ExcerptRecord { id: commentary_id * 100 + u64::from(order), commentary_id, order, content: content.into(), kind }
    }

    fn record(id: u64, group_id: Option<&str>, range: Option<&str>, start: u32, end: Option<u32>) -> CommentaryRecord {
        CommentaryRecord {
            id,
            author: AuthorRecord {
                name: "Matthew Henry".into(),
                slug: "matthew-henry".into(),
                color_scheme: Some(r##"{"background":"#fdf6e3"}"##.into()),
            },
            slug: format!("commentary-{id}"),
            source: "Commentary on the Whole Bible".into(),
            source_url: Some("https://example.org/henry".into()),
            group_id: group_id.map(str::to_string),
            explicit_verse_range: range.map(str::to_string),
            reference: Some(VerseReference { start, end }),
            excerpts: vec![
                excerpt(id, 1, ExcerptKind::Original, "The original rendering."),
                excerpt(id, 1, ExcerptKind::Modern, "The modern rendering."),
                excerpt(id, 2, ExcerptKind::Original, "A second paragraph."),
            ],
        }
    }

    fn kjv(verse: u32, content: &str) -> VerseRow {
        VerseRow {
            verse_number: verse,
            content: content.into(),
            version_name: "King James Version".into(),
            version_abbreviation: Some("KJV".into()),
        }
    }

    #[test]
    fn chapter_path_builds_hydrated_sorted_groups() {
        let records = vec![
            record(1, None, Some("3-4"), 3, Some(4)),
            record(2, None, Some("1"), 1, None),
            record(3, None, Some("3-4"), 3, Some(4)),
        ];
        let source = InMemorySource(vec![kjv(1, "In the beginning"), kjv(3, "And God said"), kjv(4, "And God saw")]);

        let groups = chapter_groups(&records, &ChapterRequest::new("genesis", 1), &source).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].verse_range, "1");
        assert_eq!(groups[1].verse_range, "3-4");
        assert_eq!(groups[1].commentaries.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);

        let verses = &groups[1].verses;
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].verse.as_deref(), Some("And God said"));
        assert_eq!(verses[0].version.as_deref(), Some("KJV"));

        // Combined mode: Modern won slot 1, Original kept slot 2.
        let excerpts = &groups[1].commentaries[0].excerpts;
        assert_eq!(excerpts.len(), 2);
        assert_eq!(excerpts[0].kind, ExcerptKind::Modern);
    }

    #[test]
    fn unmatched_verses_hydrate_to_null_entries() {
        let records = vec![record(1, None, Some("7-8"), 7, Some(8))];
        let source = InMemorySource(vec![kjv(7, "text for seven")]);

        let groups = chapter_groups(&records, &ChapterRequest::new("genesis", 1), &source).unwrap();
        let verses = &groups[0].verses;
        assert_eq!(verses[1].verse_number, 8);
        assert_eq!(verses[1].verse, None);
        assert_eq!(verses[1].version, None);
    }

    #[test]
    fn chapter_path_propagates_source_failure() {
        let records = vec![record(1, None, Some("1"), 1, None)];
        assert!(chapter_groups(&records, &ChapterRequest::new("genesis", 1), &FailingSource).is_err());
    }

    #[test]
    fn chapter_path_is_deterministic() {
        let records = vec![
            record(1, Some("g1"), Some("2-3"), 2, Some(3)),
            record(2, None, Some("5"), 5, None),
            record(3, Some("g1"), Some("2-3"), 2, Some(3)),
        ];
        let source = InMemorySource(vec![kjv(2, "two"), kjv(3, "three"), kjv(5, "five")]);
        let request = ChapterRequest::new("psalms", 23);

        let first = chapter_groups(&records, &request, &source).unwrap();
        let second = chapter_groups(&records, &request, &source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn verse_path_filters_previews_and_parses_schemes() {
        let records = vec![
            record(1, None, None, 3, Some(5)),
            record(2, None, None, 9, None),
        ];
        let mut request = VerseRequest::new(4);
        request.preview_budget = 10;

        let views = verse_commentaries(&records, &request);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, 1);
        // Combined text starts with the winning Modern rendering.
        assert_eq!(views[0].preview.as_deref(), Some("The modern…"));
        assert_eq!(views[0].excerpts.len(), 2);
        assert_eq!(views[0].author.scheme.as_ref().unwrap().background.as_deref(), Some("#fdf6e3"));
    }

    #[test]
    fn verse_path_defaults_to_combined_mode_and_150_budget() {
        let request = VerseRequest::new(1);
        assert_eq!(request.mode, Mode::Combined);
        assert_eq!(request.preview_budget, 150);
    }

    #[test]
    fn original_mode_reaches_the_view_models() {
        let records = vec![record(1, None, None, 1, None)];
        let mut request = VerseRequest::new(1);
        request.mode = Mode::Original;

        let views = verse_commentaries(&records, &request);
        assert!(views[0].excerpts.iter().all(|e| e.kind == ExcerptKind::Original));
        assert_eq!(views[0].excerpts.len(), 2);
    }

    #[test]
    fn verbose_variants_report_phase_metrics() {
        let records = vec![record(1, None, Some("1-2"), 1, Some(2))];
        let source = InMemorySource(vec![kjv(1, "one"), kjv(2, "two")]);

        let (groups, metrics) =
            chapter_groups_verbose(&records, &ChapterRequest::new("genesis", 1), &source).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(metrics.commentaries, 1);
        assert_eq!(metrics.verses_requested, 2);
        assert!(metrics.total >= metrics.resolve);

        let (views, metrics) = verse_commentaries_verbose(&records, &VerseRequest::new(1));
        assert_eq!(views.len(), 1);
        assert_eq!(metrics.commentaries, 1);
    }
}
